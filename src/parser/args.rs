//! Argument type tags and parsed argument values.

use heapless::Vec;
use serde::ser::{Serialize, Serializer};

/// The type of one positional argument, as declared at registration.
///
/// Each variant maps to a single-character tag in the argument type string
/// passed to [`register_command`](super::CommandParser::register_command):
///
/// | Tag | Variant              | Value  |
/// |-----|----------------------|--------|
/// | `d` | [`ArgType::Double`]  | `f64`  |
/// | `i` | [`ArgType::Int64`]   | `i64`  |
/// | `u` | [`ArgType::UInt64`]  | `u64`  |
/// | `s` | [`ArgType::String`]  | bytes  |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArgType {
    /// A floating-point number.
    Double,
    /// A signed 64-bit integer.
    Int64,
    /// An unsigned 64-bit integer.
    UInt64,
    /// A quoted byte string.
    String,
}

impl ArgType {
    /// Decode a tag byte, returning `None` for anything other than `d`, `i`, `u` or `s`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cmdparser::parser::ArgType;
    ///
    /// assert_eq!(ArgType::from_tag(b'i'), Some(ArgType::Int64));
    /// assert_eq!(ArgType::from_tag(b'x'), None);
    /// ```
    pub const fn from_tag(tag: u8) -> Option<Self> {
        match tag {
            b'd' => Some(ArgType::Double),
            b'i' => Some(ArgType::Int64),
            b'u' => Some(ArgType::UInt64),
            b's' => Some(ArgType::String),
            _ => None,
        }
    }

    /// The tag byte for this type; the inverse of [`from_tag`](Self::from_tag).
    pub const fn tag(self) -> u8 {
        match self {
            ArgType::Double => b'd',
            ArgType::Int64 => b'i',
            ArgType::UInt64 => b'u',
            ArgType::String => b's',
        }
    }

    /// The name used for this type in parse error messages.
    pub const fn type_name(self) -> &'static str {
        match self {
            ArgType::Double => "double",
            ArgType::Int64 => "int64_t",
            ArgType::UInt64 => "uint64_t",
            ArgType::String => "string",
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ArgType {
    fn format(&self, f: defmt::Formatter) {
        match self {
            ArgType::Double => defmt::write!(f, "Double"),
            ArgType::Int64 => defmt::write!(f, "Int64"),
            ArgType::UInt64 => defmt::write!(f, "UInt64"),
            ArgType::String => defmt::write!(f, "String"),
        }
    }
}

/// One parsed argument value.
///
/// The variant always matches the [`ArgType`] declared for the argument's
/// position, so handlers can use the `as_*` accessors and treat `None` as a
/// registration mistake.
///
/// String arguments are raw bytes: `\xHH` escapes may produce bytes that are
/// not valid UTF-8. Use [`as_bytes`](Self::as_bytes) for the exact value or
/// [`as_str`](Self::as_str) when the handler expects text.
#[derive(Debug, Clone, PartialEq)]
pub enum Argument<const ARG_SIZE: usize> {
    /// Value of a `d` argument.
    Double(f64),
    /// Value of an `i` argument.
    Int64(i64),
    /// Value of a `u` argument.
    UInt64(u64),
    /// Value of an `s` argument, with escapes already decoded.
    String(Vec<u8, ARG_SIZE>),
}

impl<const ARG_SIZE: usize> Default for Argument<ARG_SIZE> {
    fn default() -> Self {
        Argument::Int64(0)
    }
}

impl<const ARG_SIZE: usize> Argument<ARG_SIZE> {
    /// The type of the stored value.
    pub fn arg_type(&self) -> ArgType {
        match self {
            Argument::Double(_) => ArgType::Double,
            Argument::Int64(_) => ArgType::Int64,
            Argument::UInt64(_) => ArgType::UInt64,
            Argument::String(_) => ArgType::String,
        }
    }

    /// The value of a `d` argument.
    pub fn as_double(&self) -> Option<f64> {
        match self {
            Argument::Double(value) => Some(*value),
            _ => None,
        }
    }

    /// The value of an `i` argument.
    pub fn as_int64(&self) -> Option<i64> {
        match self {
            Argument::Int64(value) => Some(*value),
            _ => None,
        }
    }

    /// The value of a `u` argument.
    pub fn as_uint64(&self) -> Option<u64> {
        match self {
            Argument::UInt64(value) => Some(*value),
            _ => None,
        }
    }

    /// The decoded bytes of an `s` argument.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Argument::String(bytes) => Some(bytes.as_slice()),
            _ => None,
        }
    }

    /// The decoded text of an `s` argument, if it is valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        self.as_bytes()
            .and_then(|bytes| core::str::from_utf8(bytes).ok())
    }
}

impl<const ARG_SIZE: usize> Serialize for Argument<ARG_SIZE> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Argument::Double(value) => serializer.serialize_f64(*value),
            Argument::Int64(value) => serializer.serialize_i64(*value),
            Argument::UInt64(value) => serializer.serialize_u64(*value),
            Argument::String(bytes) => match core::str::from_utf8(bytes) {
                Ok(text) => serializer.serialize_str(text),
                Err(_) => serializer.collect_seq(bytes.iter()),
            },
        }
    }
}

#[cfg(feature = "defmt")]
impl<const ARG_SIZE: usize> defmt::Format for Argument<ARG_SIZE> {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Argument::Double(value) => defmt::write!(f, "Double({})", value),
            Argument::Int64(value) => defmt::write!(f, "Int64({})", value),
            Argument::UInt64(value) => defmt::write!(f, "UInt64({})", value),
            Argument::String(bytes) => defmt::write!(f, "String({=[u8]})", bytes.as_slice()),
        }
    }
}
