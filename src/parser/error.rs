//! Error types for registration and command processing

use core::fmt;

use super::args::ArgType;

/// Reasons a call to [`register_command`](super::CommandParser::register_command) is refused.
///
/// A refused registration never modifies the registry.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum RegisterError {
    /// The registry already holds its maximum number of commands.
    RegistryFull,
    /// The command name is longer than the configured maximum.
    NameTooLong,
    /// More argument types were given than the configured maximum arity.
    TooManyArgs,
    /// The argument type string contains a byte other than `d`, `i`, `u` or `s`.
    InvalidArgType(u8),
}

impl fmt::Display for RegisterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegisterError::RegistryFull => f.write_str("command registry is full"),
            RegisterError::NameTooLong => f.write_str("command name too long"),
            RegisterError::TooManyArgs => f.write_str("too many argument types"),
            RegisterError::InvalidArgType(tag) => {
                write!(f, "invalid argument type {}", char::from(*tag))
            }
        }
    }
}

impl core::error::Error for RegisterError {}

#[cfg(feature = "defmt")]
impl defmt::Format for RegisterError {
    fn format(&self, f: defmt::Formatter) {
        match self {
            RegisterError::RegistryFull => defmt::write!(f, "RegistryFull"),
            RegisterError::NameTooLong => defmt::write!(f, "NameTooLong"),
            RegisterError::TooManyArgs => defmt::write!(f, "TooManyArgs"),
            RegisterError::InvalidArgType(tag) => {
                defmt::write!(f, "InvalidArgType({=u8})", *tag)
            }
        }
    }
}

/// Reasons a command line is rejected by
/// [`process_command`](super::CommandParser::process_command).
///
/// Argument positions (`arg`) are 1-indexed. The [`Display`](fmt::Display)
/// output is the exact message written to the response buffer, e.g.
/// `parse error: invalid int64_t for arg 1`.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ParseError<'a> {
    /// No registered command has this name. The name is the (possibly
    /// truncated) prefix read from the line.
    UnknownCommand {
        /// Name as read from the line.
        name: &'a [u8],
    },
    /// An argument was not preceded by at least one space.
    MissingWhitespace {
        /// Position of the argument.
        arg: usize,
    },
    /// An argument could not be parsed as its declared type.
    InvalidArgument {
        /// Position of the argument.
        arg: usize,
        /// Declared type of the argument.
        arg_type: ArgType,
    },
    /// A stored type tag is not recognized. Registration rejects such tags, so
    /// this is only reported if that validation was bypassed.
    InvalidArgType {
        /// The offending tag byte.
        tag: u8,
        /// Position of the argument.
        arg: usize,
    },
    /// Input remained after the last expected argument.
    TooManyArgs {
        /// The command's declared arity.
        expected: usize,
    },
}

impl fmt::Display for ParseError<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("parse error: ")?;
        match self {
            ParseError::UnknownCommand { name } => {
                f.write_str("unknown command name ")?;
                write_lossy(f, name)
            }
            ParseError::MissingWhitespace { arg } => {
                write!(f, "missing whitespace before arg {arg}")
            }
            ParseError::InvalidArgument { arg, arg_type } => {
                write!(f, "invalid {} for arg {arg}", arg_type.type_name())
            }
            ParseError::InvalidArgType { tag, arg } => {
                write!(f, "invalid argtype {} for arg {arg}", char::from(*tag))
            }
            ParseError::TooManyArgs { expected } => {
                write!(f, "too many args (expected {expected})")
            }
        }
    }
}

/// Write raw bytes as text, escaping anything that is not valid UTF-8 as `\xHH`.
fn write_lossy(f: &mut fmt::Formatter<'_>, bytes: &[u8]) -> fmt::Result {
    for chunk in bytes.utf8_chunks() {
        f.write_str(chunk.valid())?;
        for byte in chunk.invalid() {
            write!(f, "\\x{byte:02x}")?;
        }
    }
    Ok(())
}

impl core::error::Error for ParseError<'_> {}

#[cfg(feature = "defmt")]
impl defmt::Format for ParseError<'_> {
    fn format(&self, f: defmt::Formatter) {
        match self {
            ParseError::UnknownCommand { name } => {
                defmt::write!(f, "UnknownCommand({=[u8]:a})", *name)
            }
            ParseError::MissingWhitespace { arg } => {
                defmt::write!(f, "MissingWhitespace(arg {})", arg)
            }
            ParseError::InvalidArgument { arg, arg_type } => {
                defmt::write!(f, "InvalidArgument(arg {}, {})", arg, arg_type)
            }
            ParseError::InvalidArgType { tag, arg } => {
                defmt::write!(f, "InvalidArgType({=u8}, arg {})", *tag, arg)
            }
            ParseError::TooManyArgs { expected } => {
                defmt::write!(f, "TooManyArgs(expected {})", expected)
            }
        }
    }
}
