//! Response buffer helpers for command handlers.

use core::fmt;

use heapless::String;
use serde::Serialize;

/// Fixed-capacity text buffer a handler writes its response into.
pub type Response<const N: usize> = String<N>;

/// A [`fmt::Write`] adapter that keeps as much output as fits and silently
/// drops the rest, the way `snprintf` truncates.
///
/// Writing into a bare [`heapless::String`] fails as soon as a piece does not
/// fit and leaves that piece out entirely; `Truncate` fills the buffer up to
/// the last whole character instead.
///
/// # Examples
///
/// ```rust
/// use core::fmt::Write;
/// use cmdparser::parser::{Response, Truncate};
///
/// let mut response: Response<8> = Response::new();
/// write!(Truncate::new(&mut response), "value={}", 123456).unwrap();
/// assert_eq!(response.as_str(), "value=12");
/// ```
#[derive(Debug)]
pub struct Truncate<'a, const N: usize> {
    inner: &'a mut String<N>,
}

impl<'a, const N: usize> Truncate<'a, N> {
    /// Wrap a response buffer. Existing contents are kept.
    pub fn new(inner: &'a mut String<N>) -> Self {
        Self { inner }
    }
}

impl<const N: usize> fmt::Write for Truncate<'_, N> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for ch in s.chars() {
            if self.inner.push(ch).is_err() {
                break;
            }
        }
        Ok(())
    }
}

/// Errors from [`write_json`].
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ResponseError {
    /// The serialized value does not fit in the response buffer.
    BufferOverflow,
}

impl fmt::Display for ResponseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResponseError::BufferOverflow => f.write_str("response buffer overflow"),
        }
    }
}

impl core::error::Error for ResponseError {}

#[cfg(feature = "defmt")]
impl defmt::Format for ResponseError {
    fn format(&self, f: defmt::Formatter) {
        match self {
            ResponseError::BufferOverflow => defmt::write!(f, "BufferOverflow"),
        }
    }
}

/// Append `value` to `response` as compact JSON.
///
/// On error the response is left as it was.
///
/// The value is first serialized into an `N`-byte scratch buffer on the stack,
/// so each call needs about `N` bytes of stack on top of the response itself.
/// Keep that in mind when choosing a large `RESPONSE_SIZE` on small targets.
///
/// # Examples
///
/// ```rust
/// use cmdparser::parser::{Response, write_json};
///
/// #[derive(serde::Serialize)]
/// struct Position {
///     x: i64,
///     y: i64,
/// }
///
/// let mut response: Response<64> = Response::new();
/// write_json(&Position { x: 45, y: -23 }, &mut response).unwrap();
/// assert_eq!(response.as_str(), r#"{"x":45,"y":-23}"#);
/// ```
pub fn write_json<T, const N: usize>(value: &T, response: &mut String<N>) -> Result<(), ResponseError>
where
    T: Serialize + ?Sized,
{
    let mut buf = [0u8; N];
    let len = serde_json_core::to_slice(value, &mut buf).map_err(|_| ResponseError::BufferOverflow)?;
    let text = core::str::from_utf8(&buf[..len]).map_err(|_| ResponseError::BufferOverflow)?;
    response
        .push_str(text)
        .map_err(|_| ResponseError::BufferOverflow)
}
