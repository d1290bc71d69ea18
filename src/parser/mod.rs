//! Typed command-line parsing and dispatch.
//!
//! A [`CommandParser`] owns a fixed-size [`Registry`] of commands and a reusable
//! argument array. Each command is registered with a name, an argument type
//! string and a handler. [`process_command`](CommandParser::process_command)
//! then turns a line such as `move 45 -23` into typed [`Argument`]s and calls
//! the matching handler.
//!
//! # Grammar
//!
//! ```text
//! line     := NAME (SPACE+ argument)* SPACE*
//! argument := double | int64 | uint64 | string
//! int64    := [+-]? prefix? digits        prefix := 0b | 0o | 0x
//! uint64   := [+]? prefix? digits
//! double   := [+-]? (digits [. digits?] | . digits) ([eE] [+-]? digits)?
//!           | [+-]? (inf | infinity | nan)
//! string   := '"' (byte | escape)* '"'   escape := \n \r \t \" \\ \xHH
//! ```
//!
//! A line ends at the end of the slice or at the first NUL byte.
//!
//! # Memory
//!
//! All storage is sized by const generics. Nothing is allocated, neither at
//! registration nor while processing a line.
//!
//! | Parameter       | Default | Bound                                  |
//! |-----------------|---------|----------------------------------------|
//! | `COMMANDS`      | 16      | registered commands                    |
//! | `ARGS`          | 4       | arguments per command                  |
//! | `NAME_LEN`      | 10      | bytes in a command name                |
//! | `ARG_SIZE`      | 32      | decoded bytes in a string argument     |
//! | `RESPONSE_SIZE` | 64      | bytes in the response                  |
//!
//! # Examples
//!
//! ```rust
//! use core::fmt::Write;
//! use cmdparser::parser::{Argument, CommandParser, Response};
//!
//! fn move_handler(args: &[Argument<32>], response: &mut Response<64>) {
//!     let x = args[0].as_int64().unwrap_or_default();
//!     let y = args[1].as_int64().unwrap_or_default();
//!     let _ = write!(response, "moved to {x},{y}");
//! }
//!
//! let mut parser: CommandParser = CommandParser::new();
//! parser.register_command("move", "ii", move_handler).unwrap();
//!
//! let mut response = Response::new();
//! parser.process_command(b"move 45 -23", &mut response).unwrap();
//! assert_eq!(response.as_str(), "moved to 45,-23");
//!
//! assert!(parser.process_command(b"move 45", &mut response).is_err());
//! assert_eq!(response.as_str(), "parse error: missing whitespace before arg 2");
//! ```

use core::fmt::Write;

mod args;
mod cursor;
mod error;
mod number;
mod registry;
mod response;
mod string;

#[cfg(test)]
mod tests;

pub use args::{ArgType, Argument};
pub use error::{ParseError, RegisterError};
pub use registry::{Command, Registry};
pub use response::{Response, ResponseError, Truncate, write_json};

use cursor::{Cursor, SPACE};

/// Default maximum number of registered commands.
pub const DEFAULT_MAX_COMMANDS: usize = 16;
/// Default maximum number of arguments per command.
pub const DEFAULT_MAX_ARGS: usize = 4;
/// Default maximum command name length, in bytes.
pub const DEFAULT_MAX_NAME_LEN: usize = 10;
/// Default maximum decoded size of a string argument, in bytes.
pub const DEFAULT_MAX_ARG_SIZE: usize = 32;
/// Default response buffer capacity, in bytes.
pub const DEFAULT_MAX_RESPONSE_SIZE: usize = 64;

/// Function invoked for a successfully parsed command.
///
/// `args` holds exactly one value per declared argument type, in order. The
/// response starts out empty; whatever the handler leaves in it is the
/// command's output.
pub type Handler<const ARG_SIZE: usize, const RESPONSE_SIZE: usize> =
    fn(args: &[Argument<ARG_SIZE>], response: &mut Response<RESPONSE_SIZE>);

/// Command registry plus the processor that parses lines against it.
///
/// The argument array is reused by every call to
/// [`process_command`](Self::process_command); handlers must copy out any
/// value they want to keep.
#[derive(Debug)]
pub struct CommandParser<
    const COMMANDS: usize = DEFAULT_MAX_COMMANDS,
    const ARGS: usize = DEFAULT_MAX_ARGS,
    const NAME_LEN: usize = DEFAULT_MAX_NAME_LEN,
    const ARG_SIZE: usize = DEFAULT_MAX_ARG_SIZE,
    const RESPONSE_SIZE: usize = DEFAULT_MAX_RESPONSE_SIZE,
> {
    registry: Registry<COMMANDS, ARGS, NAME_LEN, ARG_SIZE, RESPONSE_SIZE>,
    args: [Argument<ARG_SIZE>; ARGS],
}

impl<
    const COMMANDS: usize,
    const ARGS: usize,
    const NAME_LEN: usize,
    const ARG_SIZE: usize,
    const RESPONSE_SIZE: usize,
> Default for CommandParser<COMMANDS, ARGS, NAME_LEN, ARG_SIZE, RESPONSE_SIZE>
{
    fn default() -> Self {
        Self::new()
    }
}

impl<
    const COMMANDS: usize,
    const ARGS: usize,
    const NAME_LEN: usize,
    const ARG_SIZE: usize,
    const RESPONSE_SIZE: usize,
> CommandParser<COMMANDS, ARGS, NAME_LEN, ARG_SIZE, RESPONSE_SIZE>
{
    /// Create a parser with no registered commands.
    pub fn new() -> Self {
        Self {
            registry: Registry::new(),
            args: core::array::from_fn(|_| Argument::default()),
        }
    }

    /// Register a command.
    ///
    /// `arg_types` holds one tag per positional argument: `d` (double), `i`
    /// (signed 64-bit), `u` (unsigned 64-bit) or `s` (string). An empty string
    /// declares a command without arguments.
    ///
    /// # Errors
    ///
    /// * [`RegisterError::RegistryFull`] - `COMMANDS` commands are already registered
    /// * [`RegisterError::NameTooLong`] - `name` is longer than `NAME_LEN` bytes
    /// * [`RegisterError::TooManyArgs`] - `arg_types` is longer than `ARGS`
    /// * [`RegisterError::InvalidArgType`] - `arg_types` contains an unknown tag
    ///
    /// The registry is unchanged when an error is returned.
    pub fn register_command(
        &mut self,
        name: &str,
        arg_types: &str,
        handler: Handler<ARG_SIZE, RESPONSE_SIZE>,
    ) -> Result<(), RegisterError> {
        match self.registry.register(name, arg_types, handler) {
            Ok(()) => {
                debug!("registered command {=str} ({=str})", name, arg_types);
                Ok(())
            }
            Err(err) => {
                warn!("rejected command {=str}: {}", name, err);
                Err(err)
            }
        }
    }

    /// Parse `line`, then call the matching handler.
    ///
    /// On success `response` holds whatever the handler wrote (possibly
    /// nothing). On failure it holds the error message, truncated to
    /// `RESPONSE_SIZE` bytes, and no handler has been called.
    ///
    /// # Errors
    ///
    /// Returns the [`ParseError`] describing the first problem found. Errors
    /// borrow from `line`.
    pub fn process_command<'l>(
        &mut self,
        line: &'l [u8],
        response: &mut Response<RESPONSE_SIZE>,
    ) -> Result<(), ParseError<'l>> {
        let result = self.dispatch(line, response);
        if let Err(err) = result {
            debug!("{}", err);
            response.clear();
            let _ = write!(Truncate::new(response), "{err}");
        }
        result
    }

    fn dispatch<'l>(
        &mut self,
        line: &'l [u8],
        response: &mut Response<RESPONSE_SIZE>,
    ) -> Result<(), ParseError<'l>> {
        let mut cursor = Cursor::new(line);

        let name = cursor.take_name(NAME_LEN);
        let command = self
            .registry
            .find(name)
            .ok_or(ParseError::UnknownCommand { name })?;

        for (index, &tag) in command.tags().iter().enumerate() {
            let arg = index + 1;

            if cursor.peek() != SPACE {
                return Err(ParseError::MissingWhitespace { arg });
            }
            cursor.skip_spaces();

            let arg_type = ArgType::from_tag(tag).ok_or(ParseError::InvalidArgType { tag, arg })?;
            let input = cursor.rest();
            let parsed = match arg_type {
                ArgType::Double => {
                    number::parse_double(input).map(|(value, len)| (Argument::Double(value), len))
                }
                ArgType::Int64 => {
                    number::parse_int64(input).map(|(value, len)| (Argument::Int64(value), len))
                }
                ArgType::UInt64 => {
                    number::parse_uint64(input).map(|(value, len)| (Argument::UInt64(value), len))
                }
                ArgType::String => {
                    string::parse_string(input).map(|(value, len)| (Argument::String(value), len))
                }
            };
            let (value, consumed) = parsed.ok_or(ParseError::InvalidArgument { arg, arg_type })?;

            self.args[index] = value;
            cursor.advance(consumed);
        }

        cursor.skip_spaces();
        if !cursor.at_end() {
            return Err(ParseError::TooManyArgs {
                expected: command.arity(),
            });
        }

        trace!("dispatching {=str}", command.name());
        response.clear();
        (command.handler())(&self.args[..command.arity()], response);
        Ok(())
    }

    /// The registered commands, in registration order.
    pub fn commands(
        &self,
    ) -> impl Iterator<Item = &Command<ARGS, NAME_LEN, ARG_SIZE, RESPONSE_SIZE>> {
        self.registry.iter()
    }

    /// The underlying registry.
    pub fn registry(&self) -> &Registry<COMMANDS, ARGS, NAME_LEN, ARG_SIZE, RESPONSE_SIZE> {
        &self.registry
    }
}

/// Register several commands at once, stopping at the first failure.
///
/// Evaluates to `Result<(), RegisterError>`.
///
/// # Examples
///
/// ```rust
/// use cmdparser::parser::{Argument, CommandParser, Response};
/// use cmdparser::register_commands;
///
/// fn noop(_: &[Argument<32>], _: &mut Response<64>) {}
///
/// let mut parser: CommandParser = CommandParser::new();
/// register_commands!(parser, ("led", "u", noop), ("reset", "", noop)).unwrap();
/// assert_eq!(parser.commands().count(), 2);
/// ```
#[macro_export]
macro_rules! register_commands {
    ($parser:expr, $(($name:expr, $arg_types:expr, $handler:expr)),+ $(,)?) => {{
        let mut result: ::core::result::Result<(), $crate::parser::RegisterError> = Ok(());
        $(
            if result.is_ok() {
                result = $parser.register_command($name, $arg_types, $handler);
            }
        )+
        result
    }};
}
