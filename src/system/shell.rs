//! Command shell interface for embedded systems.
//!
//! This module provides a line-editing front end for the
//! [`CommandParser`]. It collects bytes from a UART (or any other byte
//! stream), handles echo and backspace, and hands each complete line to the
//! parser. The handler's response, or the parse error message, is written back
//! through an output function.
//!
//! # Features
//!
//! - **Zero-allocation**: Uses fixed-size buffers for predictable memory usage
//! - **Typed Commands**: Arguments are parsed and validated before a handler runs
//! - **Input Processing**: Character-by-character input processing with echo support
//! - **Command Listing**: Built-in `list` command showing names and argument types
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   Input Layer   │───▶│  Command        │───▶│   Command       │
//! │   (Character    │    │  Parser         │    │   Registry      │
//! │   Processing)   │    │                 │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!          │                       │                       │
//!          ▼                       ▼                       ▼
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   Line Buffer   │    │   Argument      │    │   Handler       │
//! │   Management    │    │   Storage       │    │   Execution     │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! # Usage Examples
//!
//! ```rust
//! use core::fmt::Write;
//! use cmdparser::parser::{Argument, Response};
//! use cmdparser::system::shell::Shell;
//!
//! fn add(args: &[Argument<32>], response: &mut Response<64>) {
//!     let a = args[0].as_int64().unwrap_or_default();
//!     let b = args[1].as_int64().unwrap_or_default();
//!     let _ = write!(response, "{}", a + b);
//! }
//!
//! fn output_handler(text: &str) {
//!     print!("{}", text);
//! }
//!
//! let mut shell: Shell = Shell::new();
//! shell.set_output_function(output_handler);
//! shell.register_command("add", "ii", add).unwrap();
//!
//! // Process input character by character, or whole lines at once
//! shell.input(b"add 2 40\r").unwrap();
//! ```

use crate::parser::{
    CommandParser, DEFAULT_MAX_ARG_SIZE, DEFAULT_MAX_ARGS, DEFAULT_MAX_COMMANDS,
    DEFAULT_MAX_NAME_LEN, DEFAULT_MAX_RESPONSE_SIZE, Handler, ParseError, RegisterError, Response,
};

/// Default capacity of the input line buffer.
pub const DEFAULT_LINE_SIZE: usize = 256;

// ASCII control character constants for input processing
/// ASCII backspace character (0x08).
pub const ASCII_BACKSPACE: u8 = 0x08;
/// ASCII line feed character (0x0A).
pub const ASCII_LF: u8 = 0x0A;
/// ASCII carriage return character (0x0D).
pub const ASCII_CR: u8 = 0x0D;
/// ASCII delete character (0x7F).
pub const ASCII_DEL: u8 = 0x7F;
/// ASCII space character (0x20).
pub const ASCII_SPACE: u8 = 0x20;

/// Name of the built-in command listing.
const LIST_COMMAND: &[u8] = b"list";

/// Errors reported by [`Shell::input`].
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ShellError {
    /// The input line is longer than the line buffer. The whole line is
    /// discarded up to and including the next CR or LF.
    BufferOverflow,
}

impl core::fmt::Display for ShellError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ShellError::BufferOverflow => f.write_str("input line too long"),
        }
    }
}

impl core::error::Error for ShellError {}

#[cfg(feature = "defmt")]
impl defmt::Format for ShellError {
    fn format(&self, f: defmt::Formatter) {
        match self {
            ShellError::BufferOverflow => defmt::write!(f, "BufferOverflow"),
        }
    }
}

/// Function signature for output handlers.
///
/// Output handlers receive text from the shell and are responsible for
/// displaying it to the user through the appropriate output mechanism
/// (UART, LCD, etc.).
///
/// # Examples
///
/// ```rust
/// use cmdparser::system::shell::OutputFn;
///
/// let uart_output: OutputFn = |text| {
///     // Send text to UART
///     print!("{}", text);
/// };
/// ```
pub type OutputFn = fn(&str);

/// Line-editing shell driving a [`CommandParser`].
///
/// `LINE_SIZE` bounds the input line; the remaining parameters are passed to
/// the parser.
///
/// # Examples
///
/// ```rust
/// use cmdparser::system::shell::Shell;
///
/// let mut shell: Shell = Shell::new();
/// shell.set_echo(false);
///
/// // Configure output handler
/// shell.set_output_function(|text| print!("{}", text));
/// ```
#[derive(Debug)]
pub struct Shell<
    const LINE_SIZE: usize = DEFAULT_LINE_SIZE,
    const COMMANDS: usize = DEFAULT_MAX_COMMANDS,
    const ARGS: usize = DEFAULT_MAX_ARGS,
    const NAME_LEN: usize = DEFAULT_MAX_NAME_LEN,
    const ARG_SIZE: usize = DEFAULT_MAX_ARG_SIZE,
    const RESPONSE_SIZE: usize = DEFAULT_MAX_RESPONSE_SIZE,
> {
    // Input buffer
    buffer: [u8; LINE_SIZE],
    buffer_len: usize,

    parser: CommandParser<COMMANDS, ARGS, NAME_LEN, ARG_SIZE, RESPONSE_SIZE>,
    response: Response<RESPONSE_SIZE>,

    output_fn: Option<OutputFn>,

    // Set after an overflow until the end of the offending line
    discarding: bool,

    // Configuration options
    echo_enabled: bool,
    list_command_enabled: bool,
}

impl<
    const LINE_SIZE: usize,
    const COMMANDS: usize,
    const ARGS: usize,
    const NAME_LEN: usize,
    const ARG_SIZE: usize,
    const RESPONSE_SIZE: usize,
> Default for Shell<LINE_SIZE, COMMANDS, ARGS, NAME_LEN, ARG_SIZE, RESPONSE_SIZE>
{
    fn default() -> Self {
        Self::new()
    }
}

impl<
    const LINE_SIZE: usize,
    const COMMANDS: usize,
    const ARGS: usize,
    const NAME_LEN: usize,
    const ARG_SIZE: usize,
    const RESPONSE_SIZE: usize,
> Shell<LINE_SIZE, COMMANDS, ARGS, NAME_LEN, ARG_SIZE, RESPONSE_SIZE>
{
    /// Create a new shell instance with default settings.
    ///
    /// The shell is created with:
    /// - Echo enabled
    /// - List command enabled
    /// - No output function (must be set before use)
    /// - No registered commands
    pub fn new() -> Self {
        Self {
            buffer: [0; LINE_SIZE],
            buffer_len: 0,
            parser: CommandParser::new(),
            response: Response::new(),
            output_fn: None,
            discarding: false,
            echo_enabled: true,
            list_command_enabled: true,
        }
    }

    /// Set the output function for echo, responses and error messages.
    pub fn set_output_function(&mut self, output_fn: OutputFn) {
        self.output_fn = Some(output_fn);
    }

    /// Enable or disable command echoing.
    ///
    /// When echo is enabled, the shell displays characters as they are
    /// typed and provides visual feedback for backspace operations.
    /// This is typically enabled for interactive use but may be disabled
    /// for automated input processing.
    pub fn set_echo(&mut self, enabled: bool) {
        self.echo_enabled = enabled;
    }

    /// Enable or disable the built-in list command.
    ///
    /// A registered command named `list` always takes precedence over the
    /// built-in one.
    pub fn set_list_command(&mut self, enabled: bool) {
        self.list_command_enabled = enabled;
    }

    /// Register a command with the underlying parser.
    ///
    /// See [`CommandParser::register_command`] for the meaning of `arg_types`
    /// and the possible errors.
    pub fn register_command(
        &mut self,
        name: &str,
        arg_types: &str,
        handler: Handler<ARG_SIZE, RESPONSE_SIZE>,
    ) -> Result<(), RegisterError> {
        self.parser.register_command(name, arg_types, handler)
    }

    /// The command parser executing complete lines.
    pub fn parser(&self) -> &CommandParser<COMMANDS, ARGS, NAME_LEN, ARG_SIZE, RESPONSE_SIZE> {
        &self.parser
    }

    /// Mutable access to the command parser, e.g. for `register_commands!`.
    pub fn parser_mut(
        &mut self,
    ) -> &mut CommandParser<COMMANDS, ARGS, NAME_LEN, ARG_SIZE, RESPONSE_SIZE> {
        &mut self.parser
    }

    /// Process input data character by character.
    ///
    /// # Character Handling
    ///
    /// - **CR/LF**: Executes the buffered line
    /// - **Backspace/Delete**: Removes last character with visual feedback
    /// - **Printable ASCII**: Added to input buffer with optional echo
    /// - **Control characters**: Ignored (except CR, LF, backspace, delete)
    ///
    /// # Errors
    ///
    /// Returns [`ShellError::BufferOverflow`] when a printable byte arrives
    /// while the line buffer is full. Bytes after it in `data` are not
    /// processed. The truncated line never runs: it is dropped, and further
    /// input is ignored until the next CR or LF ends it.
    pub fn input(&mut self, data: &[u8]) -> Result<(), ShellError> {
        for &byte in data {
            match byte {
                ASCII_CR | ASCII_LF => {
                    if self.echo_enabled {
                        self.output(if byte == ASCII_CR { "\r" } else { "\n" });
                    }
                    if self.discarding {
                        self.discarding = false;
                    } else {
                        self.execute_line();
                    }
                    self.reset_buffer();
                }
                _ if self.discarding => {}
                ASCII_BACKSPACE | ASCII_DEL => {
                    if self.buffer_len > 0 {
                        self.buffer_len -= 1;
                        self.buffer[self.buffer_len] = 0;
                        if self.echo_enabled {
                            self.output("\x08 \x08"); // Backspace, space, backspace
                        }
                    }
                }
                0x20..=0x7E => {
                    if self.buffer_len == LINE_SIZE {
                        warn!("shell line buffer full, dropping line");
                        self.reset_buffer();
                        self.discarding = true;
                        return Err(ShellError::BufferOverflow);
                    }
                    self.buffer[self.buffer_len] = byte;
                    self.buffer_len += 1;

                    if self.echo_enabled {
                        let ch = [byte];
                        if let Ok(s) = core::str::from_utf8(&ch) {
                            self.output(s);
                        }
                    }
                }
                _ => {}
            }
        }

        Ok(())
    }

    fn output(&self, text: &str) {
        if let Some(output_fn) = self.output_fn {
            output_fn(text);
        }
    }

    fn reset_buffer(&mut self) {
        self.buffer[..self.buffer_len].fill(0);
        self.buffer_len = 0;
    }

    /// Run the buffered line through the parser and print the outcome.
    fn execute_line(&mut self) {
        let line = &self.buffer[..self.buffer_len];
        if line.iter().all(|&byte| byte == ASCII_SPACE) {
            return;
        }

        let result = self.parser.process_command(line, &mut self.response);
        match result {
            Err(ParseError::UnknownCommand { name })
                if self.list_command_enabled && name == LIST_COMMAND =>
            {
                self.list_commands();
            }
            _ => {
                if !self.response.is_empty() {
                    self.output(&self.response);
                    self.output("\r\n");
                }
            }
        }
    }

    /// List all registered commands with their argument types.
    fn list_commands(&self) {
        self.output("Available commands:\r\n");
        for command in self.parser.commands() {
            self.output(command.name());
            self.output("\t");
            self.output(command.arg_types());
            self.output("\r\n");
        }
    }
}
