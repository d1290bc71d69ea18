//! # cmdparser - typed command lines for embedded devices
//!
//! A small command processor for firmware consoles. It parses a single line of
//! the form `NAME ARG1 ARG2 ...` into strongly-typed arguments, calls the
//! handler registered for `NAME`, and leaves a textual response in a
//! caller-provided buffer. Every buffer is sized at compile time and nothing is
//! ever allocated, which makes it usable on microcontrollers in `no_std`
//! environments.
//!
//! ## Features
//!
//! ### Parsing
//! - Four argument types: `f64`, `i64`, `u64` and double-quoted byte strings
//! - Binary, octal and hexadecimal integer prefixes with exact overflow detection
//! - String escapes: `\n`, `\r`, `\t`, `\"`, `\\` and `\xHH`
//! - Descriptive error messages instead of undefined behavior
//!
//! ### System Utilities
//! - A line-editing shell front end for UART-style byte streams
//! - Built-in command listing
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! cmdparser = "0.1.0"
//! ```
//!
//! ### Registering and Processing Commands
//!
//! ```rust
//! use core::fmt::Write;
//! use cmdparser::parser::{Argument, CommandParser, Response};
//!
//! fn say(args: &[Argument<32>], response: &mut Response<64>) {
//!     if let Some(text) = args[0].as_str() {
//!         let _ = write!(response, "said: {text}");
//!     }
//! }
//!
//! let mut parser: CommandParser = CommandParser::new();
//! parser.register_command("say", "s", say).unwrap();
//!
//! let mut response = Response::new();
//! parser
//!     .process_command(br#"say "Hello, \"world!\"""#, &mut response)
//!     .unwrap();
//! assert_eq!(response.as_str(), r#"said: Hello, "world!""#);
//!
//! assert!(parser.process_command(b"jump 123", &mut response).is_err());
//! assert_eq!(response.as_str(), "parse error: unknown command name jump");
//! ```
//!
//! ### Custom Limits
//!
//! The five limits are const generics on [`CommandParser`](parser::CommandParser):
//!
//! ```rust
//! use cmdparser::parser::{Argument, CommandParser, Response};
//!
//! // 4 commands, 2 arguments each, 8-byte names, 16-byte strings, 32-byte responses
//! type SmallParser = CommandParser<4, 2, 8, 16, 32>;
//!
//! fn led(_args: &[Argument<16>], _response: &mut Response<32>) {}
//!
//! let mut parser = SmallParser::new();
//! parser.register_command("led", "uu", led).unwrap();
//! assert!(parser.register_command("led", "uuu", led).is_err());
//! ```
//!
//! ## Platform Support
//!
//! This library is designed to work on:
//! - Embedded microcontrollers (ARM Cortex-M, RISC-V, etc.)
//! - Linux-based devices and host-side test harnesses
//! - Any platform supporting Rust's `core` library
//!
//! ## Optional Features
//!
//! - `std`: Enable standard library support (default: disabled)
//! - `defmt`: Enable defmt logging support for embedded debugging
//! - `unquoted-strings`: Accept bare words as string arguments in addition to
//!   quoted strings

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

#[macro_use]
mod fmt;

/// Command registration, line parsing and handler dispatch.
///
/// This is the core of the crate: the [`CommandParser`](parser::CommandParser),
/// its [`Registry`](parser::Registry), the [`Argument`](parser::Argument) values
/// handed to handlers, and the error types.
pub mod parser;

/// System utilities for embedded devices.
///
/// Contains the interactive shell front end that feeds raw input bytes to a
/// [`CommandParser`](parser::CommandParser).
pub mod system;
