//! System utilities for embedded devices.
//!
//! This module provides the interactive layer that sits between a serial
//! port (or any byte stream) and the [`CommandParser`](crate::parser::CommandParser).
//! It focuses on providing lightweight, `no_std` compatible tools for device
//! management and user interaction.
//!
//! # Available Utilities
//!
//! - **[`shell`]**: Line-editing command shell for embedded systems
//!
//! # Design Principles
//!
//! - **Embedded-First**: All utilities are designed for resource-constrained environments
//! - **Zero-Allocation**: Fixed-size buffers and stack-based operations
//! - **Portable**: Works across different embedded platforms and architectures
//!
//! # Usage
//!
//! ```rust,no_run
//! use core::fmt::Write;
//! use cmdparser::parser::{Argument, Response};
//! use cmdparser::system::shell::Shell;
//!
//! fn status(_args: &[Argument<32>], response: &mut Response<64>) {
//!     let _ = write!(response, "Device: Online");
//! }
//!
//! // Set up a command shell for device interaction
//! let mut shell: Shell = Shell::new();
//! shell.set_output_function(|text| {
//!     // Send to UART or other output
//!     print!("{}", text);
//! });
//!
//! // Register device-specific commands
//! shell.register_command("status", "", status).unwrap();
//! shell.input(b"status\r").unwrap();
//! ```

/// Command shell interface for embedded systems.
///
/// Provides a line-editing front end with echo, backspace handling, a built-in
/// `list` command, and execution of complete lines through the command parser.
pub mod shell;
