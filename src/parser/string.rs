//! String argument parser and escape decoder.
//!
//! Strings are double-quoted and may contain the escapes `\n`, `\r`, `\t`,
//! `\"`, `\\` and `\xHH`. The decoded value holds at most `N` bytes; a string
//! whose closing quote is not reached within that bound is rejected.
//!
//! With the `unquoted-strings` feature a bare word (a run of non-space bytes,
//! same escapes) is accepted as well.

use heapless::Vec;

use super::cursor::{TERMINATOR, byte_at};
#[cfg(feature = "unquoted-strings")]
use super::cursor::is_boundary;

/// Parse an `s` argument, returning the decoded bytes and the number of input
/// bytes consumed (including both quotes).
pub(crate) fn parse_string<const N: usize>(input: &[u8]) -> Option<(Vec<u8, N>, usize)> {
    if byte_at(input, 0) == b'"' {
        parse_quoted(input)
    } else {
        parse_bare(input)
    }
}

fn parse_quoted<const N: usize>(input: &[u8]) -> Option<(Vec<u8, N>, usize)> {
    let mut output = Vec::new();
    let mut pos = 1;

    while !output.is_full() {
        match byte_at(input, pos) {
            b'"' | TERMINATOR => break,
            b'\\' => {
                let (byte, len) = decode_escape(&input[pos + 1..])?;
                output.push(byte).ok()?;
                pos += 1 + len;
            }
            byte => {
                output.push(byte).ok()?;
                pos += 1;
            }
        }
    }

    if byte_at(input, pos) != b'"' {
        return None;
    }
    Some((output, pos + 1))
}

#[cfg(feature = "unquoted-strings")]
fn parse_bare<const N: usize>(input: &[u8]) -> Option<(Vec<u8, N>, usize)> {
    let mut output = Vec::new();
    let mut pos = 0;

    while !is_boundary(byte_at(input, pos)) {
        let (byte, len) = match byte_at(input, pos) {
            b'\\' => {
                let (byte, len) = decode_escape(&input[pos + 1..])?;
                (byte, 1 + len)
            }
            byte => (byte, 1),
        };
        // Overrunning the buffer is an error, never a silent truncation.
        output.push(byte).ok()?;
        pos += len;
    }

    (pos > 0).then_some((output, pos))
}

#[cfg(not(feature = "unquoted-strings"))]
fn parse_bare<const N: usize>(_input: &[u8]) -> Option<(Vec<u8, N>, usize)> {
    None
}

/// Decode the escape whose backslash has already been consumed. Returns the
/// byte and the number of bytes used after the backslash.
pub(crate) fn decode_escape(input: &[u8]) -> Option<(u8, usize)> {
    match byte_at(input, 0) {
        b'n' => Some((b'\n', 1)),
        b'r' => Some((b'\r', 1)),
        b't' => Some((b'\t', 1)),
        b'"' => Some((b'"', 1)),
        b'\\' => Some((b'\\', 1)),
        b'x' => {
            let high = hex_value(byte_at(input, 1))?;
            let low = hex_value(byte_at(input, 2))?;
            Some(((high << 4) | low, 3))
        }
        _ => None,
    }
}

fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}
