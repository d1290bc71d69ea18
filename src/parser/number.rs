//! Integer and floating-point argument parsers.
//!
//! Each parser takes the input starting at the first byte of the argument and
//! returns the value together with the number of bytes consumed. The byte
//! right after the consumed span must be a space or the line terminator.

use super::cursor::{byte_at, is_boundary};

/// Parse an `i` argument: `[+-]?(0b|0o|0x)?DIGITS`.
pub(crate) fn parse_int64(input: &[u8]) -> Option<(i64, usize)> {
    let (negative, mut pos) = match byte_at(input, 0) {
        b'-' => (true, 1),
        b'+' => (false, 1),
        _ => (false, 0),
    };

    // The magnitude of i64::MIN is one more than i64::MAX.
    let limit = if negative {
        i64::MIN.unsigned_abs()
    } else {
        i64::MAX as u64
    };

    let (magnitude, consumed) = accumulate(&input[pos..], limit)?;
    pos += consumed;
    if !is_boundary(byte_at(input, pos)) {
        return None;
    }

    let value = if negative {
        (magnitude as i64).wrapping_neg()
    } else {
        magnitude as i64
    };
    Some((value, pos))
}

/// Parse a `u` argument: `[+]?(0b|0o|0x)?DIGITS`.
pub(crate) fn parse_uint64(input: &[u8]) -> Option<(u64, usize)> {
    let mut pos = usize::from(byte_at(input, 0) == b'+');

    let (value, consumed) = accumulate(&input[pos..], u64::MAX)?;
    pos += consumed;
    if !is_boundary(byte_at(input, pos)) {
        return None;
    }
    Some((value, pos))
}

/// Read an optional base prefix and the digits after it, refusing to exceed
/// `limit`. Fails if no digit was read.
fn accumulate(input: &[u8], limit: u64) -> Option<(u64, usize)> {
    let (radix, mut pos) = match (byte_at(input, 0), byte_at(input, 1).to_ascii_lowercase()) {
        (b'0', b'b') => (2, 2),
        (b'0', b'o') => (8, 2),
        (b'0', b'x') => (16, 2),
        _ => (10, 0),
    };

    let first_digit = pos;
    let mut value: u64 = 0;
    while let Some(digit) = digit_value(byte_at(input, pos), radix) {
        if value > limit / radix {
            return None;
        }
        value *= radix;
        if value > limit - digit {
            return None;
        }
        value += digit;
        pos += 1;
    }

    (pos > first_digit).then_some((value, pos))
}

fn digit_value(byte: u8, radix: u64) -> Option<u64> {
    let digit = match byte {
        b'0'..=b'9' => byte - b'0',
        b'a'..=b'f' => byte - b'a' + 10,
        b'A'..=b'F' => byte - b'A' + 10,
        _ => return None,
    };
    let digit = u64::from(digit);
    (digit < radix).then_some(digit)
}

/// Parse a `d` argument.
pub(crate) fn parse_double(input: &[u8]) -> Option<(f64, usize)> {
    let len = scan_double(input)?;
    if !is_boundary(byte_at(input, len)) {
        return None;
    }

    // The scanned span is ASCII by construction.
    let text = core::str::from_utf8(&input[..len]).ok()?;
    let value = text.parse::<f64>().ok()?;
    Some((value, len))
}

/// Length of the longest prefix of `input` matching the float grammar.
fn scan_double(input: &[u8]) -> Option<usize> {
    let mut pos = usize::from(matches!(byte_at(input, 0), b'+' | b'-'));

    if let Some(len) = scan_special(&input[pos..]) {
        return Some(pos + len);
    }

    let int_digits = count_digits(&input[pos..]);
    pos += int_digits;

    let mut frac_digits = 0;
    if byte_at(input, pos) == b'.' {
        frac_digits = count_digits(&input[pos + 1..]);
        pos += 1 + frac_digits;
    }

    if int_digits + frac_digits == 0 {
        return None;
    }

    // An exponent marker without digits is left unconsumed.
    if matches!(byte_at(input, pos), b'e' | b'E') {
        let mut exp = pos + 1;
        if matches!(byte_at(input, exp), b'+' | b'-') {
            exp += 1;
        }
        let exp_digits = count_digits(&input[exp..]);
        if exp_digits > 0 {
            pos = exp + exp_digits;
        }
    }

    Some(pos)
}

/// Match `infinity`, `inf` or `nan`, ignoring case.
fn scan_special(input: &[u8]) -> Option<usize> {
    const WORDS: [&[u8]; 3] = [b"infinity", b"inf", b"nan"];

    WORDS.iter().find_map(|word| {
        let candidate = input.get(..word.len())?;
        candidate.eq_ignore_ascii_case(word).then_some(word.len())
    })
}

fn count_digits(input: &[u8]) -> usize {
    input.iter().take_while(|byte| byte.is_ascii_digit()).count()
}
