use super::cursor::Cursor;
use super::number::{parse_double, parse_int64, parse_uint64};
use super::string::{decode_escape, parse_string};

#[test]
fn test_cursor_take_name_stops_at_space() {
    let mut cursor = Cursor::new(b"move 1 2");
    assert_eq!(cursor.take_name(10), b"move");
    assert_eq!(cursor.peek(), b' ');
}

#[test]
fn test_cursor_take_name_truncates() {
    let mut cursor = Cursor::new(b"abcdefghijkl 1");
    assert_eq!(cursor.take_name(10), b"abcdefghij");
    assert_eq!(cursor.peek(), b'k');
}

#[test]
fn test_cursor_nul_terminates_line() {
    let mut cursor = Cursor::new(b"ping\0 trailing");
    assert_eq!(cursor.take_name(10), b"ping");
    assert!(cursor.at_end());
}

#[test]
fn test_cursor_skip_spaces() {
    let mut cursor = Cursor::new(b"   x");
    assert_eq!(cursor.skip_spaces(), 3);
    assert_eq!(cursor.rest(), b"x");
    assert_eq!(cursor.skip_spaces(), 0);
}

#[test]
fn test_int64_decimal() {
    assert_eq!(parse_int64(b"45"), Some((45, 2)));
    assert_eq!(parse_int64(b"-23"), Some((-23, 3)));
    assert_eq!(parse_int64(b"+7 rest"), Some((7, 2)));
    assert_eq!(parse_int64(b"0"), Some((0, 1)));
    assert_eq!(parse_int64(b"-0"), Some((0, 2)));
}

#[test]
fn test_int64_prefixes() {
    assert_eq!(parse_int64(b"0x1F"), Some((31, 4)));
    assert_eq!(parse_int64(b"0XfF"), Some((255, 4)));
    assert_eq!(parse_int64(b"-0b101"), Some((-5, 6)));
    assert_eq!(parse_int64(b"0o17"), Some((15, 4)));
    // No implicit octal for a leading zero
    assert_eq!(parse_int64(b"010"), Some((10, 3)));
}

#[test]
fn test_int64_limits() {
    assert_eq!(parse_int64(b"9223372036854775807"), Some((i64::MAX, 19)));
    assert_eq!(parse_int64(b"-9223372036854775808"), Some((i64::MIN, 20)));
    assert_eq!(parse_int64(b"9223372036854775808"), None);
    assert_eq!(parse_int64(b"-9223372036854775809"), None);
    assert_eq!(parse_int64(b"0x7fffffffffffffff"), Some((i64::MAX, 18)));
    assert_eq!(parse_int64(b"0x8000000000000000"), None);
    assert_eq!(parse_int64(b"99999999999999999999"), None);
}

#[test]
fn test_int64_rejects_malformed() {
    assert_eq!(parse_int64(b""), None);
    assert_eq!(parse_int64(b"-"), None);
    assert_eq!(parse_int64(b"+-5"), None);
    assert_eq!(parse_int64(b"123abc"), None);
    assert_eq!(parse_int64(b"0x"), None);
    assert_eq!(parse_int64(b"0b2"), None);
    assert_eq!(parse_int64(b"0o8"), None);
    assert_eq!(parse_int64(b"12.5"), None);
    assert_eq!(parse_int64(b"\"1\""), None);
}

#[test]
fn test_uint64_values() {
    assert_eq!(parse_uint64(b"18446744073709551615"), Some((u64::MAX, 20)));
    assert_eq!(parse_uint64(b"0xffffffffffffffff"), Some((u64::MAX, 18)));
    assert_eq!(parse_uint64(b"+42"), Some((42, 3)));
    assert_eq!(
        parse_uint64(b"0b1111111111111111111111111111111111111111111111111111111111111111"),
        Some((u64::MAX, 66))
    );
}

#[test]
fn test_uint64_rejects_overflow_and_sign() {
    assert_eq!(parse_uint64(b"18446744073709551616"), None);
    assert_eq!(parse_uint64(b"0x10000000000000000"), None);
    assert_eq!(parse_uint64(b"99999999999999999999"), None);
    assert_eq!(parse_uint64(b"-1"), None);
    assert_eq!(parse_uint64(b"-0"), None);
}

#[test]
fn test_double_forms() {
    assert_eq!(parse_double(b"1.5"), Some((1.5, 3)));
    assert_eq!(parse_double(b"-2"), Some((-2.0, 2)));
    assert_eq!(parse_double(b".25"), Some((0.25, 3)));
    assert_eq!(parse_double(b"3."), Some((3.0, 2)));
    assert_eq!(parse_double(b"1e3"), Some((1000.0, 3)));
    assert_eq!(parse_double(b"+6.02E+23 next"), Some((6.02e23, 9)));
    assert_eq!(parse_double(b"2.5e-1"), Some((0.25, 6)));
}

#[test]
fn test_double_special_values() {
    assert_eq!(parse_double(b"inf"), Some((f64::INFINITY, 3)));
    assert_eq!(parse_double(b"-Infinity"), Some((f64::NEG_INFINITY, 9)));
    let (value, len) = parse_double(b"NaN").unwrap();
    assert!(value.is_nan());
    assert_eq!(len, 3);
}

#[test]
fn test_double_rejects_malformed() {
    assert_eq!(parse_double(b""), None);
    assert_eq!(parse_double(b"."), None);
    assert_eq!(parse_double(b"-"), None);
    assert_eq!(parse_double(b"e5"), None);
    assert_eq!(parse_double(b"1.5x"), None);
    assert_eq!(parse_double(b"1e"), None);
    assert_eq!(parse_double(b"1e+"), None);
    assert_eq!(parse_double(b"info"), None);
    assert_eq!(parse_double(b"1.2.3"), None);
}

#[test]
fn test_escape_decoding() {
    assert_eq!(decode_escape(b"n"), Some((b'\n', 1)));
    assert_eq!(decode_escape(b"r"), Some((b'\r', 1)));
    assert_eq!(decode_escape(b"t"), Some((b'\t', 1)));
    assert_eq!(decode_escape(b"\""), Some((b'"', 1)));
    assert_eq!(decode_escape(b"\\"), Some((b'\\', 1)));
    assert_eq!(decode_escape(b"x41"), Some((b'A', 3)));
    assert_eq!(decode_escape(b"xfF"), Some((0xFF, 3)));
    assert_eq!(decode_escape(b"x4"), None);
    assert_eq!(decode_escape(b"x4g"), None);
    assert_eq!(decode_escape(b"z"), None);
    assert_eq!(decode_escape(b""), None);
}

#[test]
fn test_string_quoted() {
    let (value, len) = parse_string::<32>(br#""hello world" next"#).unwrap();
    assert_eq!(value.as_slice(), b"hello world");
    assert_eq!(len, 13);

    let (value, len) = parse_string::<32>(br#""""#).unwrap();
    assert!(value.is_empty());
    assert_eq!(len, 2);
}

#[test]
fn test_string_escapes() {
    let (value, _) = parse_string::<32>(br#""\x41\x42\x43""#).unwrap();
    assert_eq!(value.as_slice(), b"ABC");

    let (value, _) = parse_string::<32>(br#""\n\r\t\"\\""#).unwrap();
    assert_eq!(value.as_slice(), b"\n\r\t\"\\");

    let (value, _) = parse_string::<32>(br#""\x00\xff""#).unwrap();
    assert_eq!(value.as_slice(), &[0x00, 0xFF]);
}

#[test]
fn test_string_bounds() {
    // Exactly at capacity is fine
    let (value, len) = parse_string::<4>(br#""abcd""#).unwrap();
    assert_eq!(value.as_slice(), b"abcd");
    assert_eq!(len, 6);

    // One byte more and the closing quote is never reached
    assert_eq!(parse_string::<4>(br#""abcde""#), None);

    // Escapes count as their decoded size
    let (value, _) = parse_string::<2>(br#""\x41\x42""#).unwrap();
    assert_eq!(value.as_slice(), b"AB");
}

#[test]
fn test_string_rejects_malformed() {
    assert_eq!(parse_string::<32>(br#""abc"#), None);
    assert_eq!(parse_string::<32>(br#""\z""#), None);
    assert_eq!(parse_string::<32>(br#""abc\"#), None);
    assert_eq!(parse_string::<32>(b"\"ab\0c\""), None);
}

#[cfg(not(feature = "unquoted-strings"))]
#[test]
fn test_string_requires_quotes() {
    assert_eq!(parse_string::<32>(b"hello"), None);
}

#[cfg(feature = "unquoted-strings")]
#[test]
fn test_string_bare_words() {
    let (value, len) = parse_string::<32>(b"hello world").unwrap();
    assert_eq!(value.as_slice(), b"hello");
    assert_eq!(len, 5);

    let (value, _) = parse_string::<32>(br"tab\there").unwrap();
    assert_eq!(value.as_slice(), b"tab\there");

    assert_eq!(parse_string::<4>(b"hello"), None);
    assert_eq!(parse_string::<32>(b""), None);
    assert_eq!(parse_string::<32>(br"bad\q"), None);
}
