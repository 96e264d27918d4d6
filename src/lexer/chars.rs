//! Character-class and token-shape predicates.

use super::scanners::scan_duration;

pub fn is_space_char(ch: u8) -> bool {
    matches!(ch, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r')
}

pub fn is_decimal_char(ch: u8) -> bool {
    ch.is_ascii_digit()
}

/// `[a-zA-Z_:]`
pub fn is_first_ident_char(ch: u8) -> bool {
    ch.is_ascii_alphabetic() || ch == b'_' || ch == b':'
}

/// `[a-zA-Z0-9_:.]`
pub fn is_ident_char(ch: u8) -> bool {
    is_first_ident_char(ch) || is_decimal_char(ch) || ch == b'.'
}

/// Whether `s` starts an identifier. A leading backslash escapes the next
/// character, whatever it is.
pub fn is_ident_prefix(s: &str) -> bool {
    match s.as_bytes().first() {
        Some(b'\\') => true,
        Some(ch) => is_first_ident_char(*ch),
        None => false,
    }
}

/// See https://prometheus.io/docs/prometheus/latest/querying/basics/#string-literals
pub fn is_string_prefix(s: &str) -> bool {
    matches!(s.as_bytes().first(), Some(b'"' | b'\'' | b'`'))
}

/// Whether `s` starts with a digit, or with `.` followed by a digit.
pub fn is_positive_number_prefix(s: &str) -> bool {
    match s.as_bytes() {
        [first, ..] if is_decimal_char(*first) => true,
        [b'.', second, ..] => is_decimal_char(*second),
        _ => false,
    }
}

/// Whether all of `s` is a single unsigned duration such as `5m` or `1.5h`.
pub fn is_positive_duration(s: &str) -> bool {
    scan_duration(s, false) == Some(s.len())
}

pub fn is_inf_or_nan(s: &str) -> bool {
    s.eq_ignore_ascii_case("inf") || s.eq_ignore_ascii_case("nan")
}

pub fn is_offset(s: &str) -> bool {
    s.eq_ignore_ascii_case("offset")
}
