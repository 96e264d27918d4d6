//! Sub-scanners for each lexical class and the ordered table that
//! dispatches between them.
//!
//! Rule order encodes precedence between overlapping classes: identifiers
//! win over word operators, operators over tag filters, and durations over
//! plain numbers.

use lazy_static::lazy_static;
use memchr::memchr;
use regex::Regex;

use crate::{errors::errors::ErrorImpl, operators::table::scan_binary_op_prefix, MK_SCAN_RULE};

use super::chars::{is_decimal_char, is_ident_char, is_ident_prefix, is_positive_number_prefix, is_string_prefix};

lazy_static! {
    static ref DURATION_PREFIX: Regex = Regex::new("^[0-9]+(?:\\.[0-9]+)?[smhdwyi]").unwrap();
    static ref SIGNED_DURATION_PREFIX: Regex = Regex::new("^-?[0-9]+(?:\\.[0-9]+)?[smhdwyi]").unwrap();
}

/// Tries to match the start of the remaining input. Returns the number of
/// bytes of the token, `None` when the rule does not apply, or an error when
/// the rule applies but the input is malformed.
pub type ScanHandler = fn(&str) -> Result<Option<usize>, ErrorImpl>;

pub struct ScanRule {
    pub name: &'static str,
    pub scanner: ScanHandler,
}

/// Tried in order after whitespace and comments are skipped; the first rule
/// that matches produces the token.
pub static SCAN_RULES: &[ScanRule] = &[
    MK_SCAN_RULE!("punctuation", punctuation_rule),
    MK_SCAN_RULE!("identifier", identifier_rule),
    MK_SCAN_RULE!("string", string_rule),
    MK_SCAN_RULE!("binary_op", binary_op_rule),
    MK_SCAN_RULE!("tag_filter_op", tag_filter_op_rule),
    MK_SCAN_RULE!("duration", duration_rule),
    MK_SCAN_RULE!("number", number_rule),
];

fn punctuation_rule(s: &str) -> Result<Option<usize>, ErrorImpl> {
    match s.as_bytes().first() {
        Some(b'{' | b'}' | b'[' | b']' | b'(' | b')' | b',') => Ok(Some(1)),
        _ => Ok(None),
    }
}

fn identifier_rule(s: &str) -> Result<Option<usize>, ErrorImpl> {
    if !is_ident_prefix(s) {
        return Ok(None);
    }
    Ok(Some(scan_ident(s).len()))
}

fn string_rule(s: &str) -> Result<Option<usize>, ErrorImpl> {
    if !is_string_prefix(s) {
        return Ok(None);
    }
    Ok(Some(scan_string(s)?.len()))
}

fn binary_op_rule(s: &str) -> Result<Option<usize>, ErrorImpl> {
    match scan_binary_op_prefix(s) {
        0 => Ok(None),
        n => Ok(Some(n)),
    }
}

fn tag_filter_op_rule(s: &str) -> Result<Option<usize>, ErrorImpl> {
    Ok(scan_tag_filter_op_prefix(s))
}

fn duration_rule(s: &str) -> Result<Option<usize>, ErrorImpl> {
    Ok(scan_duration(s, false))
}

fn number_rule(s: &str) -> Result<Option<usize>, ErrorImpl> {
    if !is_positive_number_prefix(s) {
        return Ok(None);
    }
    Ok(Some(scan_positive_number(s)?.len()))
}

/// Scans the longest identifier at the start of `s`. A backslash escapes the
/// following character without checking it.
///
/// `s` must start an identifier (see `is_ident_prefix`).
pub fn scan_ident(s: &str) -> &str {
    let bytes = s.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        if is_ident_char(bytes[i]) {
            i += 1;
            continue;
        }

        if bytes[i] != b'\\' {
            break;
        }

        // Skip the whole escaped character so the token ends on a char boundary
        i += 1;
        match s[i..].chars().next() {
            Some(ch) => i += ch.len_utf8(),
            None => break,
        }
    }

    debug_assert!(i > 0, "scan_ident called without an identifier prefix");
    &s[..i]
}

/// Scans a quoted string at the start of `s`, delimiters included. A quote
/// preceded by an odd number of backslashes is escaped.
pub fn scan_string(s: &str) -> Result<&str, ErrorImpl> {
    let bytes = s.as_bytes();
    let unterminated = || ErrorImpl::UnterminatedString {
        quote: bytes.first().map_or('"', |quote| *quote as char),
        token: s.to_string(),
    };

    if bytes.len() < 2 {
        return Err(unterminated());
    }

    let quote = bytes[0];
    let mut i = 1;
    loop {
        let n = memchr(quote, &bytes[i..]).ok_or_else(unterminated)?;
        i += n;

        let backslashes = bytes[..i].iter().rev().take_while(|ch| **ch == b'\\').count();
        if backslashes % 2 == 0 {
            return Ok(&s[..i + 1]);
        }

        i += 1;
    }
}

/// Scans an unsigned number: an integer part (empty when a fractional part
/// follows), an optional fractional part and an optional exponent.
pub fn scan_positive_number(s: &str) -> Result<&str, ErrorImpl> {
    let bytes = s.as_bytes();
    let digits_from = |start: usize| {
        start + bytes[start..].iter().take_while(|ch| is_decimal_char(**ch)).count()
    };

    let mut i = digits_from(0);
    if i == bytes.len() {
        if i == 0 {
            return Err(ErrorImpl::EmptyNumber);
        }
        return Ok(s);
    }

    if bytes[i] == b'.' {
        let j = digits_from(i + 1);
        if j == i + 1 {
            return Err(ErrorImpl::MissingFractionalPart { token: s.to_string() });
        }
        i = j;
        if i == bytes.len() {
            return Ok(s);
        }
    }

    if bytes[i] != b'e' && bytes[i] != b'E' {
        if i == 0 {
            return Err(ErrorImpl::EmptyNumber);
        }
        return Ok(&s[..i]);
    }
    i += 1;

    if i < bytes.len() && (bytes[i] == b'-' || bytes[i] == b'+') {
        i += 1;
    }
    let j = digits_from(i);
    if j == i {
        return Err(ErrorImpl::MissingExponentPart { token: s.to_string() });
    }

    Ok(&s[..j])
}

/// Returns the length of the duration at the start of `s`: digits, an
/// optional fraction and one unit out of `smhdwyi`. A leading `-` is only
/// accepted when `can_be_negative` is set.
pub fn scan_duration(s: &str, can_be_negative: bool) -> Option<usize> {
    let pattern: &Regex = if can_be_negative {
        &SIGNED_DURATION_PREFIX
    } else {
        &DURATION_PREFIX
    };

    pattern.find(s).map(|m| m.end())
}

/// Returns the length of the tag filter operator at the start of `s`,
/// preferring `=~`, `!~` and `!=` over `=`.
pub fn scan_tag_filter_op_prefix(s: &str) -> Option<usize> {
    let bytes = s.as_bytes();

    if bytes.len() >= 2 && matches!(&bytes[..2], b"=~" | b"!~" | b"!=") {
        return Some(2);
    }
    if bytes.first() == Some(&b'=') {
        return Some(1);
    }
    None
}
