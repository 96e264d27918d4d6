//! Conversion between raw identifier tokens and their display form.
//!
//! In a raw identifier a backslash either starts a `\xHH` byte escape or
//! makes the following character literal. `escape_identifier` and
//! `unescape_identifier` are inverses for every string.

use memchr::memchr;

use super::chars::{is_first_ident_char, is_ident_char};

/// Converts a raw identifier token to its display form. Malformed escapes
/// pass through literally.
pub fn unescape_identifier(s: &str) -> String {
    let Some(mut n) = memchr(b'\\', s.as_bytes()) else {
        return s.to_string();
    };

    let mut rest = s.as_bytes();
    let mut dst = Vec::with_capacity(rest.len());
    loop {
        dst.extend_from_slice(&rest[..n]);
        rest = &rest[n + 1..];

        let escaped = match rest {
            [b'x', h1, h2, ..] => from_hex(*h1).zip(from_hex(*h2)).map(|(h1, h2)| (h1 << 4) | h2),
            _ => None,
        };
        match (escaped, rest.first()) {
            (Some(byte), _) => {
                dst.push(byte);
                rest = &rest[3..];
            }
            (None, Some(ch)) => {
                dst.push(*ch);
                rest = &rest[1..];
            }
            (None, None) => break,
        }

        match memchr(b'\\', rest) {
            Some(next) => n = next,
            None => {
                dst.extend_from_slice(rest);
                break;
            }
        }
    }

    match String::from_utf8(dst) {
        Ok(unescaped) => unescaped,
        Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
    }
}

/// Converts a display string into a raw identifier that scans as a single
/// identifier token.
pub fn escape_identifier(s: &str) -> String {
    let mut dst = String::with_capacity(s.len());
    append_escaped_identifier(&mut dst, s);
    dst
}

pub fn append_escaped_identifier(dst: &mut String, s: &str) {
    for (i, ch) in s.bytes().enumerate() {
        if is_ident_char(ch) {
            if i == 0 && !is_first_ident_char(ch) {
                // hex-encode the first char
                push_hex_escape(dst, ch);
            } else {
                dst.push(ch as char);
            }
        } else if (0x20..0x7f).contains(&ch) {
            // Leave ASCII printable chars as is
            dst.push('\\');
            dst.push(ch as char);
        } else {
            // hex-encode non-printable chars
            push_hex_escape(dst, ch);
        }
    }
}

fn push_hex_escape(dst: &mut String, ch: u8) {
    dst.push('\\');
    dst.push('x');
    dst.push(to_hex(ch >> 4));
    dst.push(to_hex(ch & 0xf));
}

pub(crate) fn from_hex(ch: u8) -> Option<u8> {
    (ch as char).to_digit(16).map(|digit| digit as u8)
}

fn to_hex(n: u8) -> char {
    if n < 10 {
        (b'0' + n) as char
    } else {
        (b'a' + (n - 10)) as char
    }
}
