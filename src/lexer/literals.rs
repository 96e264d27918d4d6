//! Value conversion for duration, number and string tokens.

use crate::errors::errors::ErrorImpl;

use super::{chars::is_inf_or_nan, ident::from_hex, scanners::scan_duration};

/// Returns the duration in milliseconds for `s`, e.g. `5m` or `-1.5h`.
///
/// The `i` unit counts steps of `step_ms` milliseconds. The returned value
/// may be negative.
pub fn duration_value(s: &str, step_ms: i64) -> Result<i64, ErrorImpl> {
    let invalid = || ErrorImpl::InvalidDuration { token: s.to_string() };

    if scan_duration(s, true) != Some(s.len()) {
        return Err(invalid());
    }

    let (number, unit) = s.split_at(s.len() - 1);
    let value: f64 = number.parse().map_err(|_| invalid())?;

    let multiplier = match unit {
        "s" => 1.0,
        "m" => 60.0,
        "h" => 60.0 * 60.0,
        "d" => 24.0 * 60.0 * 60.0,
        "w" => 7.0 * 24.0 * 60.0 * 60.0,
        "y" => 365.0 * 24.0 * 60.0 * 60.0,
        "i" => step_ms as f64 / 1e3,
        _ => {
            return Err(ErrorImpl::InvalidDurationSuffix {
                token: s.to_string(),
            })
        }
    };

    let millis = multiplier * value * 1e3;
    if !millis.is_finite() || millis < i64::MIN as f64 || millis >= i64::MAX as f64 {
        return Err(invalid());
    }
    Ok(millis as i64)
}

/// Same as `duration_value`, rejecting negative durations.
pub fn positive_duration_value(s: &str, step_ms: i64) -> Result<i64, ErrorImpl> {
    let duration = duration_value(s, step_ms)?;
    if duration < 0 {
        return Err(ErrorImpl::NegativeDuration {
            token: s.to_string(),
        });
    }
    Ok(duration)
}

/// Parses a number token, or `inf`/`nan` in any case.
pub fn number_value(s: &str) -> Result<f64, ErrorImpl> {
    if is_inf_or_nan(s) {
        return Ok(if s.eq_ignore_ascii_case("inf") {
            f64::INFINITY
        } else {
            f64::NAN
        });
    }

    s.parse().map_err(|_| ErrorImpl::NumberParseError {
        token: s.to_string(),
    })
}

/// Returns the contents of a quoted string token with escapes applied.
/// Backtick strings are raw.
pub fn string_literal_value(token: &str) -> Result<String, ErrorImpl> {
    let invalid = || ErrorImpl::InvalidStringLiteral {
        token: token.to_string(),
    };

    let quote = token.chars().next().ok_or_else(invalid)?;
    if !matches!(quote, '"' | '\'' | '`') || token.len() < 2 || !token.ends_with(quote) {
        return Err(invalid());
    }

    let string_literal = &token[1..token.len() - 1];
    if quote == '`' {
        return Ok(string_literal.to_string());
    }

    // `\xHH` escapes produce raw bytes, so the result is checked as UTF-8
    // once all escapes are applied
    let mut result = Vec::with_capacity(string_literal.len());
    let mut rest = string_literal.as_bytes();

    while let Some((&byte, tail)) = rest.split_first() {
        rest = tail;
        if byte != b'\\' {
            result.push(byte); // Keep non-escape bytes
            continue;
        }

        let (decoded, tail) = match rest {
            [b'n', tail @ ..] => (b'\n', tail),
            [b't', tail @ ..] => (b'\t', tail),
            [b'r', tail @ ..] => (b'\r', tail),
            [b'0', tail @ ..] => (b'\0', tail),
            [escaped @ (b'\\' | b'"' | b'\''), tail @ ..] => (*escaped, tail),
            [b'x', hi, lo, tail @ ..] => match (from_hex(*hi), from_hex(*lo)) {
                (Some(hi), Some(lo)) => (hi << 4 | lo, tail),
                // Keep the malformed escape
                _ => (byte, rest),
            },
            _ => (byte, rest), // Keep the backslash
        };
        result.push(decoded);
        rest = tail;
    }

    String::from_utf8(result).map_err(|_| invalid())
}
