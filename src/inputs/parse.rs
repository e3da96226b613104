//! Conversion of argument strings to `f64`.
//!
//! The lenient policy mirrors C `strtod`: leading whitespace is skipped, the
//! longest prefix that forms a decimal number (or `inf`/`infinity`/`nan`) is
//! converted, and a string with no such prefix yields 0.0. Unlike `strtod`
//! the result says whether anything was dropped, so callers can tell a
//! literal `0` apart from garbage.

use tracing::warn;

use super::config::ParsePolicy;
use crate::error::{PricerError, PricerResult};

/// Outcome of a lenient conversion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParsedNumber {
    pub value: f64,
    /// Part or all of the input was not numeric and was ignored.
    pub coerced: bool,
}

/// Byte length of the numeric prefix of `s` (which must already have its
/// leading whitespace removed). Zero when there is none.
fn numeric_prefix_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    let mut i = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        i += 1;
    }

    let rest = &bytes[i..];
    for word in ["infinity", "inf", "nan"] {
        if rest.len() >= word.len() && rest[..word.len()].eq_ignore_ascii_case(word.as_bytes()) {
            return i + word.len();
        }
    }

    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let mut digits = i - int_start;

    if i < bytes.len() && bytes[i] == b'.' {
        let frac_start = i + 1;
        let mut j = frac_start;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        digits += j - frac_start;
        if digits > 0 {
            i = j;
        }
    }

    if digits == 0 {
        return 0;
    }

    // Exponent only counts when at least one digit follows it.
    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        let mut j = i + 1;
        if j < bytes.len() && (bytes[j] == b'+' || bytes[j] == b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }

    i
}

/// strtod-like conversion that never fails.
pub fn parse_lenient(raw: &str) -> ParsedNumber {
    let s = raw.trim_start();
    let len = numeric_prefix_len(s);
    let value = if len == 0 {
        0.0
    } else {
        // The prefix grammar is a subset of what `f64::from_str` accepts.
        s[..len].parse::<f64>().unwrap_or(0.0)
    };
    ParsedNumber {
        value,
        coerced: len == 0 || !s[len..].trim().is_empty(),
    }
}

/// Whole-string conversion; anything but a complete, finite number is an
/// error. `nan`, `inf` and `infinity` are rejected here.
pub fn parse_strict(name: &'static str, raw: &str) -> PricerResult<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| PricerError::MalformedNumericInput {
            name,
            value: raw.to_string(),
        })
}

/// Convert one named argument according to `policy`. Lenient coercions are
/// logged at `warn`.
pub fn parse_number(name: &'static str, raw: &str, policy: ParsePolicy) -> PricerResult<f64> {
    match policy {
        ParsePolicy::Strict => parse_strict(name, raw),
        ParsePolicy::Lenient => {
            let parsed = parse_lenient(raw);
            if parsed.coerced {
                warn!(
                    argument = name,
                    input = raw,
                    value = parsed.value,
                    "non-numeric input coerced"
                );
            }
            Ok(parsed.value)
        }
    }
}
