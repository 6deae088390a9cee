//! Conversion of raw form text into numbers.
//!
//! Every numeric field follows the same rule: blank input is zero, and input
//! that is not a number is also zero (with a warning in the log). A number
//! too large for [`Decimal`] is held at [`Decimal::MAX`] (or [`Decimal::MIN`]
//! when negative). Parsing never fails, so a calculation always runs once
//! the form is complete.

use rust_decimal::Decimal;

/// Normalizes input for decimal parsing: trims whitespace and removes commas (thousands separator).
fn normalize_decimal_input(s: &str) -> String {
    s.trim().replace(',', "")
}

/// Whether `s` is written as a plain decimal number: an optional sign,
/// digits, and at most one decimal point.
fn is_plain_number(s: &str) -> bool {
    let digits = s.strip_prefix(['-', '+']).unwrap_or(s);
    let (whole, fraction) = digits.split_once('.').unwrap_or((digits, ""));
    !(whole.is_empty() && fraction.is_empty())
        && whole.chars().all(|c| c.is_ascii_digit())
        && fraction.chars().all(|c| c.is_ascii_digit())
}

/// Parses a monetary or quantity field into a [`Decimal`].
///
/// Handles comma as thousands separator (e.g. `"1,234.56"`).
/// Empty or whitespace-only input is treated as 0, as is any input that
/// is not a number. Numbers beyond the [`Decimal`] range saturate.
pub fn parse_amount(s: &str) -> Decimal {
    let normalized = normalize_decimal_input(s);
    if normalized.is_empty() {
        return Decimal::ZERO;
    }
    normalized.parse().unwrap_or_else(|e| {
        if is_plain_number(&normalized) {
            let limit = if normalized.starts_with('-') {
                Decimal::MIN
            } else {
                Decimal::MAX
            };
            tracing::warn!(input = %s, "number out of range, using {}: {}", limit, e);
            return limit;
        }
        tracing::warn!(input = %s, "invalid number, using 0: {}", e);
        Decimal::ZERO
    })
}

/// Parses a head count. Same rules as [`parse_amount`], with any fractional
/// part dropped.
pub fn parse_count(s: &str) -> Decimal {
    parse_amount(s).trunc()
}
