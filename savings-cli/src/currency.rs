use rust_decimal::Decimal;
use savings_core::calculations::common::round_half_up;

use crate::config::DisplayConfig;

/// Renders `amount` as a currency string, rounded half-up to cents.
///
/// With the default display settings `95400` becomes `95.400,00 €`.
pub fn format_currency(
    amount: Decimal,
    display: &DisplayConfig,
) -> String {
    let mut rounded = round_half_up(amount);
    rounded.rescale(2);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();

    let digits = rounded.abs().to_string();
    let (whole, cents) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    let mut number = group_thousands(whole, display.grouping_separator);
    number.push(display.decimal_separator);
    number.push_str(cents);
    if negative {
        number.insert(0, '-');
    }

    if display.symbol_after {
        format!("{number} {}", display.currency_symbol)
    } else {
        format!("{}{number}", display.currency_symbol)
    }
}

fn group_thousands(
    whole: &str,
    separator: char,
) -> String {
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(digit);
    }
    grouped
}
