//! Currency formatting
//!
//! The only place amounts are rounded: two decimals, grouped thousands,
//! using the separators and symbol from settings.

use crate::config::Settings;
use crate::models::Amount;

/// Format an amount for display, e.g. `R$ 1.234,50`
pub fn format_currency(amount: Amount, settings: &Settings) -> String {
    let fixed = format!("{:.2}", amount.value().abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let grouped = group_thousands(whole, settings.thousands_separator);
    let negative = amount.is_negative() && fixed.bytes().any(|b| b.is_ascii_digit() && b != b'0');

    format!(
        "{}{} {}{}{}",
        if negative { "-" } else { "" },
        settings.currency_symbol,
        grouped,
        settings.decimal_separator,
        cents
    )
}

fn group_thousands(digits: &str, separator: char) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    grouped
}
