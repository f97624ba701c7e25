use iso_currency::Currency;
use num_format::{Locale, ToFormattedString as _};

/// Standard number of decimal places for the given currency
/// (ex. JPY = 0, USD = 2).
fn decimal_places(currency: Currency) -> usize {
    currency.exponent().unwrap_or(0) as usize
}

/// Format a cash amount with currency symbol, the currency's standard number
/// of decimal places, and thousands separators. Uses the en locale ('.' as
/// decimal mark) regardless of the user's locale.
pub(crate) fn format_amount(amount: f64, currency: Currency) -> String {
    let places = decimal_places(currency);
    let integer_part = (amount.trunc() as i64).to_formatted_string(&Locale::en);
    if places == 0 {
        return format!("{}{}", currency.symbol(), integer_part);
    }
    let fractional_part = format!("{:.places$}", amount.fract())
        .split('.')
        .nth(1)
        .map(|f| f.to_string())
        .unwrap_or_default();
    format!("{}{}.{}", currency.symbol(), integer_part, fractional_part)
}
