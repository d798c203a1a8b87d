//! GBP currency strings in the `en-GB` style: `£1,234.56`.
//!
//! Rounding is done on the exact decimal value of the `f64`, half away from
//! zero. Non-finite amounts are rendered as `£NaN`, `£∞` and `-£∞`.

use rust_decimal::{Decimal, RoundingStrategy};

pub const CURRENCY_SYMBOL: &str = "£";

/// Rounds `value` to `fraction_digits` places, padding the scale so that
/// `80000.0` becomes `80000.00` at two places.
///
/// Returns `None` for values a `Decimal` cannot hold (non-finite or too large).
pub fn round_money(value: f64, fraction_digits: u32) -> Option<Decimal> {
    let exact = Decimal::from_f64_retain(value)?;
    let mut rounded =
        exact.round_dp_with_strategy(fraction_digits, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(fraction_digits);
    Some(rounded)
}

pub fn format_currency(value: f64, fraction_digits: u32) -> String {
    if value.is_nan() {
        return format!("{CURRENCY_SYMBOL}NaN");
    }
    let sign = if value.is_sign_negative() { "-" } else { "" };
    if value.is_infinite() {
        return format!("{sign}{CURRENCY_SYMBOL}∞");
    }

    let magnitude = value.abs();
    let digits = match round_money(magnitude, fraction_digits) {
        Some(amount) => amount.to_string(),
        None => format!("{:.*}", fraction_digits as usize, magnitude),
    };

    match digits.split_once('.') {
        Some((whole, fraction)) => {
            format!("{sign}{CURRENCY_SYMBOL}{}.{fraction}", group_thousands(whole))
        }
        None => format!("{sign}{CURRENCY_SYMBOL}{}", group_thousands(&digits)),
    }
}

/// Two decimal places, as used for payments and totals.
pub fn format_pounds_and_pence(value: f64) -> String {
    format_currency(value, 2)
}

/// Whole pounds, as used for the remaining-debt schedule.
pub fn format_whole_pounds(value: f64) -> String {
    format_currency(value, 0)
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}
