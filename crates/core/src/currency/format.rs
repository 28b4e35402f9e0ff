//! Currency-aware amount formatting.
//!
//! Output shape: optional `-`, display symbol, digits grouped by `,`, and
//! exactly the currency's fraction digits after `.` (e.g. `-$1,234.50`,
//! `¥1,000`, `MX$170.00`).

use fintrack_shared::types::Currency;
use rust_decimal::{Decimal, RoundingStrategy};

/// Formats `amount` (already in `currency`) for display.
///
/// Falls back to `"{symbol}{amount}"` if the digits cannot be grouped.
#[must_use]
pub fn format_amount(amount: Decimal, currency: Currency) -> String {
    let symbol = currency.display_symbol();
    match render_grouped(amount, currency.max_fraction_digits()) {
        Some((true, body)) => format!("-{symbol}{body}"),
        Some((false, body)) => format!("{symbol}{body}"),
        None => format!("{symbol}{amount}"),
    }
}

/// Rounds to `decimal_places` and groups the integer digits.
///
/// Returns the sign separately so the caller can place it before the symbol.
fn render_grouped(amount: Decimal, decimal_places: u32) -> Option<(bool, String)> {
    let mut rounded =
        amount.round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointNearestEven);
    rounded.rescale(decimal_places);

    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let digits = rounded.abs().to_string();
    let (integer, fraction) = match digits.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (digits.as_str(), None),
    };

    if integer.is_empty() || !integer.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let mut body = group_thousands(integer);
    if let Some(fraction) = fraction.filter(|f| !f.is_empty()) {
        body.push('.');
        body.push_str(fraction);
    }
    Some((negative, body))
}

fn group_thousands(integer: &str) -> String {
    let len = integer.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}
