//! Rupee formatting for display.
//!
//! Amounts are rounded half-up to whole rupees and grouped the Indian way:
//! the last three digits, then pairs (`12,34,56,789`).

use rust_decimal::Decimal;
use salary_core::calculations::common::round_to_rupee;

/// Formats an amount as whole rupees with Indian digit grouping.
///
/// ```
/// use rust_decimal_macros::dec;
/// use salary_cli::format::format_inr;
///
/// assert_eq!(format_inr(dec!(1200000)), "₹12,00,000");
/// assert_eq!(format_inr(dec!(-2400)), "-₹2,400");
/// ```
pub fn format_inr(amount: Decimal) -> String {
    let rounded = round_to_rupee(amount);
    let grouped = group_indian(&rounded.abs().trunc().to_string());
    if rounded < Decimal::ZERO {
        format!("-₹{grouped}")
    } else {
        format!("₹{grouped}")
    }
}

/// Formats a rate such as `0.05` as `5%`.
pub fn format_rate(rate: Decimal) -> String {
    format!("{}%", (rate * Decimal::ONE_HUNDRED).normalize())
}

/// Inserts Indian grouping separators into a string of ASCII digits.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, last_three) = digits.split_at(digits.len() - 3);
    let mut pairs: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        pairs.push(&head[start..end]);
        end = start;
    }
    pairs.reverse();

    format!("{},{}", pairs.join(","), last_three)
}
