use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

const RUPEE: char = '₹';

/// Formats a NAV string as Indian Rupees with two decimals and en-IN digit
/// grouping, e.g. `1234567.891` becomes `₹12,34,567.89`.
///
/// Returns `N/A` when the value is not a decimal number.
pub fn format_currency(value: &str) -> String {
    let Ok(amount) = Decimal::from_str(value.trim()) else {
        return "N/A".to_string();
    };

    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let digits = format!("{:.2}", rounded.abs());
    let (whole, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}{RUPEE}{}.{fraction}", group_indian(whole))
}

/// Groups an integer digit string as lakh/crore: the last three digits, then pairs.
fn group_indian(whole: &str) -> String {
    if whole.len() <= 3 {
        return whole.to_string();
    }

    let (head, tail) = whole.split_at(whole.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{tail}", groups.join(","))
}
