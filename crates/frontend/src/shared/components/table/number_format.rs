//! Number formatting for table cells and stats
//!
//! Currency follows the `en-IN` locale: the last three integer digits form
//! one group, the rest are grouped in pairs (`12,34,567.5`).

use crate::shared::date_utils::NO_VALUE;

/// Prefix of every rupee amount
pub const RUPEE_PREFIX: &str = "₹ ";

/// Groups integer digits the Indian way
///
/// # Examples
///
/// ```rust,ignore
/// assert_eq!(group_indian("1234567"), "12,34,567");
/// ```
pub fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

/// Formats a number like `Number.toLocaleString("en-IN")`: up to 3 fraction
/// digits, trailing zeros dropped
pub fn format_number_en_in(value: f64) -> String {
    let fixed = format!("{:.3}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut result = group_indian(int_part);
    if !frac_part.is_empty() {
        result.push('.');
        result.push_str(frac_part);
    }

    if value < 0.0 && result != "0" {
        format!("-{}", result)
    } else {
        result
    }
}

/// Rupee amount, or `-` when the value is missing
pub fn format_inr(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => format!("{}{}", RUPEE_PREFIX, format_number_en_in(v)),
        _ => NO_VALUE.to_string(),
    }
}

/// Plain count (age, quantity): whole numbers without a fraction, `-` when missing
pub fn format_count(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() && v.fract() == 0.0 => format!("{}", v as i64),
        Some(v) if v.is_finite() => v.to_string(),
        _ => NO_VALUE.to_string(),
    }
}

/// Text cell, `-` when missing or blank
pub fn format_text(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => NO_VALUE.to_string(),
    }
}
