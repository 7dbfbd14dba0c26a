//! Formatting utilities for CLI output.

/// Format a large number with commas for readability.
///
/// # Examples
///
/// ```
/// use gv_cli_common::format_number;
///
/// assert_eq!(format_number(0), "0");
/// assert_eq!(format_number(255), "255");
/// assert_eq!(format_number(67_391_582), "67,391,582");
/// ```
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);

    for (count, c) in s.chars().rev().enumerate() {
        if count > 0 && count % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }

    result.chars().rev().collect()
}

/// Format a ratio in `0.0..=1.0` as a percentage with one decimal.
///
/// # Examples
///
/// ```
/// use gv_cli_common::format_percent;
///
/// assert_eq!(format_percent(1.0), "100.0%");
/// assert_eq!(format_percent(0.875), "87.5%");
/// ```
pub fn format_percent(ratio: f64) -> String {
    if ratio.is_finite() {
        format!("{:.1}%", ratio * 100.0)
    } else {
        "n/a".to_string()
    }
}
