//! Display strings for chart panels. All functions are total: anything
//! non-finite renders as the `--` placeholder.

use crate::utils::time_utils::{MS_IN_D, MS_IN_H, MS_IN_MIN};

pub const PLACEHOLDER: &str = "--";
pub const ENDED: &str = "Ended";

/// `$1,234.56`, `-$12.30`
pub fn format_currency(value: f64) -> String {
    if !value.is_finite() {
        return PLACEHOLDER.to_string();
    }
    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let sign = if value < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{}${}.{}", sign, group_thousands(int_part), frac_part)
}

/// A fraction as a percentage with one decimal: 0.523 -> `52.3%`
pub fn format_percent(fraction: f64) -> String {
    if !fraction.is_finite() {
        return PLACEHOLDER.to_string();
    }
    format!("{:.1}%", fraction * 100.0)
}

/// An already-scaled percent change with explicit sign: `+1.23%`
pub fn format_percent_change(percent: f64) -> String {
    if !percent.is_finite() {
        return PLACEHOLDER.to_string();
    }
    format!("{:+.2}%", percent)
}

/// Outcome price, three decimals: `$0.523`
pub fn format_price(price: f64) -> String {
    if !price.is_finite() {
        return PLACEHOLDER.to_string();
    }
    format!("${:.3}", price)
}

/// `$2.4M`, `$850.0K`, `$950`
pub fn format_compact_volume(volume: f64) -> String {
    if !volume.is_finite() {
        return PLACEHOLDER.to_string();
    }
    if volume >= 1_000_000.0 {
        format!("${:.1}M", volume / 1_000_000.0)
    } else if volume >= 1_000.0 {
        format!("${:.1}K", volume / 1_000.0)
    } else {
        format!("${:.0}", volume)
    }
}

/// Coarsest whole unit left until `end_ms`: months (of 30 days) once more
/// than 30 days remain, then days, hours, minutes. `Ended` when nothing is left.
pub fn format_time_remaining(now_ms: i64, end_ms: i64) -> String {
    let remaining = end_ms.saturating_sub(now_ms);
    if remaining <= 0 {
        return ENDED.to_string();
    }

    let days = remaining / MS_IN_D;
    if days > 30 {
        return plural(days / 30, "month");
    }
    if days > 0 {
        return plural(days, "day");
    }
    let hours = remaining / MS_IN_H;
    if hours > 0 {
        return plural(hours, "hour");
    }
    plural(remaining / MS_IN_MIN, "minute")
}

fn plural(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("{} {}", count, unit)
    } else {
        format!("{} {}s", count, unit)
    }
}

// "1234567" -> "1,234,567"
fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
