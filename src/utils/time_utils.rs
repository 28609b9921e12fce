use chrono::{DateTime, Datelike, Utc, Weekday};
use std::time::Duration;

use crate::config::Timeframe;

pub const MS_IN_S: i64 = 1000;
pub const MS_IN_MIN: i64 = MS_IN_S * 60;
pub const MS_IN_H: i64 = MS_IN_MIN * 60;
pub const MS_IN_D: i64 = MS_IN_H * 24;
pub const MS_IN_W: i64 = MS_IN_D * 7;

pub const STANDARD_TIME_FORMAT: &str = "%Y-%m-%d";
const INTRADAY_AXIS_FORMAT: &str = "%H:%M";
const DAILY_AXIS_FORMAT: &str = "%b %-d";

/// Converts fractional hours to whole milliseconds.
/// None if the input is not finite or does not fit in an i64.
pub fn hours_to_ms(hours: f64) -> Option<i64> {
    let ms = (hours * MS_IN_H as f64).round();
    if ms.is_finite() && ms.abs() < i64::MAX as f64 {
        Some(ms as i64)
    } else {
        None
    }
}

pub fn utc_from_ms(epoch_ms: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp_millis(epoch_ms)
}

/// Day of week of a timestamp, in UTC.
pub fn weekday_utc(epoch_ms: i64) -> Option<Weekday> {
    utc_from_ms(epoch_ms).map(|dt| dt.weekday())
}

pub fn now_timestamp_ms() -> i64 {
    Utc::now().timestamp_millis()
}

/// Rounds a timestamp down to the start of its hour.
pub fn truncate_to_hour(epoch_ms: i64) -> i64 {
    epoch_ms - epoch_ms.rem_euclid(MS_IN_H)
}

// Used for display purposes
pub fn epoch_ms_to_date_string(epoch_ms: i64) -> String {
    match utc_from_ms(epoch_ms) {
        Some(dt) => dt.format(STANDARD_TIME_FORMAT).to_string(),
        None => "--".to_string(),
    }
}

/// X-axis label for a point: clock time for intraday windows, `Jan 5` style otherwise.
pub fn format_axis_time(epoch_ms: i64, timeframe: Timeframe) -> String {
    let Some(dt) = utc_from_ms(epoch_ms) else {
        return "--".to_string();
    };
    let fmt = if timeframe.is_intraday() {
        INTRADAY_AXIS_FORMAT
    } else {
        DAILY_AXIS_FORMAT
    };
    dt.format(fmt).to_string()
}

/// Compact label in the largest unit that divides the duration exactly:
/// `1w`, `30d`, `6h`, `90m`. Anything not a whole number of minutes is shown in seconds.
pub fn format_duration(duration: Duration) -> String {
    const UNITS: [(i64, &str); 4] = [(MS_IN_W, "w"), (MS_IN_D, "d"), (MS_IN_H, "h"), (MS_IN_MIN, "m")];

    let ms = duration.as_millis();
    UNITS
        .iter()
        .map(|&(unit, suffix)| (unit as u128, suffix))
        .find(|&(unit, _)| ms >= unit && ms % unit == 0)
        .map(|(unit, suffix)| format!("{}{}", ms / unit, suffix))
        .unwrap_or_else(|| format!("{}s", ms / MS_IN_S as u128))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::constants::time::DEFAULT_END_MS;

    #[test]
    fn hours_convert_to_ms() {
        assert_eq!(hours_to_ms(1.0), Some(MS_IN_H));
        assert_eq!(hours_to_ms(0.5), Some(30 * MS_IN_MIN));
        assert_eq!(hours_to_ms(f64::INFINITY), None);
        assert_eq!(hours_to_ms(f64::NAN), None);
    }

    #[test]
    fn default_end_is_new_year_wednesday() {
        assert_eq!(epoch_ms_to_date_string(DEFAULT_END_MS), "2025-01-01");
        assert_eq!(weekday_utc(DEFAULT_END_MS), Some(Weekday::Wed));
        assert_eq!(weekday_utc(DEFAULT_END_MS - 4 * MS_IN_D), Some(Weekday::Sat));
    }

    #[test]
    fn truncation_drops_minutes() {
        let ts = DEFAULT_END_MS + 2 * MS_IN_H + 17 * MS_IN_MIN + 5 * MS_IN_S;
        assert_eq!(truncate_to_hour(ts), DEFAULT_END_MS + 2 * MS_IN_H);
        assert_eq!(truncate_to_hour(DEFAULT_END_MS), DEFAULT_END_MS);
    }

    #[test]
    fn axis_labels_follow_timeframe() {
        let ts = DEFAULT_END_MS + 14 * MS_IN_H + 4 * MS_IN_D;
        assert_eq!(format_axis_time(ts, Timeframe::H24), "14:00");
        assert_eq!(format_axis_time(ts, Timeframe::D7), "Jan 5");
        assert_eq!(format_axis_time(i64::MAX, Timeframe::D7), "--");
    }

    #[test]
    fn durations_use_largest_exact_unit() {
        let ms = |v: i64| Duration::from_millis(v as u64);
        assert_eq!(format_duration(ms(MS_IN_D)), "1d");
        assert_eq!(format_duration(ms(MS_IN_W)), "1w");
        assert_eq!(format_duration(ms(30 * MS_IN_D)), "30d");
        assert_eq!(format_duration(ms(6 * MS_IN_H)), "6h");
        assert_eq!(format_duration(ms(90 * MS_IN_MIN)), "90m");
        assert_eq!(format_duration(ms(45 * MS_IN_S + 500)), "45s");
        assert_eq!(format_duration(Duration::ZERO), "0s");
    }
}
