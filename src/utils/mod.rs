mod format_utils;
mod maths_utils;
mod perf;
mod time_utils;

pub use format_utils::{
    ENDED, PLACEHOLDER, format_compact_volume, format_currency, format_percent,
    format_percent_change, format_price, format_time_remaining,
};
pub use time_utils::{
    MS_IN_D, MS_IN_H, MS_IN_MIN, MS_IN_S, MS_IN_W, epoch_ms_to_date_string,
    format_axis_time, format_duration, hours_to_ms, now_timestamp_ms, truncate_to_hour,
    utc_from_ms, weekday_utc,
};

pub(crate) use maths_utils::{fraction_to_index, percent_change, remap, round_to};
