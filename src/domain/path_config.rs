use serde::{Deserialize, Serialize};

use crate::config::Timeframe;
use crate::config::constants::path::MAX_PERIODS;
use crate::config::constants::time::DEFAULT_END_MS;
use crate::error::{PathError, PathResult};
use crate::utils::hours_to_ms;

/// Everything a path is reconstructed from. Two equal configs always
/// produce equal paths.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct PathConfig {
    pub seed: i64,
    pub periods: usize,
    pub interval_hours: f64,
    /// Starting YES price, in (0, 1)
    pub base_price: f64,
    /// Timestamp of the newest point
    pub end_timestamp_ms: i64,
}

impl PathConfig {
    pub fn new(seed: i64, periods: usize, interval_hours: f64, base_price: f64) -> Self {
        PathConfig {
            seed,
            periods,
            interval_hours,
            base_price,
            end_timestamp_ms: DEFAULT_END_MS,
        }
    }

    /// A config sampled at the granularity of a chart window.
    pub fn for_timeframe(seed: i64, timeframe: Timeframe, base_price: f64) -> Self {
        let (periods, interval_hours) = timeframe.preset();
        Self::new(seed, periods, interval_hours, base_price)
    }

    pub fn with_end_timestamp_ms(mut self, end_timestamp_ms: i64) -> Self {
        self.end_timestamp_ms = end_timestamp_ms;
        self
    }

    /// Same seed, base price and end, resampled for another window.
    pub fn retimed(&self, timeframe: Timeframe) -> Self {
        let (periods, interval_hours) = timeframe.preset();
        PathConfig {
            periods,
            interval_hours,
            ..*self
        }
    }

    /// Checks structural invariants. Seed range is checked by `RandomSource`.
    pub fn validate(&self) -> PathResult<()> {
        if !(1..=MAX_PERIODS).contains(&self.periods) {
            return Err(PathError::InvalidConfig(format!(
                "periods must be in [1, {}] (got {})",
                MAX_PERIODS, self.periods
            )));
        }
        if !(self.base_price > 0.0 && self.base_price < 1.0) {
            return Err(PathError::InvalidConfig(format!(
                "base_price must be in (0, 1) (got {})",
                self.base_price
            )));
        }
        self.start_timestamp_ms().map(|_| ())
    }

    /// Step between points, in whole milliseconds.
    pub fn interval_ms(&self) -> PathResult<i64> {
        if !(self.interval_hours.is_finite() && self.interval_hours > 0.0) {
            return Err(PathError::InvalidConfig(format!(
                "interval_hours must be positive and finite (got {})",
                self.interval_hours
            )));
        }
        match hours_to_ms(self.interval_hours) {
            Some(ms) if ms >= 1 => Ok(ms),
            _ => Err(PathError::InvalidConfig(format!(
                "interval_hours {} does not map to a usable millisecond step",
                self.interval_hours
            ))),
        }
    }

    /// Timestamp of the oldest point.
    pub fn start_timestamp_ms(&self) -> PathResult<i64> {
        let interval_ms = self.interval_ms()?;
        i64::try_from(self.periods)
            .ok()
            .and_then(|periods| periods.checked_mul(interval_ms))
            .and_then(|span| self.end_timestamp_ms.checked_sub(span))
            .ok_or_else(|| {
                PathError::InvalidConfig(format!(
                    "{} periods of {}h before {} overflow the timestamp range",
                    self.periods, self.interval_hours, self.end_timestamp_ms
                ))
            })
    }
}
