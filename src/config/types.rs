//! Chart window types

use serde::{Deserialize, Serialize};
use std::time::Duration;
use strum_macros::{Display, EnumIter, EnumString};

use crate::utils::MS_IN_H;

/// A named chart window. Each one maps to a fixed sampling granularity, so
/// switching timeframe regenerates a path rather than slicing an existing one.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, EnumString, Display, Default,
)]
pub enum Timeframe {
    #[serde(rename = "24h")]
    #[strum(serialize = "24h")]
    H24,
    #[default]
    #[serde(rename = "7d")]
    #[strum(serialize = "7d")]
    D7,
    #[serde(rename = "30d")]
    #[strum(serialize = "30d")]
    D30,
    #[serde(rename = "90d")]
    #[strum(serialize = "90d")]
    D90,
}

impl Timeframe {
    /// `(periods, interval_hours)` used to generate a path for this window.
    pub const fn preset(&self) -> (usize, f64) {
        match self {
            Self::H24 => (24, 1.0),
            Self::D7 => (168, 1.0),
            Self::D30 => (120, 6.0),
            Self::D90 => (360, 6.0),
        }
    }

    pub const fn periods(&self) -> usize {
        self.preset().0
    }

    /// Total time covered by the window.
    pub fn span(&self) -> Duration {
        let (periods, hours) = self.preset();
        Duration::from_millis(periods as u64 * (hours * MS_IN_H as f64) as u64)
    }

    /// Intraday windows label their axis with a clock time rather than a date.
    pub const fn is_intraday(&self) -> bool {
        matches!(self, Self::H24)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn presets_match_chart_windows() {
        assert_eq!(Timeframe::H24.preset(), (24, 1.0));
        assert_eq!(Timeframe::D7.preset(), (168, 1.0));
        assert_eq!(Timeframe::D30.preset(), (120, 6.0));
        assert_eq!(Timeframe::D90.preset(), (360, 6.0));
    }

    #[test]
    fn labels_parse_back() {
        for tf in Timeframe::iter() {
            assert_eq!(Timeframe::from_str(&tf.to_string()).unwrap(), tf);
        }
        assert_eq!(Timeframe::D30.to_string(), "30d");
        assert!(Timeframe::from_str("1y").is_err());
    }

    #[test]
    fn spans_cover_the_named_window() {
        assert_eq!(Timeframe::H24.span(), Duration::from_secs(24 * 3600));
        assert_eq!(Timeframe::D7.span(), Duration::from_secs(7 * 24 * 3600));
        assert_eq!(Timeframe::D30.span(), Duration::from_secs(30 * 24 * 3600));
        assert_eq!(Timeframe::D90.span(), Duration::from_secs(90 * 24 * 3600));
    }

    #[test]
    fn serde_uses_short_labels() {
        let json = serde_json::to_string(&Timeframe::H24).unwrap();
        assert_eq!(json, "\"24h\"");
        let back: Timeframe = serde_json::from_str("\"90d\"").unwrap();
        assert_eq!(back, Timeframe::D90);
    }
}
