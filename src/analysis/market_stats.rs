use serde::Serialize;
use statrs::statistics::Statistics;
use strum_macros::Display;

use crate::config::constants::{sentiment, volume};
use crate::domain::{Outcome, PricePath, PricePoint};
use crate::utils::percent_change;

/// Move of the YES price between the last two points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PriceChange {
    pub absolute: f64,
    /// Relative to the previous price, already scaled (1.5 = 1.5%)
    pub percent: f64,
}

impl PriceChange {
    pub fn latest(path: &PricePath) -> Option<Self> {
        let n = path.len();
        if n < 2 {
            return None;
        }
        let (prev, last) = (path[n - 2].yes_price(), path[n - 1].yes_price());
        Some(Self {
            absolute: last - prev,
            percent: percent_change(last, prev)?,
        })
    }

    pub fn is_up(&self) -> bool {
        self.absolute >= 0.0
    }
}

/// Descriptive statistics of the YES line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PathSummary {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    /// Sample standard deviation, 0 for a single point
    pub std_dev: f64,
    pub total_volume: f64,
    pub last: PricePoint,
}

impl PathSummary {
    pub fn from_path(path: &PricePath) -> Option<Self> {
        let last = *path.last()?;
        let yes: Vec<f64> = path.prices(Outcome::Yes).collect();

        let mean = Statistics::mean(&yes);
        let std_dev = if yes.len() > 1 {
            Statistics::std_dev(&yes)
        } else {
            0.0
        };

        Some(Self {
            min: Statistics::min(&yes),
            max: Statistics::max(&yes),
            mean,
            std_dev,
            total_volume: path.iter().map(|p| p.volume()).sum(),
            last,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
pub enum Trend {
    Up,
    Down,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
pub enum ConfidenceLevel {
    #[strum(serialize = "Very High")]
    VeryHigh,
    High,
    Moderate,
    Low,
    #[strum(serialize = "Very Low")]
    VeryLow,
}

impl ConfidenceLevel {
    pub fn from_confidence(confidence: f64) -> Self {
        if confidence >= sentiment::VERY_HIGH {
            Self::VeryHigh
        } else if confidence >= sentiment::HIGH {
            Self::High
        } else if confidence >= sentiment::MODERATE {
            Self::Moderate
        } else if confidence >= sentiment::LOW {
            Self::Low
        } else {
            Self::VeryLow
        }
    }
}

/// Aggregate read of several proposals' YES prices.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MarketSentiment {
    /// Average YES price
    pub average_confidence: f64,
    pub trend: Trend,
    /// Distance from a coin flip, 0 (at 0.5) to 1 (at 0 or 1)
    pub strength: f64,
    pub level: ConfidenceLevel,
}

impl MarketSentiment {
    pub fn from_yes_prices(prices: &[f64]) -> Option<Self> {
        if prices.is_empty() {
            return None;
        }
        let average_confidence = Statistics::mean(prices);
        let trend = if average_confidence > 0.5 {
            Trend::Up
        } else {
            Trend::Down
        };
        Some(Self {
            average_confidence,
            trend,
            strength: (average_confidence - 0.5).abs() * 2.0,
            level: ConfidenceLevel::from_confidence(average_confidence),
        })
    }
}

/// Plain-language reading of a single YES price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
pub enum ProbabilityLabel {
    #[strum(serialize = "Very Likely")]
    VeryLikely,
    Likely,
    Uncertain,
    Unlikely,
    #[strum(serialize = "Very Unlikely")]
    VeryUnlikely,
}

impl ProbabilityLabel {
    pub fn from_price(price: f64) -> Self {
        if price >= 0.8 {
            Self::VeryLikely
        } else if price >= 0.6 {
            Self::Likely
        } else if price >= 0.4 {
            Self::Uncertain
        } else if price >= 0.2 {
            Self::Unlikely
        } else {
            Self::VeryUnlikely
        }
    }
}

/// Fill of the volume bar, 0 to 1.
pub fn volume_bar_fraction(vol: f64) -> f64 {
    if !vol.is_finite() || vol <= 0.0 {
        return 0.0;
    }
    (vol / volume::BAR_FULL_SCALE).min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PathConfig;
    use crate::generator::PathGenerator;

    fn path(periods: usize) -> PricePath {
        PathGenerator::default()
            .generate(&PathConfig::new(42, periods, 1.0, 0.5))
            .unwrap()
    }

    #[test]
    fn latest_change_uses_last_two_points() {
        let p = path(10);
        let change = PriceChange::latest(&p).unwrap();
        let expected = p[10].yes_price() - p[9].yes_price();
        assert_eq!(change.absolute, expected);
        assert!((change.percent - expected / p[9].yes_price() * 100.0).abs() < 1e-9);
        assert_eq!(change.is_up(), expected >= 0.0);
    }

    #[test]
    fn summary_brackets_the_line() {
        let p = path(48);
        let s = PathSummary::from_path(&p).unwrap();
        assert!(s.min <= s.mean && s.mean <= s.max);
        assert!(s.std_dev >= 0.0);
        assert!(s.total_volume >= 49.0 * 100_000.0);
        assert_eq!(s.last, p[48]);
    }

    #[test]
    fn sentiment_levels() {
        let s = MarketSentiment::from_yes_prices(&[0.9, 0.7]).unwrap();
        assert!((s.average_confidence - 0.8).abs() < 1e-12);
        assert_eq!(s.trend, Trend::Up);
        assert!((s.strength - 0.6).abs() < 1e-12);

        let s = MarketSentiment::from_yes_prices(&[0.3]).unwrap();
        assert_eq!(s.trend, Trend::Down);
        assert_eq!(s.level, ConfidenceLevel::Low);
        assert_eq!(s.level.to_string(), "Low");
        assert!(MarketSentiment::from_yes_prices(&[]).is_none());

        assert_eq!(ConfidenceLevel::from_confidence(0.85).to_string(), "Very High");
        assert_eq!(ConfidenceLevel::from_confidence(0.1), ConfidenceLevel::VeryLow);
    }

    #[test]
    fn probability_labels() {
        assert_eq!(ProbabilityLabel::from_price(0.8).to_string(), "Very Likely");
        assert_eq!(ProbabilityLabel::from_price(0.65), ProbabilityLabel::Likely);
        assert_eq!(ProbabilityLabel::from_price(0.5), ProbabilityLabel::Uncertain);
        assert_eq!(ProbabilityLabel::from_price(0.25), ProbabilityLabel::Unlikely);
        assert_eq!(ProbabilityLabel::from_price(0.05).to_string(), "Very Unlikely");
    }

    #[test]
    fn volume_bar_saturates() {
        assert_eq!(volume_bar_fraction(1_000_000.0), 0.5);
        assert_eq!(volume_bar_fraction(5_000_000.0), 1.0);
        assert_eq!(volume_bar_fraction(-3.0), 0.0);
        assert_eq!(volume_bar_fraction(f64::NAN), 0.0);
    }
}
