//! Price-path dynamics configuration

use anyhow::{Context, Result};
use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::config::constants::{dynamics, price, volume};
use crate::error::{PathError, PathResult};

/// Range volumes are drawn from, `[min, max)`.
#[derive(Clone, Debug, Copy, PartialEq, Serialize, Deserialize)]
pub struct VolumeRange {
    pub min: f64,
    pub max: f64,
}

impl Default for VolumeRange {
    fn default() -> Self {
        Self {
            min: volume::MIN,
            max: volume::MAX,
        }
    }
}

/// The knobs of the synthetic price walk.
/// Every field falls back to its default when missing from a JSON override file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DynamicsConfig {
    // Clamp applied after every step
    pub price_floor: f64,
    pub price_ceiling: f64,
    pub price_decimals: u32,

    /// Periodic "market event" term: sin(progress * 2π * cycles) * amplitude
    pub event_amplitude: f64,
    pub event_cycles: f64,

    /// Unbiased step noise: next_signed() * amplitude
    pub noise_amplitude: f64,

    /// Pull toward `reversion_target`: (target - price) * strength
    pub reversion_target: f64,
    pub reversion_strength: f64,

    /// Added on steps whose UTC weekday is listed in `weekend_days`
    pub weekend_penalty: f64,
    pub weekend_days: Vec<Weekday>,

    pub volume: VolumeRange,
}

impl Default for DynamicsConfig {
    fn default() -> Self {
        Self {
            price_floor: price::FLOOR,
            price_ceiling: price::CEILING,
            price_decimals: price::DECIMALS,
            event_amplitude: dynamics::EVENT_AMPLITUDE,
            event_cycles: dynamics::EVENT_CYCLES,
            noise_amplitude: dynamics::NOISE_AMPLITUDE,
            reversion_target: dynamics::REVERSION_TARGET,
            reversion_strength: dynamics::REVERSION_STRENGTH,
            weekend_penalty: dynamics::WEEKEND_PENALTY,
            weekend_days: dynamics::WEEKEND_DAYS.to_vec(),
            volume: VolumeRange::default(),
        }
    }
}

impl DynamicsConfig {
    // f64 only rounds reliably to about this many places
    const MAX_DECIMALS: u32 = 10;

    /// Loads overrides from a JSON file. Fields missing from the file keep their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read dynamics file {}", path.display()))?;
        let dynamics: Self = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse dynamics file {}", path.display()))?;
        dynamics.validate()?;
        Ok(dynamics)
    }

    pub fn is_weekend(&self, day: Weekday) -> bool {
        self.weekend_days.contains(&day)
    }

    pub fn validate(&self) -> PathResult<()> {
        let coefficients = [
            ("event_amplitude", self.event_amplitude),
            ("event_cycles", self.event_cycles),
            ("noise_amplitude", self.noise_amplitude),
            ("reversion_target", self.reversion_target),
            ("reversion_strength", self.reversion_strength),
            ("weekend_penalty", self.weekend_penalty),
        ];
        if let Some((name, value)) = coefficients.iter().find(|(_, v)| !v.is_finite()) {
            return Err(PathError::InvalidConfig(format!(
                "{} must be finite (got {})",
                name, value
            )));
        }

        let (floor, ceiling) = (self.price_floor, self.price_ceiling);
        if !(floor.is_finite() && ceiling.is_finite() && 0.0 <= floor && floor < ceiling && ceiling <= 1.0) {
            return Err(PathError::InvalidConfig(format!(
                "price bounds must satisfy 0 <= floor < ceiling <= 1 (got {}..{})",
                floor, ceiling
            )));
        }

        if self.price_decimals > Self::MAX_DECIMALS {
            return Err(PathError::InvalidConfig(format!(
                "price_decimals must be <= {} (got {})",
                Self::MAX_DECIMALS,
                self.price_decimals
            )));
        }

        let VolumeRange { min, max } = self.volume;
        if !(min.is_finite() && max.is_finite() && 0.0 <= min && min <= max) {
            return Err(PathError::InvalidConfig(format!(
                "volume range must satisfy 0 <= min <= max (got {}..{})",
                min, max
            )));
        }

        Ok(())
    }
}
