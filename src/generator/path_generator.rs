use rayon::prelude::*;
use std::f64::consts::PI;
use strum::IntoEnumIterator;

use crate::config::{DynamicsConfig, LOG_FLAGS, Timeframe};
use crate::domain::{PathConfig, PricePath, PricePoint};
use crate::error::PathResult;
use crate::generator::random_source::RandomSource;
use crate::utils::{round_to, weekday_utc};

/// The four additive terms that move the price on one step.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StepSignals {
    pub event: f64,
    pub noise: f64,
    pub reversion: f64,
    pub weekend: f64,
}

impl StepSignals {
    pub fn total(&self) -> f64 {
        self.event + self.noise + self.reversion + self.weekend
    }
}

/// Produces bounded, reproducible YES/NO price histories.
/// Holds no state between calls besides its dynamics.
#[derive(Debug, Clone, Default)]
pub struct PathGenerator {
    dynamics: DynamicsConfig,
}

impl PathGenerator {
    pub fn new(dynamics: DynamicsConfig) -> Self {
        Self { dynamics }
    }

    pub fn dynamics(&self) -> &DynamicsConfig {
        &self.dynamics
    }

    /// Either returns a complete path of `periods + 1` points or fails before
    /// producing anything.
    pub fn generate(&self, config: &PathConfig) -> PathResult<PricePath> {
        self.dynamics.validate()?;
        config.validate()?;
        let interval_ms = config.interval_ms()?;
        let start_ms = config.start_timestamp_ms()?;
        let mut rng = RandomSource::new(config.seed)?;

        let points = crate::trace_time!("Generate price path", 2_000, {
            self.walk(config, start_ms, interval_ms, &mut rng)
        });

        if LOG_FLAGS.log_generation {
            log::debug!(
                "Generated {} points (seed {}, {}h step), last YES {:.4}",
                points.len(),
                config.seed,
                config.interval_hours,
                points.last().map(|p| p.yes_price()).unwrap_or_default()
            );
        }

        Ok(PricePath::new(*config, points))
    }

    /// One path per chart window, all sharing seed, base price and end.
    /// Windows are generated in parallel and returned in `Timeframe` order.
    pub fn generate_all(&self, config: &PathConfig) -> PathResult<Vec<(Timeframe, PricePath)>> {
        let jobs: Vec<(Timeframe, PathConfig)> = Timeframe::iter()
            .map(|tf| (tf, config.retimed(tf)))
            .collect();

        jobs.into_par_iter()
            .map(|(tf, cfg)| self.generate(&cfg).map(|path| (tf, path)))
            .collect()
    }

    fn walk(
        &self,
        config: &PathConfig,
        start_ms: i64,
        interval_ms: i64,
        rng: &mut RandomSource,
    ) -> Vec<PricePoint> {
        let d = &self.dynamics;
        let mut points = Vec::with_capacity(config.periods + 1);

        // Index 0 is the anchor: the (clamped) base price, untouched by signals.
        let mut current = config.base_price.clamp(d.price_floor, d.price_ceiling);

        for i in 0..=config.periods {
            let timestamp_ms = start_ms + i as i64 * interval_ms;

            if i > 0 {
                let progress = i as f64 / config.periods as f64;
                let signals = self.signals(current, progress, timestamp_ms, rng);
                current = (current + signals.total()).clamp(d.price_floor, d.price_ceiling);
            }

            let volume = rng.next_in_range(d.volume.min, d.volume.max);
            let yes_price = round_to(current, d.price_decimals);
            points.push(PricePoint::new(timestamp_ms, yes_price, volume));
        }

        points
    }

    /// Draws exactly one value from `rng` (the noise term).
    pub fn signals(
        &self,
        current: f64,
        progress: f64,
        timestamp_ms: i64,
        rng: &mut RandomSource,
    ) -> StepSignals {
        let d = &self.dynamics;
        let on_weekend = weekday_utc(timestamp_ms).is_some_and(|day| d.is_weekend(day));

        StepSignals {
            event: (progress * 2.0 * PI * d.event_cycles).sin() * d.event_amplitude,
            noise: rng.next_signed() * d.noise_amplitude,
            reversion: (d.reversion_target - current) * d.reversion_strength,
            weekend: if on_weekend { d.weekend_penalty } else { 0.0 },
        }
    }
}
