//! Generation and display constants (Immutable Blueprints)

pub mod price {
    /// Outcome prices never leave [FLOOR, CEILING].
    pub const FLOOR: f64 = 0.05;
    pub const CEILING: f64 = 0.95;
    /// Emitted prices are rounded to this many decimals.
    pub const DECIMALS: u32 = 4;
    /// Used when a caller has no proposal price to start from.
    pub const NEUTRAL: f64 = 0.5;
}

pub mod dynamics {
    use chrono::Weekday;

    // Cosmetic values tuned for a plausible looking chart, not a market model.
    pub const EVENT_AMPLITUDE: f64 = 0.05;
    pub const EVENT_CYCLES: f64 = 2.0; // sin(t * 4π)
    pub const NOISE_AMPLITUDE: f64 = 0.03;
    pub const REVERSION_TARGET: f64 = 0.5;
    pub const REVERSION_STRENGTH: f64 = 0.02;
    pub const WEEKEND_PENALTY: f64 = -0.01;
    pub const WEEKEND_DAYS: &[Weekday] = &[Weekday::Sat, Weekday::Sun];
}

pub mod volume {
    pub const MIN: f64 = 100_000.0;
    pub const MAX: f64 = 1_100_000.0;
    /// Volume that fills the volume bar completely.
    pub const BAR_FULL_SCALE: f64 = 2_000_000.0;
}

pub mod seed {
    /// Largest integer a JS number carries exactly (2^53 - 1).
    pub const MAX_SAFE_F64_SEED: f64 = 9_007_199_254_740_991.0;
}

pub mod path {
    /// Longest path a config may ask for. Presets top out at 360.
    pub const MAX_PERIODS: usize = 10_000;
}

pub mod time {
    /// 2025-01-01T00:00:00Z. Newest point of a path built without an explicit end.
    pub const DEFAULT_END_MS: i64 = 1_735_689_600_000;
}

pub mod sentiment {
    pub const VERY_HIGH: f64 = 0.8;
    pub const HIGH: f64 = 0.6;
    pub const MODERATE: f64 = 0.4;
    pub const LOW: f64 = 0.2;
}
