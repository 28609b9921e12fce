//! Configuration module for the market-paths crate.

// Can all be private now because we have a public re-export.
mod chart;
mod debug;
mod dynamics;
mod types;

// Public
pub mod constants;

// Re-export commonly used items
pub use chart::{CHART, ChartConfig, ChartGeometry, Padding};
pub use debug::{LOG_FLAGS, LOG_PERFORMANCE, LogFlags};
pub use dynamics::{DynamicsConfig, VolumeRange};
pub use types::Timeframe;
