// Core modules
pub mod analysis;
pub mod config;
pub mod domain;
pub mod error;
pub mod generator;
pub mod report;
pub mod utils;

// Re-export commonly used types outside of crate
pub use analysis::{ChartScale, SeriesSampler};
pub use config::{DynamicsConfig, Timeframe};
pub use domain::{Outcome, PathConfig, PricePath, PricePoint};
pub use error::{PathError, PathResult};
pub use generator::{PathGenerator, RandomSource};
pub use report::PathReporter;

use std::path::PathBuf;

use anyhow::{Context, Result};
// CLI argument parsing
use clap::Parser;

use crate::config::constants::price;
use crate::utils::{epoch_ms_to_date_string, now_timestamp_ms, truncate_to_hour};

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Seeded YES/NO price histories for prediction-market charts", long_about = None)]
pub struct Cli {
    /// Seed of the walk. Same seed, same path.
    #[arg(long, default_value_t = 42, allow_negative_numbers = true)]
    pub seed: i64,

    /// Chart window: 24h, 7d, 30d or 90d
    #[arg(long, default_value_t = Timeframe::D7)]
    pub timeframe: Timeframe,

    /// Starting YES price
    #[arg(long, default_value_t = price::NEUTRAL)]
    pub base_price: f64,

    /// Timestamp (epoch ms) of the newest point. Defaults to the current hour.
    #[arg(long, allow_negative_numbers = true)]
    pub end_ms: Option<i64>,

    /// Market close (epoch ms); prints how long until it resolves
    #[arg(long, allow_negative_numbers = true)]
    pub closes_ms: Option<i64>,

    /// JSON file overriding the walk dynamics
    #[arg(long)]
    pub dynamics: Option<PathBuf>,

    /// Also print the point nearest this cursor position (0 to 1)
    #[arg(long)]
    pub hover: Option<f64>,

    /// Print the path as JSON instead of a table
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// One summary line for every chart window
    #[arg(long, default_value_t = false)]
    pub all: bool,
}

/// Runs one command-line invocation and returns what should be printed.
pub fn run(args: &Cli) -> Result<String> {
    let dynamics = match &args.dynamics {
        Some(file) => DynamicsConfig::from_json_file(file)?,
        None => DynamicsConfig::default(),
    };
    let generator = PathGenerator::new(dynamics);

    let end_ms = args
        .end_ms
        .unwrap_or_else(|| truncate_to_hour(now_timestamp_ms()));
    let config = PathConfig::for_timeframe(args.seed, args.timeframe, args.base_price)
        .with_end_timestamp_ms(end_ms);

    log::info!(
        "Generating seed {} ending {} ({})",
        config.seed,
        epoch_ms_to_date_string(end_ms),
        if args.all { "all windows".to_string() } else { args.timeframe.to_string() }
    );

    let mut reporter = PathReporter::new();

    if args.all {
        let paths = generator
            .generate_all(&config)
            .context("Failed to generate chart windows")?;
        for (timeframe, path) in &paths {
            reporter.add_summary(path, *timeframe);
        }
        return Ok(reporter.render());
    }

    let path = generator
        .generate(&config)
        .with_context(|| format!("Failed to generate {} path", args.timeframe))?;

    if args.json {
        return serde_json::to_string_pretty(&path).context("Failed to serialize path");
    }

    reporter.add_table(&path, args.timeframe);
    reporter.add_summary(&path, args.timeframe);
    if let Some(fraction) = args.hover {
        reporter.add_hover(&path, args.timeframe, fraction)?;
    }
    if let Some(closes_ms) = args.closes_ms {
        reporter.add_countdown(now_timestamp_ms(), closes_ms);
    }
    Ok(reporter.render())
}
