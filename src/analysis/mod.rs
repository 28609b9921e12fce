// Chart-side reading of generated paths
mod chart_scale;
mod market_stats;
mod sampler;

pub use chart_scale::ChartScale;
pub use market_stats::{
    ConfidenceLevel, MarketSentiment, PathSummary, PriceChange, ProbabilityLabel, Trend,
    volume_bar_fraction,
};
pub use sampler::SeriesSampler;
