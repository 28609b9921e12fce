use crate::config::{LOG_FLAGS, Timeframe};
use crate::domain::{PricePath, PricePoint};
use crate::error::{PathError, PathResult};
use crate::generator::PathGenerator;
use crate::utils::fraction_to_index;

/// Picks what the chart shows: which path for a window, which point under the cursor.
pub struct SeriesSampler;

impl SeriesSampler {
    /// Regenerates `path` at the granularity of `timeframe` with standard dynamics.
    /// Seed, base price and end timestamp are carried over from the path's config.
    pub fn for_timeframe(path: &PricePath, timeframe: Timeframe) -> PathResult<PricePath> {
        Self::for_timeframe_with(&PathGenerator::default(), path, timeframe)
    }

    pub fn for_timeframe_with(
        generator: &PathGenerator,
        path: &PricePath,
        timeframe: Timeframe,
    ) -> PathResult<PricePath> {
        generator.generate(&path.config().retimed(timeframe))
    }

    /// Index of the sample closest to a normalized horizontal position.
    pub fn nearest_index(path: &PricePath, fraction: f64) -> PathResult<usize> {
        if path.is_empty() {
            return Err(PathError::OutOfRange("path has no points".to_string()));
        }
        if !(0.0..=1.0).contains(&fraction) {
            return Err(PathError::OutOfRange(format!(
                "cursor position must be in [0, 1] (got {})",
                fraction
            )));
        }
        let idx = fraction_to_index(fraction, path.len());
        if LOG_FLAGS.log_sampling {
            log::trace!("cursor {:.4} -> point {} of {}", fraction, idx, path.len());
        }
        Ok(idx)
    }

    /// The point under the cursor. Always a member of `path`, never interpolated.
    pub fn nearest(path: &PricePath, fraction: f64) -> PathResult<&PricePoint> {
        let idx = Self::nearest_index(path, fraction)?;
        Ok(&path[idx])
    }
}
