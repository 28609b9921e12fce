/// Rounds half away from zero to `decimals` places.
#[inline]
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Linearly maps a value from one range to another while preserving its relative proportion.
/// A degenerate input range maps everything to the middle of the output range.
#[inline]
pub fn remap(val: f64, in_min: f64, in_max: f64, out_min: f64, out_max: f64) -> f64 {
    let span = in_max - in_min;
    if span.abs() <= f64::EPSILON {
        return (out_min + out_max) / 2.0;
    }
    let t = (val - in_min) / span;
    out_min + t * (out_max - out_min)
}

/// Index of the sample closest to a normalized position along `len` samples.
/// Caller guarantees `len > 0` and `fraction` in [0, 1].
#[inline]
pub fn fraction_to_index(fraction: f64, len: usize) -> usize {
    let last = len.saturating_sub(1);
    ((fraction * last as f64).round() as usize).min(last)
}

/// Relative change in percent. None when the reference is ~zero.
#[inline]
pub fn percent_change(current: f64, previous: f64) -> Option<f64> {
    if previous.abs() > f64::EPSILON {
        Some((current - previous) / previous * 100.0)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_four_places() {
        assert_eq!(round_to(0.123456, 4), 0.1235);
        assert_eq!(round_to(0.5, 4), 0.5);
        assert_eq!(round_to(0.94999, 2), 0.95);
    }

    #[test]
    fn remap_preserves_proportion() {
        assert_eq!(remap(5.0, 0.0, 10.0, 0.0, 100.0), 50.0);
        assert_eq!(remap(0.0, 0.0, 10.0, 100.0, 0.0), 100.0);
        assert_eq!(remap(3.0, 2.0, 2.0, 0.0, 10.0), 5.0);
    }

    #[test]
    fn fraction_maps_to_rounded_index() {
        assert_eq!(fraction_to_index(0.0, 8), 0);
        assert_eq!(fraction_to_index(1.0, 8), 7);
        assert_eq!(fraction_to_index(0.5, 8), 4); // 3.5 rounds up
        assert_eq!(fraction_to_index(0.49, 8), 3);
        assert_eq!(fraction_to_index(0.7, 1), 0);
    }

    #[test]
    fn percent_change_guards_zero() {
        assert_eq!(percent_change(0.55, 0.5).map(|p| round_to(p, 6)), Some(10.0));
        assert_eq!(percent_change(1.0, 0.0), None);
    }
}
