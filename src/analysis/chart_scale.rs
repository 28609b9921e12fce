//! Maps a price path into SVG chart space and back.
//!
//! The x axis is index-based (points are evenly spaced regardless of their
//! timestamps). The y domain spans both the YES and NO lines, padded by
//! `CHART.price_domain_padding` on each side.

use itertools::Itertools;

use crate::config::{CHART, ChartGeometry};
use crate::domain::{Outcome, PricePath};
use crate::error::{PathError, PathResult};
use crate::utils::remap;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartScale {
    geometry: ChartGeometry,
    min_price: f64,
    max_price: f64,
    len: usize,
}

impl ChartScale {
    pub fn fit(path: &PricePath, geometry: ChartGeometry) -> PathResult<Self> {
        if path.is_empty() {
            return Err(PathError::OutOfRange(
                "cannot fit a chart scale to an empty path".to_string(),
            ));
        }
        let (lo, hi) = path.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
            (
                lo.min(p.yes_price().min(p.no_price())),
                hi.max(p.yes_price().max(p.no_price())),
            )
        });
        Ok(Self {
            geometry,
            min_price: lo - CHART.price_domain_padding,
            max_price: hi + CHART.price_domain_padding,
            len: path.len(),
        })
    }

    pub fn fit_default(path: &PricePath) -> PathResult<Self> {
        Self::fit(path, ChartGeometry::default())
    }

    pub fn geometry(&self) -> &ChartGeometry {
        &self.geometry
    }

    /// `(min, max)` price shown on the y axis.
    pub fn price_domain(&self) -> (f64, f64) {
        (self.min_price, self.max_price)
    }

    pub fn x_for_index(&self, idx: usize) -> f64 {
        let left = self.geometry.padding.left;
        if self.len <= 1 {
            return left;
        }
        left + (idx as f64 / (self.len - 1) as f64) * self.geometry.inner_width()
    }

    pub fn y_for_price(&self, price: f64) -> f64 {
        let top = self.geometry.padding.top;
        remap(
            price,
            self.max_price,
            self.min_price,
            top,
            top + self.geometry.inner_height(),
        )
    }

    /// y of the x axis line.
    pub fn baseline_y(&self) -> f64 {
        self.geometry.height - self.geometry.padding.bottom
    }

    /// Normalized cursor position for a pixel x, or None outside the plot area.
    pub fn fraction_at(&self, pixel_x: f64) -> Option<f64> {
        let inner_width = self.geometry.inner_width();
        let relative = pixel_x - self.geometry.padding.left;
        if !(0.0..=inner_width).contains(&relative) || inner_width <= 0.0 {
            return None;
        }
        Some(relative / inner_width)
    }

    pub fn polyline(&self, path: &PricePath, outcome: Outcome) -> Vec<(f64, f64)> {
        path.iter()
            .enumerate()
            .map(|(i, p)| (self.x_for_index(i), self.y_for_price(p.price(outcome))))
            .collect()
    }

    /// The `d` attribute of the line for one outcome: `M x,y L x,y ...`
    pub fn svg_path_d(&self, path: &PricePath, outcome: Outcome) -> String {
        if path.is_empty() {
            return String::new();
        }
        let segments = self
            .polyline(path, outcome)
            .into_iter()
            .map(|(x, y)| format!("{:.2},{:.2}", x, y))
            .join(" L ");
        format!("M {}", segments)
    }

    /// `(price, y)` for each fixed axis tick.
    pub fn y_ticks(&self) -> Vec<(f64, f64)> {
        CHART
            .y_ticks
            .iter()
            .map(|&tick| (tick, self.y_for_price(tick)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::SeriesSampler;
    use crate::domain::PathConfig;
    use crate::generator::PathGenerator;

    fn path() -> PricePath {
        PathGenerator::default()
            .generate(&PathConfig::new(42, 24, 1.0, 0.5))
            .unwrap()
    }

    #[test]
    fn x_spans_the_plot_area() {
        let p = path();
        let scale = ChartScale::fit_default(&p).unwrap();
        assert_eq!(scale.x_for_index(0), 60.0);
        assert!((scale.x_for_index(p.len() - 1) - 520.0).abs() < 1e-9);
    }

    #[test]
    fn y_domain_is_padded_extremes() {
        let p = path();
        let scale = ChartScale::fit_default(&p).unwrap();
        let (lo, hi) = scale.price_domain();
        let hi_price = hi - 0.05;
        let lo_price = lo + 0.05;
        assert!(p.iter().all(|pt| pt.yes_price() <= hi_price + 1e-12 && pt.no_price() >= lo_price - 1e-12));
        assert!((scale.y_for_price(hi) - 20.0).abs() < 1e-9);
        assert!((scale.y_for_price(lo) - scale.baseline_y()).abs() < 1e-9);
    }

    #[test]
    fn cursor_outside_plot_is_none() {
        let scale = ChartScale::fit_default(&path()).unwrap();
        assert_eq!(scale.fraction_at(59.0), None);
        assert_eq!(scale.fraction_at(521.0), None);
        assert_eq!(scale.fraction_at(60.0), Some(0.0));
        assert_eq!(scale.fraction_at(520.0), Some(1.0));
    }

    #[test]
    fn cursor_over_a_point_selects_it() {
        let p = path();
        let scale = ChartScale::fit_default(&p).unwrap();
        for i in 0..p.len() {
            let fraction = scale.fraction_at(scale.x_for_index(i)).unwrap();
            assert_eq!(SeriesSampler::nearest_index(&p, fraction).unwrap(), i);
        }
    }

    #[test]
    fn svg_path_has_one_segment_per_point() {
        let p = path();
        let scale = ChartScale::fit_default(&p).unwrap();
        let d = scale.svg_path_d(&p, Outcome::No);
        assert!(d.starts_with("M 60.00,"));
        assert_eq!(d.matches(" L ").count(), p.len() - 1);
    }

    #[test]
    fn ticks_descend_down_the_axis() {
        let scale = ChartScale::fit_default(&path()).unwrap();
        let ticks = scale.y_ticks();
        assert_eq!(ticks.len(), 4);
        assert!(ticks.windows(2).all(|w| w[0].1 > w[1].1));
    }
}
