use itertools::Itertools;
use serde::Serialize;
use std::ops::Index;

use crate::domain::path_config::PathConfig;
use crate::domain::price_point::{Outcome, PricePoint};

// ============================================================================
// PricePath: an immutable, oldest-first YES/NO price history
// ============================================================================

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct PricePath {
    config: PathConfig,
    points: Vec<PricePoint>,
}

impl PricePath {
    /// Only the generator builds paths; the invariants below are its job.
    pub(crate) fn new(config: PathConfig, points: Vec<PricePoint>) -> Self {
        let path = PricePath { config, points };
        debug_assert_eq!(path.len(), config.periods + 1);
        debug_assert!(path.is_chronological());
        path
    }

    /// The config this path was generated from.
    pub fn config(&self) -> &PathConfig {
        &self.config
    }

    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn get(&self, idx: usize) -> Option<&PricePoint> {
        self.points.get(idx)
    }

    pub fn first(&self) -> Option<&PricePoint> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&PricePoint> {
        self.points.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PricePoint> {
        self.points.iter()
    }

    pub fn prices(&self, outcome: Outcome) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(move |p| p.price(outcome))
    }

    /// Strictly increasing timestamps.
    pub fn is_chronological(&self) -> bool {
        self.points
            .iter()
            .tuple_windows()
            .all(|(a, b)| a.timestamp_ms() < b.timestamp_ms())
    }
}

impl Index<usize> for PricePath {
    type Output = PricePoint;

    fn index(&self, idx: usize) -> &PricePoint {
        &self.points[idx]
    }
}

impl<'a> IntoIterator for &'a PricePath {
    type Item = &'a PricePoint;
    type IntoIter = std::slice::Iter<'a, PricePoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiny_path() -> PricePath {
        let cfg = PathConfig::new(1, 2, 1.0, 0.5).with_end_timestamp_ms(7_200_000);
        PricePath::new(
            cfg,
            vec![
                PricePoint::new(0, 0.5, 1.0),
                PricePoint::new(3_600_000, 0.52, 2.0),
                PricePoint::new(7_200_000, 0.49, 3.0),
            ],
        )
    }

    #[test]
    fn accessors() {
        let path = tiny_path();
        assert_eq!(path.len(), 3);
        assert!(!path.is_empty());
        assert_eq!(path[1].yes_price(), 0.52);
        assert_eq!(path.last().map(|p| p.timestamp_ms()), Some(7_200_000));
        assert_eq!(path.prices(Outcome::Yes).collect::<Vec<_>>(), vec![0.5, 0.52, 0.49]);
        assert_eq!((&path).into_iter().count(), 3);
        assert!(path.is_chronological());
    }

    #[test]
    fn serializes_points_with_both_prices() {
        let json = serde_json::to_value(tiny_path()).unwrap();
        assert_eq!(json["points"][0]["yes_price"], 0.5);
        assert_eq!(json["points"][0]["no_price"], 0.5);
        assert_eq!(json["config"]["periods"], 2);
    }
}
