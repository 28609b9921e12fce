//! Chart geometry configuration

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Copy, PartialEq, Serialize, Deserialize)]
pub struct Padding {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

/// Outer size of the chart in SVG units and the margins reserved for axes.
#[derive(Clone, Debug, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartGeometry {
    pub width: f64,
    pub height: f64,
    pub padding: Padding,
}

impl ChartGeometry {
    pub fn inner_width(&self) -> f64 {
        self.width - self.padding.left - self.padding.right
    }

    pub fn inner_height(&self) -> f64 {
        self.height - self.padding.top - self.padding.bottom
    }
}

impl Default for ChartGeometry {
    fn default() -> Self {
        CHART.geometry
    }
}

pub struct ChartConfig {
    pub geometry: ChartGeometry,
    /// Added above the highest and below the lowest plotted price
    pub price_domain_padding: f64,
    /// Fixed price ticks drawn on the y axis
    pub y_ticks: &'static [f64],
}

pub const CHART: ChartConfig = ChartConfig {
    geometry: ChartGeometry {
        width: 600.0,
        height: 300.0,
        padding: Padding {
            top: 20.0,
            right: 80.0,
            bottom: 40.0,
            left: 60.0,
        },
    },
    price_domain_padding: 0.05,
    y_ticks: &[0.25, 0.5, 0.75, 1.0],
};
