use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::price_series::PriceSeries;
use crate::core::primitives::ensure_finite_prices;
use crate::core::scale::{IndexScale, PriceScale};
use crate::core::types::{CanvasLayout, ChartPoint};
use crate::error::ChartResult;

#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;

/// Line and fill geometry for one price series.
///
/// `area_path` always starts with every vertex of `line_path` and then closes
/// against the bottom-right and bottom-left canvas corners. Closing back to
/// the first vertex is left implicit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartGeometry {
    pub line_path: Vec<ChartPoint>,
    pub area_path: Vec<ChartPoint>,
}

impl ChartGeometry {
    #[must_use]
    pub fn empty() -> Self {
        Self {
            line_path: Vec::new(),
            area_path: Vec::new(),
        }
    }

    /// Projects an already validated series; never fails.
    #[must_use]
    pub fn from_series(series: &PriceSeries, canvas: CanvasLayout) -> Self {
        let line_path = project_points(series.as_slice(), canvas);
        let area_path = close_area(&line_path, canvas);
        trace!(points = line_path.len(), "project chart geometry");
        Self {
            line_path,
            area_path,
        }
    }

    pub fn from_prices(prices: &[f64], canvas: CanvasLayout) -> ChartResult<Self> {
        ensure_finite_prices(prices)?;
        let line_path = project_points(prices, canvas);
        let area_path = close_area(&line_path, canvas);
        Ok(Self {
            line_path,
            area_path,
        })
    }

    /// `true` when there is nothing to draw.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.line_path.is_empty()
    }
}

impl Default for ChartGeometry {
    fn default() -> Self {
        Self::empty()
    }
}

/// Maps each price to one canvas vertex, in input order.
///
/// Empty input yields an empty path. Non-finite prices are rejected.
pub fn build_line_path(prices: &[f64], canvas: CanvasLayout) -> ChartResult<Vec<ChartPoint>> {
    ensure_finite_prices(prices)?;
    Ok(project_points(prices, canvas))
}

/// Line path closed against the bottom edge of the canvas.
///
/// Empty input yields an empty path rather than a bare baseline segment.
pub fn build_area_path(prices: &[f64], canvas: CanvasLayout) -> ChartResult<Vec<ChartPoint>> {
    let line_path = build_line_path(prices, canvas)?;
    Ok(close_area(&line_path, canvas))
}

fn project_points(prices: &[f64], canvas: CanvasLayout) -> Vec<ChartPoint> {
    let Some(price_scale) = PriceScale::from_prices(prices) else {
        return Vec::new();
    };
    let index_scale = IndexScale::new(prices.len(), canvas.width());
    let project = |(index, &price): (usize, &f64)| {
        ChartPoint::new(
            index_scale.index_to_x(index),
            price_scale.price_to_y(price, canvas),
        )
    };

    #[cfg(feature = "parallel-projection")]
    {
        prices.par_iter().enumerate().map(project).collect()
    }

    #[cfg(not(feature = "parallel-projection"))]
    {
        prices.iter().enumerate().map(project).collect()
    }
}

fn close_area(line_path: &[ChartPoint], canvas: CanvasLayout) -> Vec<ChartPoint> {
    if line_path.is_empty() {
        return Vec::new();
    }
    let mut area = Vec::with_capacity(line_path.len() + 2);
    area.extend_from_slice(line_path);
    area.push(ChartPoint::new(canvas.width(), canvas.height()));
    area.push(ChartPoint::new(0.0, canvas.height()));
    area
}
