use crate::core::price_series::min_max;
use crate::core::types::CanvasLayout;

/// Vertical mapping from price to canvas `y`.
///
/// Higher prices map to smaller `y`. A flat series has its range replaced by
/// `1`, which puts every sample on the baseline. When `max - min` overflows
/// `f64`, prices are normalized in halves so finite input stays finite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceScale {
    min: f64,
    range: f64,
    halved: bool,
}

impl PriceScale {
    #[must_use]
    pub fn from_min_max(min: f64, max: f64) -> Self {
        let range = max - min;
        if !range.is_finite() {
            return Self {
                min,
                range: max / 2.0 - min / 2.0,
                halved: true,
            };
        }
        Self {
            min,
            range: if range == 0.0 { 1.0 } else { range },
            halved: false,
        }
    }

    /// Builds the scale from the extremes of `prices`; `None` when empty.
    #[must_use]
    pub fn from_prices(prices: &[f64]) -> Option<Self> {
        min_max(prices).map(|(min, max)| Self::from_min_max(min, max))
    }

    #[must_use]
    pub fn min(self) -> f64 {
        self.min
    }

    /// Divisor used for normalization; half the spread when `is_halved`.
    #[must_use]
    pub fn range(self) -> f64 {
        self.range
    }

    #[must_use]
    pub fn is_halved(self) -> bool {
        self.halved
    }

    #[must_use]
    pub fn price_to_y(self, price: f64, canvas: CanvasLayout) -> f64 {
        let normalized = if self.halved {
            (price / 2.0 - self.min / 2.0) / self.range
        } else {
            (price - self.min) / self.range
        };
        canvas.baseline_y() - normalized * canvas.draw_height()
    }
}

/// Horizontal mapping from sample index to canvas `x`.
///
/// Samples are spread evenly from the left edge to the right edge. A single
/// sample sits on the left edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndexScale {
    count: usize,
    width: f64,
}

impl IndexScale {
    #[must_use]
    pub fn new(count: usize, width: f64) -> Self {
        Self { count, width }
    }

    #[must_use]
    pub fn count(self) -> usize {
        self.count
    }

    #[must_use]
    pub fn index_to_x(self, index: usize) -> f64 {
        if self.count <= 1 {
            return 0.0;
        }
        index as f64 / (self.count - 1) as f64 * self.width
    }
}
