use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Fixed logical coordinate space the price series is normalized into.
///
/// The drawable band sits between `margin_top` and `height - margin_bottom`
/// so the line never touches the canvas edges. The area fill still extends to
/// the full `height`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasLayout {
    width: f64,
    height: f64,
    margin_top: f64,
    margin_bottom: f64,
}

impl CanvasLayout {
    pub const CANONICAL_WIDTH: f64 = 1000.0;
    pub const CANONICAL_HEIGHT: f64 = 300.0;
    pub const CANONICAL_MARGIN: f64 = 10.0;

    pub fn new(width: f64, height: f64, margin_top: f64, margin_bottom: f64) -> ChartResult<Self> {
        let layout = Self {
            width,
            height,
            margin_top,
            margin_bottom,
        };
        layout.validate()?;
        Ok(layout)
    }

    /// 1000 x 300 canvas with 10-unit margins (baseline 290, draw height 280).
    #[must_use]
    pub const fn canonical() -> Self {
        Self {
            width: Self::CANONICAL_WIDTH,
            height: Self::CANONICAL_HEIGHT,
            margin_top: Self::CANONICAL_MARGIN,
            margin_bottom: Self::CANONICAL_MARGIN,
        }
    }

    /// Rejects non-finite sizes, non-positive width or height, negative
    /// margins, and margins that leave no drawable band.
    pub fn validate(self) -> ChartResult<()> {
        let all_finite = [self.width, self.height, self.margin_top, self.margin_bottom]
            .iter()
            .all(|value| value.is_finite());
        let valid = all_finite
            && self.width > 0.0
            && self.height > 0.0
            && self.margin_top >= 0.0
            && self.margin_bottom >= 0.0
            && self.margin_top + self.margin_bottom < self.height;
        if !valid {
            return Err(ChartError::InvalidCanvas {
                width: self.width,
                height: self.height,
                margin_top: self.margin_top,
                margin_bottom: self.margin_bottom,
            });
        }
        Ok(())
    }

    #[must_use]
    pub fn width(self) -> f64 {
        self.width
    }

    #[must_use]
    pub fn height(self) -> f64 {
        self.height
    }

    #[must_use]
    pub fn margin_top(self) -> f64 {
        self.margin_top
    }

    #[must_use]
    pub fn margin_bottom(self) -> f64 {
        self.margin_bottom
    }

    /// Vertical position of the lowest price in the series.
    #[must_use]
    pub fn baseline_y(self) -> f64 {
        self.height - self.margin_bottom
    }

    /// Vertical span available between the lowest and highest price.
    #[must_use]
    pub fn draw_height(self) -> f64 {
        self.height - self.margin_top - self.margin_bottom
    }
}

impl Default for CanvasLayout {
    fn default() -> Self {
        Self::canonical()
    }
}

/// One vertex in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub x: f64,
    pub y: f64,
}

impl ChartPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}
