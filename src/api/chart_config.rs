use serde::{Deserialize, Serialize};

use crate::core::CanvasLayout;
use crate::error::{ChartError, ChartResult};

use super::ChartPalette;

/// Public chart configuration.
///
/// Serializable so host applications can persist or ship chart setup as JSON.
/// Every field has a default, so `{}` is a valid configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceChartConfig {
    #[serde(default)]
    pub canvas: CanvasLayout,
    #[serde(default = "default_line_stroke_width")]
    pub line_stroke_width: f64,
    #[serde(default = "default_grid_line_count")]
    pub grid_line_count: usize,
    #[serde(default = "default_grid_stroke_width")]
    pub grid_stroke_width: f64,
    #[serde(default)]
    pub palette: ChartPalette,
    #[serde(default = "default_show_price_label")]
    pub show_price_label: bool,
    #[serde(default = "default_price_label_font_size")]
    pub price_label_font_size: f64,
}

impl Default for PriceChartConfig {
    fn default() -> Self {
        Self::new(CanvasLayout::canonical())
    }
}

impl PriceChartConfig {
    #[must_use]
    pub fn new(canvas: CanvasLayout) -> Self {
        Self {
            canvas,
            line_stroke_width: default_line_stroke_width(),
            grid_line_count: default_grid_line_count(),
            grid_stroke_width: default_grid_stroke_width(),
            palette: ChartPalette::default(),
            show_price_label: default_show_price_label(),
            price_label_font_size: default_price_label_font_size(),
        }
    }

    #[must_use]
    pub fn with_grid_line_count(mut self, grid_line_count: usize) -> Self {
        self.grid_line_count = grid_line_count;
        self
    }

    #[must_use]
    pub fn with_line_stroke_width(mut self, line_stroke_width: f64) -> Self {
        self.line_stroke_width = line_stroke_width;
        self
    }

    #[must_use]
    pub fn with_palette(mut self, palette: ChartPalette) -> Self {
        self.palette = palette;
        self
    }

    #[must_use]
    pub fn with_price_label(mut self, show_price_label: bool) -> Self {
        self.show_price_label = show_price_label;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.canvas.validate()?;
        for (name, value) in [
            ("line_stroke_width", self.line_stroke_width),
            ("grid_stroke_width", self.grid_stroke_width),
            ("price_label_font_size", self.price_label_font_size),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "`{name}` must be finite and > 0"
                )));
            }
        }
        if self.grid_line_count == 1 {
            return Err(ChartError::InvalidData(
                "grid needs 0 or at least 2 lines".to_owned(),
            ));
        }
        self.palette.validate()
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse chart config: {e}"))
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize chart config: {e}"))
        })
    }

    /// Vertical positions of the horizontal grid lines, top edge to bottom edge.
    #[must_use]
    pub fn grid_line_positions(&self) -> Vec<f64> {
        if self.grid_line_count < 2 {
            return Vec::new();
        }
        let step = self.canvas.height() / (self.grid_line_count - 1) as f64;
        (0..self.grid_line_count)
            .map(|index| index as f64 * step)
            .collect()
    }
}

fn default_line_stroke_width() -> f64 {
    3.0
}

fn default_grid_line_count() -> usize {
    5
}

fn default_grid_stroke_width() -> f64 {
    1.0
}

fn default_show_price_label() -> bool {
    true
}

fn default_price_label_font_size() -> f64 {
    14.0
}
