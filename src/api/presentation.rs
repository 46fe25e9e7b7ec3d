use serde::{Deserialize, Serialize};

use crate::error::ChartResult;
use crate::render::Color;

/// Direction of the price move over the displayed window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChangeDirection {
    Up,
    Down,
    /// Zero change, or no change reported.
    Flat,
}

impl ChangeDirection {
    #[must_use]
    pub fn from_percent_change(percent_change: Option<f64>) -> Self {
        match percent_change {
            Some(value) if value > 0.0 => Self::Up,
            Some(value) if value < 0.0 => Self::Down,
            _ => Self::Flat,
        }
    }

    /// Arrow glyph shown next to the percent label.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Up => "\u{25B2}",
            Self::Down => "\u{25BC}",
            Self::Flat => "\u{2013}",
        }
    }
}

/// Colors for the price line, the area fill and the change label.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartPalette {
    pub rising_stroke: Color,
    pub falling_stroke: Color,
    pub rising_fill: Color,
    pub falling_fill: Color,
    pub flat_label: Color,
    pub grid: Color,
    pub label: Color,
}

impl Default for ChartPalette {
    fn default() -> Self {
        let green = Color::from_rgb8(0x22, 0xc5, 0x5e);
        let red = Color::from_rgb8(0xef, 0x44, 0x44);
        Self {
            rising_stroke: green,
            falling_stroke: red,
            rising_fill: green.with_alpha(0.1),
            falling_fill: red.with_alpha(0.1),
            flat_label: Color::from_rgb8(0xea, 0xb3, 0x08),
            grid: Color::from_rgb8(0xe2, 0xe8, 0xf0),
            label: Color::from_rgb8(0x0f, 0x17, 0x2a),
        }
    }
}

impl ChartPalette {
    /// Line color. A flat window is drawn with the rising color.
    #[must_use]
    pub fn stroke_for(&self, percent_change: Option<f64>) -> Color {
        if is_falling(percent_change) {
            self.falling_stroke
        } else {
            self.rising_stroke
        }
    }

    #[must_use]
    pub fn fill_for(&self, percent_change: Option<f64>) -> Color {
        if is_falling(percent_change) {
            self.falling_fill
        } else {
            self.rising_fill
        }
    }

    /// Color of the percent-change label.
    #[must_use]
    pub fn label_for(&self, direction: ChangeDirection) -> Color {
        match direction {
            ChangeDirection::Up => self.rising_stroke,
            ChangeDirection::Down => self.falling_stroke,
            ChangeDirection::Flat => self.flat_label,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        for color in [
            self.rising_stroke,
            self.falling_stroke,
            self.rising_fill,
            self.falling_fill,
            self.flat_label,
            self.grid,
            self.label,
        ] {
            color.validate()?;
        }
        Ok(())
    }
}

fn is_falling(percent_change: Option<f64>) -> bool {
    percent_change.is_some_and(|value| value < 0.0)
}

/// Magnitude of the change with two decimals, e.g. `-1.234` -> `1.23%`.
///
/// The sign is carried by `ChangeDirection`, not by the label.
#[must_use]
pub fn format_percent_change(percent_change: f64) -> String {
    format!("{:.2}%", percent_change.abs())
}

/// Dollar amount with two decimals, e.g. `187.5` -> `$187.50`.
#[must_use]
pub fn format_price(price: f64) -> String {
    if price < 0.0 {
        format!("-${:.2}", price.abs())
    } else {
        format!("${price:.2}")
    }
}
