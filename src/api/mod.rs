mod chart_config;
mod data_controller;
mod presentation;
mod price_history;
mod render_frame_builder;
mod request;

pub use chart_config::PriceChartConfig;
pub use presentation::{ChangeDirection, ChartPalette, format_percent_change, format_price};
pub use price_history::PriceHistory;
pub use request::{PriceHistoryRequest, Ticker};

use crate::core::{CanvasLayout, ChartGeometry, PriceSeries};
use crate::error::ChartResult;
use crate::render::Renderer;

/// Price display surface for one ticker.
///
/// Holds only the latest snapshot handed in by the host; each new snapshot
/// replaces the previous one and its geometry is recomputed eagerly.
pub struct PriceChart<R: Renderer> {
    renderer: R,
    config: PriceChartConfig,
    series: PriceSeries,
    percent_change: Option<f64>,
    current_price: Option<f64>,
    geometry: ChartGeometry,
}

impl<R: Renderer> PriceChart<R> {
    pub fn new(renderer: R, config: PriceChartConfig) -> ChartResult<Self> {
        config.validate()?;

        Ok(Self {
            renderer,
            config,
            series: PriceSeries::empty(),
            percent_change: None,
            current_price: None,
            geometry: ChartGeometry::empty(),
        })
    }

    #[must_use]
    pub fn config(&self) -> &PriceChartConfig {
        &self.config
    }

    #[must_use]
    pub fn canvas(&self) -> CanvasLayout {
        self.config.canvas
    }

    #[must_use]
    pub fn series(&self) -> &PriceSeries {
        &self.series
    }

    #[must_use]
    pub fn geometry(&self) -> &ChartGeometry {
        &self.geometry
    }

    #[must_use]
    pub fn percent_change(&self) -> Option<f64> {
        self.percent_change
    }

    #[must_use]
    pub fn current_price(&self) -> Option<f64> {
        self.current_price
    }

    #[must_use]
    pub fn change_direction(&self) -> ChangeDirection {
        ChangeDirection::from_percent_change(self.percent_change)
    }

    #[must_use]
    pub fn has_data(&self) -> bool {
        !self.series.is_empty()
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
