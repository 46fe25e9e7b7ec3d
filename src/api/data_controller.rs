use tracing::{debug, warn};

use crate::core::{ChartGeometry, PriceSeries};
use crate::error::ChartResult;
use crate::render::Renderer;

use super::{PriceChart, PriceHistory};

impl<R: Renderer> PriceChart<R> {
    /// Replaces the displayed snapshot with a price-history payload.
    ///
    /// On a rejected payload the previous snapshot is left untouched.
    pub fn set_history(&mut self, history: &PriceHistory) -> ChartResult<()> {
        let series = match history.to_series() {
            Ok(series) => series,
            Err(err) => {
                warn!(error = %err, "rejecting price history payload");
                return Err(err);
            }
        };
        let percent_change = history.effective_percent_change();
        let current_price = history.effective_current_price();
        self.replace_snapshot(series, percent_change, current_price);
        Ok(())
    }

    /// Replaces the displayed snapshot with a bare series.
    ///
    /// Percent change and current price are derived from the series.
    pub fn set_series(&mut self, series: PriceSeries) {
        let percent_change = series.percent_change();
        let current_price = series.last();
        self.replace_snapshot(series, percent_change, current_price);
    }

    pub fn set_prices(&mut self, prices: Vec<f64>) -> ChartResult<()> {
        let series = PriceSeries::new(prices)?;
        self.set_series(series);
        Ok(())
    }

    /// Drops the current snapshot, e.g. after a failed fetch.
    pub fn clear(&mut self) {
        debug!("clear price snapshot");
        self.replace_snapshot(PriceSeries::empty(), None, None);
    }

    fn replace_snapshot(
        &mut self,
        series: PriceSeries,
        percent_change: Option<f64>,
        current_price: Option<f64>,
    ) {
        debug!(
            count = series.len(),
            percent_change, current_price, "replace price snapshot"
        );
        self.geometry = ChartGeometry::from_series(&series, self.config.canvas);
        self.series = series;
        self.percent_change = percent_change;
        self.current_price = current_price;
    }
}
