use serde::{Deserialize, Serialize};

use crate::core::PriceSeries;
use crate::error::{ChartError, ChartResult};

/// Payload returned by `GET /api/v1/stock/{ticker}/price-history`.
///
/// Every field is optional on the wire. Missing `prices` means nothing to
/// draw, not an error. Unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceHistory {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prices: Option<Vec<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percent_change: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_price: Option<f64>,
}

impl PriceHistory {
    #[must_use]
    pub fn new(prices: Vec<f64>) -> Self {
        Self {
            prices: Some(prices),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_percent_change(mut self, percent_change: f64) -> Self {
        self.percent_change = Some(percent_change);
        self
    }

    #[must_use]
    pub fn with_current_price(mut self, current_price: f64) -> Self {
        self.current_price = Some(current_price);
        self
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse price history payload: {e}"))
        })
    }

    pub fn to_json_string(&self) -> ChartResult<String> {
        serde_json::to_string(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize price history payload: {e}"))
        })
    }

    /// Validated price series; empty when the payload carries no prices.
    pub fn to_series(&self) -> ChartResult<PriceSeries> {
        match &self.prices {
            Some(prices) => PriceSeries::new(prices.clone()),
            None => Ok(PriceSeries::empty()),
        }
    }

    /// Reported percent change, falling back to first-to-last change of `prices`.
    #[must_use]
    pub fn effective_percent_change(&self) -> Option<f64> {
        self.percent_change
            .filter(|value| value.is_finite())
            .or_else(|| {
                self.to_series()
                    .ok()
                    .and_then(|series| series.percent_change())
            })
    }

    /// Reported current price, falling back to the last sample.
    #[must_use]
    pub fn effective_current_price(&self) -> Option<f64> {
        self.current_price.filter(|value| value.is_finite()).or_else(|| {
            self.prices
                .as_deref()
                .and_then(|prices| prices.last().copied())
                .filter(|value| value.is_finite())
        })
    }
}
