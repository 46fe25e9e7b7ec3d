use std::sync::Arc;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::primitives::{decimal_to_f64, ensure_finite_prices};
use crate::error::ChartResult;

/// Chronologically ordered price samples for one ticker and display window.
///
/// Index order is time order. The samples are validated once on construction
/// and never mutated afterwards, so clones share the same backing buffer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct PriceSeries {
    prices: Arc<[f64]>,
}

impl PriceSeries {
    /// Builds a series, failing on the first non-finite sample.
    pub fn new(prices: Vec<f64>) -> ChartResult<Self> {
        ensure_finite_prices(&prices)?;
        Ok(Self {
            prices: prices.into(),
        })
    }

    #[must_use]
    pub fn empty() -> Self {
        Self {
            prices: Arc::from(Vec::<f64>::new()),
        }
    }

    pub fn from_decimals(prices: &[Decimal]) -> ChartResult<Self> {
        let converted = prices
            .iter()
            .map(|price| decimal_to_f64(*price, "price"))
            .collect::<ChartResult<Vec<_>>>()?;
        Self::new(converted)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.prices
    }

    #[must_use]
    pub fn first(&self) -> Option<f64> {
        self.prices.first().copied()
    }

    #[must_use]
    pub fn last(&self) -> Option<f64> {
        self.prices.last().copied()
    }

    /// Lowest and highest sample, or `None` for an empty series.
    #[must_use]
    pub fn min_max(&self) -> Option<(f64, f64)> {
        min_max(&self.prices)
    }

    /// Percent change from the first to the last sample.
    ///
    /// `None` when there are fewer than two samples or the first one is zero.
    #[must_use]
    pub fn percent_change(&self) -> Option<f64> {
        if self.prices.len() < 2 {
            return None;
        }
        let first = self.first()?;
        let last = self.last()?;
        if first == 0.0 {
            return None;
        }
        Some((last - first) / first * 100.0)
    }
}

impl Default for PriceSeries {
    fn default() -> Self {
        Self::empty()
    }
}

impl TryFrom<Vec<f64>> for PriceSeries {
    type Error = crate::error::ChartError;

    fn try_from(prices: Vec<f64>) -> ChartResult<Self> {
        Self::new(prices)
    }
}

impl From<PriceSeries> for Vec<f64> {
    fn from(series: PriceSeries) -> Self {
        series.prices.to_vec()
    }
}

pub(crate) fn min_max(prices: &[f64]) -> Option<(f64, f64)> {
    let (&first, rest) = prices.split_first()?;
    Some(
        rest.iter()
            .fold((first, first), |(min, max), &price| (min.min(price), max.max(price))),
    )
}
