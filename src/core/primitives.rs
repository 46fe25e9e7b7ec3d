use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{ChartError, ChartResult};

pub fn decimal_to_f64(value: Decimal, field_name: &str) -> ChartResult<f64> {
    value.to_f64().ok_or_else(|| {
        ChartError::InvalidData(format!("{field_name} cannot be represented as f64"))
    })
}

/// Returns the index and value of the first non-finite entry, if any.
#[must_use]
pub fn first_non_finite(values: &[f64]) -> Option<(usize, f64)> {
    values
        .iter()
        .copied()
        .enumerate()
        .find(|(_, value)| !value.is_finite())
}

pub fn ensure_finite_prices(prices: &[f64]) -> ChartResult<()> {
    match first_non_finite(prices) {
        Some((index, value)) => Err(ChartError::NonFinitePrice { index, value }),
        None => Ok(()),
    }
}
