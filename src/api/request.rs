use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::Timeframe;
use crate::error::{ChartError, ChartResult};

const MAX_TICKER_LEN: usize = 10;

/// Normalized ticker symbol (upper-case, e.g. `AAPL`, `BRK.B`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Ticker(String);

impl Ticker {
    /// Trims and upper-cases `input`.
    ///
    /// Accepts 1 to 10 ASCII letters, digits, `.` or `-`, starting with a
    /// letter.
    pub fn parse(input: &str) -> ChartResult<Self> {
        let symbol = input.trim().to_ascii_uppercase();
        let mut chars = symbol.chars();
        let starts_with_letter = chars.next().is_some_and(|ch| ch.is_ascii_alphabetic());
        let valid_rest = chars.all(|ch| ch.is_ascii_alphanumeric() || ch == '.' || ch == '-');
        if !starts_with_letter || !valid_rest || symbol.len() > MAX_TICKER_LEN {
            return Err(ChartError::InvalidTicker(input.to_owned()));
        }
        Ok(Self(symbol))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Ticker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Ticker {
    type Err = ChartError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::parse(input)
    }
}

impl TryFrom<String> for Ticker {
    type Error = ChartError;

    fn try_from(input: String) -> ChartResult<Self> {
        Self::parse(&input)
    }
}

impl From<Ticker> for String {
    fn from(ticker: Ticker) -> Self {
        ticker.0
    }
}

/// Request description for the price-history endpoint.
///
/// The host performs the actual HTTP call; this type only owns the path and
/// query shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceHistoryRequest {
    pub ticker: Ticker,
    #[serde(default)]
    pub timeframe: Timeframe,
}

impl PriceHistoryRequest {
    pub const PATH_PREFIX: &'static str = "/api/v1/stock";

    #[must_use]
    pub fn new(ticker: Ticker, timeframe: Timeframe) -> Self {
        Self { ticker, timeframe }
    }

    #[must_use]
    pub fn path(&self) -> String {
        format!("{}/{}/price-history", Self::PATH_PREFIX, self.ticker)
    }

    #[must_use]
    pub fn query(&self) -> String {
        format!("timeframe={}", self.timeframe)
    }

    /// Path and query joined, relative to the API base URL.
    #[must_use]
    pub fn path_and_query(&self) -> String {
        format!("{}?{}", self.path(), self.query())
    }
}
