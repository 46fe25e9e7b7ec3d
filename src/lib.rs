//! price-chart-rs: price-history chart geometry for stock dashboards.
//!
//! The crate turns a chronological price series into canvas-space line and
//! area geometry, and renders it to SVG. Data fetching stays with the host;
//! this crate only consumes the JSON the price-history endpoint returns.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{PriceChart, PriceChartConfig, PriceHistory};
pub use crate::core::{ChartGeometry, PriceSeries, build_area_path, build_line_path};
pub use error::{ChartError, ChartResult};
