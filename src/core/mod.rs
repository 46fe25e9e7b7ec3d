pub mod geometry;
pub mod price_series;
pub mod primitives;
pub mod scale;
pub mod timeframe;
pub mod types;

pub use geometry::{ChartGeometry, build_area_path, build_line_path};
pub use price_series::PriceSeries;
pub use scale::{IndexScale, PriceScale};
pub use timeframe::Timeframe;
pub use types::{CanvasLayout, ChartPoint};
