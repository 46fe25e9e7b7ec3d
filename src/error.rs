use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error(
        "invalid canvas layout: width={width}, height={height}, margin_top={margin_top}, margin_bottom={margin_bottom}"
    )]
    InvalidCanvas {
        width: f64,
        height: f64,
        margin_top: f64,
        margin_bottom: f64,
    },

    #[error("non-finite price at index {index}: {value}")]
    NonFinitePrice { index: usize, value: f64 },

    #[error("invalid ticker `{0}`")]
    InvalidTicker(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
