use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("scale bounds must be finite: min={min}, max={max}")]
    NonFiniteScaleBounds { min: f64, max: f64 },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
