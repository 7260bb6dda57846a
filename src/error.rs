use thiserror::Error;

use crate::core::AxisRangeKind;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid plot dimensions: width={width}, height={height}")]
    InvalidDimensions { width: f64, height: f64 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("degenerate axis range baseline [{start}, {end}] must have non-zero width")]
    DegenerateRange { start: f64, end: f64 },

    #[error("axis `{axis_id}` has kind {actual}, but {context} requires kind {expected}")]
    AxisKindMismatch {
        axis_id: String,
        expected: AxisRangeKind,
        actual: AxisRangeKind,
        context: String,
    },

    #[error("`{operation}` is not supported by {kind} axis ranges")]
    UnsupportedRangeOperation {
        operation: &'static str,
        kind: AxisRangeKind,
    },
}
