//! Time series error types

use thiserror::Error;

/// Result type alias for smoothing and forecasting operations
pub type Result<T> = std::result::Result<T, TsError>;

/// Errors that can occur during time series operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TsError {
    /// Malformed series or out-of-range parameter
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Insufficient data points for the operation
    #[error("Insufficient data: need at least {required} points, got {actual}")]
    InsufficientData { required: usize, actual: usize },
}

impl TsError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        TsError::InvalidInput(msg.into())
    }
}
