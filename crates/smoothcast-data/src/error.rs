//! Data error types.

use smoothcast_core::TsError;
use thiserror::Error;

/// Data source errors.
#[derive(Debug, Error)]
pub enum DataError {
    /// Reading the input failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed CSV
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Required column is absent from the header row
    #[error("Missing column: {0}")]
    MissingColumn(String),

    /// Invalid date format
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// Failed to parse a value or response
    #[error("Parse error: {0}")]
    ParseError(String),

    /// No data returned
    #[error("No data returned")]
    NoData,

    /// Fewer monthly observations than requested
    #[error("Insufficient rows: need {required} months, got {actual}")]
    InsufficientRows { required: usize, actual: usize },

    /// HTTP request failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// API error from data provider
    #[error("API error [{code}]: {description}")]
    ApiError { code: String, description: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Observations do not form a valid monthly series
    #[error(transparent)]
    Series(#[from] TsError),
}

/// Result type for data operations.
pub type Result<T> = std::result::Result<T, DataError>;
