//! Error types for the signals workspace.

use thiserror::Error;

/// Top-level error for the signals workspace.
#[derive(Error, Debug)]
pub enum SignalsError {
    #[error("Indicator error: {0}")]
    Indicator(#[from] IndicatorError),

    #[error("Data error: {0}")]
    Data(#[from] DataError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Indicator calculation errors.
///
/// Both variants are recoverable conditions: callers translate them into a
/// "no indicator value available" response rather than failing the request.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IndicatorError {
    #[error("Insufficient data: need {required} bars, have {available}")]
    InsufficientData { required: usize, available: usize },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Data source errors.
#[derive(Error, Debug)]
pub enum DataError {
    #[error("No data available at {0}")]
    NoDataAvailable(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Duplicate timestamp: {0}")]
    DuplicateTimestamp(i64),
}

/// Result type alias for signals operations.
pub type SignalsResult<T> = Result<T, SignalsError>;
