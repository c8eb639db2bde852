//! Error types for Internet Time conversion

use thiserror::Error;

/// Core beat errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BeatError {
    #[error("Timestamp is not finite: {0}")]
    NonFiniteTimestamp(f64),

    #[error("Timestamp out of range: {0}")]
    TimestampOutOfRange(String),

    #[error("Detail {detail} out of range: maximum is {max}")]
    DetailOutOfRange { detail: u32, max: u32 },
}

/// Result type for beat operations
pub type BeatResult<T> = Result<T, BeatError>;
