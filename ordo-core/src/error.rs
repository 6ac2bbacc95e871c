//! Error types for the ordo ecosystem.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors that can occur in ordo operations.
#[derive(Error, Debug)]
pub enum OrdoError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid date '{0}'. Expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Year {0} is outside the supported range ({1}-{2})")]
    YearOutOfRange(i32, i32, i32),

    #[error("Invalid month {0}. Expected 1-12")]
    InvalidMonth(u32),

    #[error("Unknown liturgical season '{0}'")]
    UnknownSeason(String),

    #[error("No calendar data for date {0}")]
    DateNotFound(NaiveDate),

    #[error("Cache error: {0}")]
    Cache(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for ordo operations.
pub type OrdoResult<T> = Result<T, OrdoError>;
