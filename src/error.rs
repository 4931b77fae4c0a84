//! Error types for prayer time computation and calendar export.

use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PrayerError {
    #[error("Invalid date range: end {end} is before start {start}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    #[error("Invalid coordinate: {0}")]
    InvalidCoordinate(String),

    #[error("Unknown calculation method: {0}")]
    UnknownMethod(String),

    #[error("Invalid duration: {0}")]
    InvalidDuration(String),

    #[error("Invalid time '{0}', expected HH:MM")]
    TimeParse(String),

    #[error("Invalid {field}: expected {expected}")]
    InputFormat { field: String, expected: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl PrayerError {
    pub fn input_format(field: impl Into<String>, expected: impl Into<String>) -> Self {
        Self::InputFormat {
            field: field.into(),
            expected: expected.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PrayerError>;
