//! Error types for calendar parsing and validation.

/// Errors from calendar date parsing or validation.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// Text could not be read as a `YYYY-MM-DD` date.
    #[error("invalid date '{input}': {reason}")]
    Parse { input: String, reason: String },
    /// Components do not name a real Gregorian day.
    #[error("invalid calendar date {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },
}
