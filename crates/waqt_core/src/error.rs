//! Error types for the prayer-time engine.
//!
//! Astronomical "never occurs" results are not errors; they surface as
//! absent times. These variants cover malformed input at the outer surfaces.

/// Errors from parsing convention names or validating inputs.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum WaqtError {
    /// A convention, juristic or adjustment name was not recognised.
    #[error("unknown {kind} '{value}' (expected one of: {expected})")]
    UnknownName {
        kind: &'static str,
        value: String,
        expected: &'static str,
    },
    /// Invalid geographic coordinate parameter.
    #[error("invalid coordinate: {0}")]
    InvalidCoordinate(&'static str),
}
