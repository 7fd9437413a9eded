//! Error types for configuration loading.

use waqt_core::WaqtError;

pub type Result<T, E = ConfigError> = std::result::Result<T, E>;

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum ConfigError {
    /// File, environment or deserialization failure from the `config` crate.
    #[error("config error: {0}")]
    Load(#[from] config::ConfigError),
    /// A value parsed but is out of range.
    #[error("invalid configuration: {0}")]
    Invalid(#[from] WaqtError),
    /// Only one of latitude and longitude was given.
    #[error("location needs both latitude and longitude")]
    IncompleteLocation,
}
