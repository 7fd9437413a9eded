//! Configuration for the waqt prayer-time engine.
//!
//! A [`WaqtConfig`] is read from an optional TOML file plus `WAQT_`
//! environment variables and converted into the engine's
//! [`PrayerSettings`](waqt_core::PrayerSettings) and
//! [`Coordinate`](waqt_core::Coordinate).

pub mod document;
pub mod error;
pub mod loader;

pub use document::{CalculationConfig, LocationConfig, OffsetsConfig, WaqtConfig};
pub use error::{ConfigError, Result};
pub use loader::DEFAULT_FILE_STEM;
