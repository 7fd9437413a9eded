//! Prayer-time engine.
//!
//! This crate provides:
//! - The observer [`Coordinate`], the ten [`PrayerName`] events and the
//!   rounded [`ComputedTime`] clock value
//! - The solar angle-time solver, including the Asr shadow solution
//! - The regional calculation conventions and [`PrayerSettings`]
//! - The high-latitude correction
//! - [`compute_day_times`], the full day pipeline
//!
//! Events that never occur at a location (the Sun does not reach the
//! required angle) are reported as absent, never as errors.

pub mod error;
pub mod high_latitude;
pub mod method;
pub mod pipeline;
pub mod settings;
pub mod solver;
pub mod types;

pub use error::WaqtError;
pub use high_latitude::{
    ALL_HIGH_LATITUDE_ADJUSTMENTS, HighLatitudeAdjustment, adjust_high_latitude,
};
pub use method::{
    ALL_METHODS, AsrJuristic, CalculationMethod, MethodParameters, MidnightMethod,
};
pub use pipeline::{DayTimes, compute_day_times};
pub use settings::{Offsets, PrayerSettings};
pub use solver::{NoonSide, SunAngleSolver, rise_set_angle};
pub use types::{ALL_PRAYERS, AngleOrMinutes, ComputedTime, Coordinate, PrayerName};
