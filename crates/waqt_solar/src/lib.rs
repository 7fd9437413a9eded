//! Solar position model for prayer-time computation.
//!
//! Provides the Sun's apparent declination and the equation of time from a
//! Julian Date, plus [`LocalJulianDay`], the longitude-adjusted day anchor
//! that the angle-time solver evaluates day fractions against.

pub mod local_day;
pub mod position;

pub use local_day::LocalJulianDay;
pub use position::{SolarPosition, equation_of_time, sun_declination, sun_position};
