//! Convenience wrapper for the waqt prayer-time engine.
//!
//! Re-exports the engine types and adds a [`PrayerCalculator`] that keeps
//! an optional location between calls, plus one-call helpers.
//!
//! # Quick start
//!
//! ```rust
//! use waqt_rs::*;
//!
//! let settings = PrayerSettings::new(CalculationMethod::Karachi).with_asr(AsrJuristic::Hanafi);
//! let times = prayer_times_for_date(2024, 3, 20, 23.810332, 90.4125181, 6.0, &settings);
//! for (name, t) in times.iter() {
//!     println!("{:<8} {:02}:{:02}", name.display_name(), t.hours(), t.minutes());
//! }
//! ```

pub mod calculator;
pub mod convenience;

pub use calculator::PrayerCalculator;
pub use convenience::{prayer_times_for_date, today_times};

// Re-export engine types so callers don't need to depend on waqt_core directly.
pub use waqt_config::{ConfigError, WaqtConfig};
pub use waqt_core::{
    ALL_METHODS, ALL_PRAYERS, AngleOrMinutes, AsrJuristic, CalculationMethod, ComputedTime,
    Coordinate, DayTimes, HighLatitudeAdjustment, MethodParameters, MidnightMethod, Offsets,
    PrayerName, PrayerSettings, WaqtError,
};
pub use waqt_time::{CalendarDate, system_utc_offset_hours};
