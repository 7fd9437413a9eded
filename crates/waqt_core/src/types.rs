//! Types for prayer-time calculations.
//!
//! Provides the observer coordinate, the fixed set of prayer events, the
//! computed clock value, and the angle-or-minutes rule used by imsak,
//! maghrib and isha.

use std::cmp::Ordering;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use waqt_math::fix_hour;

use crate::error::WaqtError;

/// Geographic location on Earth's surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Geodetic latitude in degrees, north positive. Range: [-90, 90].
    pub latitude: f64,
    /// Geodetic longitude in degrees, east positive. Range: [-180, 180].
    pub longitude: f64,
    /// Height above mean sea level in meters.
    #[serde(default)]
    pub elevation: f64,
}

impl Coordinate {
    /// Create a sea-level coordinate without range checks.
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            elevation: 0.0,
        }
    }

    /// The same location at `meters` above sea level.
    pub const fn with_elevation(mut self, meters: f64) -> Self {
        self.elevation = meters;
        self
    }

    /// Create a coordinate, rejecting values outside their physical ranges.
    pub fn validated(latitude: f64, longitude: f64, elevation: f64) -> Result<Self, WaqtError> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(WaqtError::InvalidCoordinate("latitude must be within [-90, 90]"));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(WaqtError::InvalidCoordinate("longitude must be within [-180, 180]"));
        }
        if !(elevation >= 0.0 && elevation.is_finite()) {
            return Err(WaqtError::InvalidCoordinate("elevation must be a finite value >= 0"));
        }
        Ok(Self::new(latitude, longitude).with_elevation(elevation))
    }
}

/// The daily prayer events, in canonical display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrayerName {
    /// Pre-dawn caution time, shortly before fajr.
    Imsak,
    /// Dawn twilight onset.
    Fajr,
    Sunrise,
    /// Solar transit.
    Dhuhr,
    /// Afternoon shadow-length event.
    Asr,
    Sunset,
    Maghrib,
    /// Night onset.
    Isha,
    /// Midpoint of the night.
    Midnight,
    /// Two-thirds point of the night.
    Qiyam,
}

/// All prayer events in canonical display order (index 0 = Imsak).
pub const ALL_PRAYERS: [PrayerName; 10] = [
    PrayerName::Imsak,
    PrayerName::Fajr,
    PrayerName::Sunrise,
    PrayerName::Dhuhr,
    PrayerName::Asr,
    PrayerName::Sunset,
    PrayerName::Maghrib,
    PrayerName::Isha,
    PrayerName::Midnight,
    PrayerName::Qiyam,
];

impl PrayerName {
    /// 0-based position in [`ALL_PRAYERS`].
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Lowercase identifier, as used in configuration files.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Imsak => "imsak",
            Self::Fajr => "fajr",
            Self::Sunrise => "sunrise",
            Self::Dhuhr => "dhuhr",
            Self::Asr => "asr",
            Self::Sunset => "sunset",
            Self::Maghrib => "maghrib",
            Self::Isha => "isha",
            Self::Midnight => "midnight",
            Self::Qiyam => "qiyam",
        }
    }

    /// Capitalized name for display.
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Imsak => "Imsak",
            Self::Fajr => "Fajr",
            Self::Sunrise => "Sunrise",
            Self::Dhuhr => "Dhuhr",
            Self::Asr => "Asr",
            Self::Sunset => "Sunset",
            Self::Maghrib => "Maghrib",
            Self::Isha => "Isha",
            Self::Midnight => "Midnight",
            Self::Qiyam => "Qiyam",
        }
    }
}

impl FromStr for PrayerName {
    type Err = WaqtError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        ALL_PRAYERS
            .into_iter()
            .find(|p| p.name() == lower)
            .ok_or_else(|| WaqtError::UnknownName {
                kind: "prayer",
                value: s.to_string(),
                expected: "imsak, fajr, sunrise, dhuhr, asr, sunset, maghrib, isha, midnight, qiyam",
            })
    }
}

/// Either a solar depression angle or a fixed offset in minutes from a
/// reference event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AngleOrMinutes {
    /// Sun `n` degrees below the horizon.
    Angle(f64),
    /// `n` minutes from the reference event.
    Minutes(f64),
}

/// Number of minutes added before truncating, so that hour/minute
/// decomposition rounds to the nearest minute.
const HALF_MINUTE_H: f64 = 0.5 / 60.0;

/// A time of day as fractional hours in [0, 24).
///
/// Built from a raw computed value with [`ComputedTime::from_duration`],
/// which adds half a minute before wrapping so that [`hours`](Self::hours)
/// and [`minutes`](Self::minutes) round to the nearest minute. Equality and
/// ordering follow the stored duration.
#[derive(Debug, Clone, Copy)]
pub struct ComputedTime {
    duration: f64,
}

impl ComputedTime {
    /// Round and normalize a raw fractional-hour value.
    ///
    /// Returns `None` for NaN or infinite input, i.e. an event that does not
    /// occur.
    pub fn from_duration(hours: f64) -> Option<Self> {
        if !hours.is_finite() {
            return None;
        }
        Some(Self {
            duration: fix_hour(hours + HALF_MINUTE_H),
        })
    }

    /// Build from whole hours and minutes (no rounding).
    pub fn from_hours_minutes(hours: i32, minutes: i32) -> Self {
        Self {
            duration: fix_hour(hours as f64 + minutes as f64 / 60.0),
        }
    }

    /// Fractional hours in [0, 24).
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Minutes since midnight, 0-1439.
    ///
    /// Whole-minute values such as `18 + 5/60` are not exact in binary, so
    /// a micro-minute of slack keeps them from flooring to the minute before.
    fn total_minutes(&self) -> u32 {
        ((self.duration * 60.0 + 1e-6).floor() as u32).min(24 * 60 - 1)
    }

    /// Whole hours, 0-23.
    pub fn hours(&self) -> u32 {
        self.total_minutes() / 60
    }

    /// Whole minutes past the hour, 0-59.
    pub fn minutes(&self) -> u32 {
        self.total_minutes() % 60
    }

    /// The same clock reading expressed relative to the previous day.
    pub fn previous_day_duration(&self) -> f64 {
        self.duration - 24.0
    }

    /// The same clock reading expressed relative to the next day.
    pub fn next_day_duration(&self) -> f64 {
        self.duration + 24.0
    }
}

impl PartialEq for ComputedTime {
    fn eq(&self, other: &Self) -> bool {
        self.duration == other.duration
    }
}

impl Eq for ComputedTime {}

impl PartialOrd for ComputedTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ComputedTime {
    fn cmp(&self, other: &Self) -> Ordering {
        // Always finite, so total_cmp agrees with numeric order.
        self.duration.total_cmp(&other.duration)
    }
}
