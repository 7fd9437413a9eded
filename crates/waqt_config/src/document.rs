//! The configuration document and its conversion into engine values.
//!
//! ```toml
//! [location]
//! latitude = 23.810332
//! longitude = 90.4125181
//! utc_offset_hours = 6
//!
//! [calculation]
//! method = "karachi"
//! asr = "hanafi"
//! high_latitude = "angle-based"
//! isha = { minutes = 90 }
//!
//! [offsets]
//! maghrib = 3
//! ```
//!
//! Every field is optional. Parameter overrides (`fajr_angle`, `maghrib`,
//! `isha`, `midnight`) go through the copy-into-custom setters of
//! [`PrayerSettings`], so any override makes the active method `custom`.

use serde::{Deserialize, Serialize};
use waqt_core::{
    AngleOrMinutes, AsrJuristic, CalculationMethod, Coordinate, HighLatitudeAdjustment,
    MidnightMethod, Offsets, PrayerName, PrayerSettings,
};

use crate::error::{ConfigError, Result};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaqtConfig {
    pub location: LocationConfig,
    pub calculation: CalculationConfig,
    pub offsets: OffsetsConfig,
}

/// `[location]`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocationConfig {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// Meters above sea level.
    pub elevation: Option<f64>,
    /// Civil offset from UTC in hours; the host zone when absent.
    pub utc_offset_hours: Option<f64>,
}

/// `[calculation]`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculationConfig {
    pub method: Option<CalculationMethod>,
    pub asr: Option<AsrJuristic>,
    pub high_latitude: Option<HighLatitudeAdjustment>,
    pub midnight: Option<MidnightMethod>,
    pub fajr_angle: Option<f64>,
    pub maghrib: Option<AngleOrMinutes>,
    pub isha: Option<AngleOrMinutes>,
    pub imsak: Option<AngleOrMinutes>,
    pub dhuhr_minutes: Option<f64>,
    pub iterations: Option<u32>,
}

/// `[offsets]`, minutes per event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OffsetsConfig {
    pub imsak: f64,
    pub fajr: f64,
    pub sunrise: f64,
    pub dhuhr: f64,
    pub asr: f64,
    pub sunset: f64,
    pub maghrib: f64,
    pub isha: f64,
    pub midnight: f64,
    pub qiyam: f64,
}

impl OffsetsConfig {
    pub fn to_offsets(&self) -> Offsets {
        Offsets::default()
            .with(PrayerName::Imsak, self.imsak)
            .with(PrayerName::Fajr, self.fajr)
            .with(PrayerName::Sunrise, self.sunrise)
            .with(PrayerName::Dhuhr, self.dhuhr)
            .with(PrayerName::Asr, self.asr)
            .with(PrayerName::Sunset, self.sunset)
            .with(PrayerName::Maghrib, self.maghrib)
            .with(PrayerName::Isha, self.isha)
            .with(PrayerName::Midnight, self.midnight)
            .with(PrayerName::Qiyam, self.qiyam)
    }
}

impl CalculationConfig {
    /// Apply this section on top of `base`.
    pub fn apply(&self, base: PrayerSettings) -> PrayerSettings {
        let mut s = base;
        if let Some(m) = self.method {
            s = s.with_method(m);
        }
        if let Some(asr) = self.asr {
            s = s.with_asr(asr);
        }
        if let Some(mode) = self.high_latitude {
            s = s.with_high_latitude(mode);
        }
        if let Some(imsak) = self.imsak {
            s = s.with_imsak(imsak);
        }
        if let Some(m) = self.dhuhr_minutes {
            s = s.with_dhuhr_minutes(m);
        }
        if let Some(n) = self.iterations {
            s = s.with_iterations(n);
        }
        if let Some(a) = self.fajr_angle {
            s = s.with_fajr_angle(a);
        }
        s = match self.maghrib {
            Some(AngleOrMinutes::Angle(a)) => s.with_maghrib_angle(a),
            Some(AngleOrMinutes::Minutes(m)) => s.with_maghrib_minutes(m),
            None => s,
        };
        s = match self.isha {
            Some(AngleOrMinutes::Angle(a)) => s.with_isha_angle(a),
            Some(AngleOrMinutes::Minutes(m)) => s.with_isha_minutes(m),
            None => s,
        };
        if let Some(mid) = self.midnight {
            s = s.with_midnight_method(mid);
        }
        s
    }
}

impl WaqtConfig {
    /// Engine settings described by `[calculation]` and `[offsets]`.
    pub fn settings(&self) -> PrayerSettings {
        let mut s = self.calculation.apply(PrayerSettings::default());
        s.offsets = self.offsets.to_offsets();
        s
    }

    /// Observer location, or `None` when no coordinate is configured.
    pub fn coordinate(&self) -> Result<Option<Coordinate>> {
        let loc = &self.location;
        match (loc.latitude, loc.longitude) {
            (None, None) => Ok(None),
            (Some(lat), Some(lng)) => {
                let c = Coordinate::validated(lat, lng, loc.elevation.unwrap_or(0.0))?;
                Ok(Some(c))
            }
            _ => Err(ConfigError::IncompleteLocation),
        }
    }
}
