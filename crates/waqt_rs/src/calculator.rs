//! A reusable calculator holding location, date and settings.

use tracing::debug;
use waqt_config::{ConfigError, WaqtConfig};
use waqt_core::{Coordinate, DayTimes, PrayerSettings, compute_day_times};
use waqt_time::{CalendarDate, system_utc_offset_hours};

/// Prayer-time calculator with an optional observer location.
///
/// The date and UTC offset default to the host's current date and zone
/// when not set. Without a coordinate there is nothing to compute and
/// [`prayer_times`](Self::prayer_times) returns `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PrayerCalculator {
    coordinate: Option<Coordinate>,
    date: Option<CalendarDate>,
    utc_offset_hours: Option<f64>,
    settings: PrayerSettings,
}

impl PrayerCalculator {
    pub fn new(settings: PrayerSettings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    /// Build from a loaded configuration document.
    pub fn from_config(config: &WaqtConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            coordinate: config.coordinate()?,
            date: None,
            utc_offset_hours: config.location.utc_offset_hours,
            settings: config.settings(),
        })
    }

    pub fn with_coordinate(mut self, coordinate: Coordinate) -> Self {
        self.coordinate = Some(coordinate);
        self
    }

    pub fn with_date(mut self, date: CalendarDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn with_utc_offset(mut self, hours: f64) -> Self {
        self.utc_offset_hours = Some(hours);
        self
    }

    pub fn set_coordinate(&mut self, coordinate: Option<Coordinate>) {
        self.coordinate = coordinate;
    }

    pub fn coordinate(&self) -> Option<&Coordinate> {
        self.coordinate.as_ref()
    }

    pub fn settings(&self) -> &PrayerSettings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut PrayerSettings {
        &mut self.settings
    }

    /// Date used for the next computation.
    pub fn date(&self) -> CalendarDate {
        self.date.unwrap_or_else(CalendarDate::today)
    }

    /// UTC offset used for the next computation.
    pub fn utc_offset_hours(&self) -> f64 {
        self.utc_offset_hours.unwrap_or_else(system_utc_offset_hours)
    }

    /// Times for the configured (or current) date, or `None` without a
    /// coordinate.
    pub fn prayer_times(&self) -> Option<DayTimes> {
        self.times_for(self.date())
    }

    /// Times for an explicit date, or `None` without a coordinate.
    pub fn times_for(&self, date: CalendarDate) -> Option<DayTimes> {
        let Some(coordinate) = self.coordinate.as_ref() else {
            debug!("no coordinate set, nothing to compute");
            return None;
        };
        Some(compute_day_times(date, coordinate, self.utc_offset_hours(), &self.settings))
    }
}
