//! Longitude-adjusted Julian Date of a calendar day.
//!
//! Day-fraction estimates produced by the prayer-time solver are measured in
//! local mean time at the observer's meridian. Shifting the 0h UT Julian
//! Date by `longitude / 360` days once per (date, longitude) lets every
//! later solar query be a plain `jd + day_fraction`.

use waqt_time::{CalendarDate, local_mean_jd};

use crate::position::{SolarPosition, sun_position};

/// Julian Date of local mean midnight for a (date, longitude) pair.
///
/// A pure value: build a new one whenever the date or the longitude changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalJulianDay {
    jd: f64,
}

impl LocalJulianDay {
    /// Derive the local-mean-time Julian Date for `date` at `longitude_deg`.
    pub fn new(date: CalendarDate, longitude_deg: f64) -> Self {
        Self {
            jd: local_mean_jd(date.to_jd(), longitude_deg),
        }
    }

    pub fn jd(&self) -> f64 {
        self.jd
    }

    /// Solar position `day_fraction` days after local mean midnight.
    pub fn position_at(&self, day_fraction: f64) -> SolarPosition {
        sun_position(self.jd + day_fraction)
    }
}
