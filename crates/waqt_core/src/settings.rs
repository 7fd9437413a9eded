//! User-facing calculation settings.
//!
//! [`PrayerSettings`] selects a convention and carries every tunable of the
//! engine. Parameter overrides never touch the fixed convention table: the
//! active parameters are copied into a private custom slot, the override is
//! applied there, and the active convention becomes
//! [`CalculationMethod::Custom`].

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::high_latitude::HighLatitudeAdjustment;
use crate::method::{AsrJuristic, CalculationMethod, MethodParameters, MidnightMethod};
use crate::types::{ALL_PRAYERS, AngleOrMinutes, PrayerName};

/// Per-event minute offsets applied after every other adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Offsets([f64; 10]);

impl Offsets {
    pub fn get(&self, name: PrayerName) -> f64 {
        self.0[name.index()]
    }

    pub fn set(&mut self, name: PrayerName, minutes: f64) {
        self.0[name.index()] = minutes;
    }

    pub fn with(mut self, name: PrayerName, minutes: f64) -> Self {
        self.set(name, minutes);
        self
    }

    /// Iterate `(name, minutes)` in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (PrayerName, f64)> + '_ {
        ALL_PRAYERS.into_iter().map(|p| (p, self.get(p)))
    }
}

/// Configuration for one prayer-time computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrayerSettings {
    method: CalculationMethod,
    custom: MethodParameters,
    /// Asr shadow-length school.
    pub asr: AsrJuristic,
    pub high_latitude: HighLatitudeAdjustment,
    /// Imsak as an angle, or minutes before fajr.
    pub imsak: AngleOrMinutes,
    /// Minutes added to dhuhr after the solar transit.
    pub dhuhr_minutes: f64,
    pub offsets: Offsets,
    /// Refinement passes of the solver; at least 1.
    pub iterations: u32,
}

impl Default for PrayerSettings {
    fn default() -> Self {
        Self::new(CalculationMethod::Mwl)
    }
}

impl PrayerSettings {
    /// Settings for a named convention with all other tunables at defaults.
    pub fn new(method: CalculationMethod) -> Self {
        Self {
            method,
            custom: CalculationMethod::Custom.params(),
            asr: AsrJuristic::Shafii,
            high_latitude: HighLatitudeAdjustment::Midnight,
            imsak: AngleOrMinutes::Minutes(10.0),
            dhuhr_minutes: 0.0,
            offsets: Offsets::default(),
            iterations: 2,
        }
    }

    /// Active convention.
    pub fn method(&self) -> CalculationMethod {
        self.method
    }

    /// Parameters of the active convention.
    pub fn params(&self) -> MethodParameters {
        match self.method {
            CalculationMethod::Custom => self.custom,
            m => m.params(),
        }
    }

    /// Select a convention. Selecting `Custom` keeps the current custom slot.
    pub fn with_method(mut self, method: CalculationMethod) -> Self {
        self.method = method;
        self
    }

    fn customize(mut self, edit: impl FnOnce(&mut MethodParameters)) -> Self {
        let mut params = self.params();
        edit(&mut params);
        if self.method != CalculationMethod::Custom {
            debug!(
                from = self.method.name(),
                "parameter override, switching to custom"
            );
        }
        self.custom = params;
        self.method = CalculationMethod::Custom;
        self
    }

    pub fn with_fajr_angle(self, angle: f64) -> Self {
        self.customize(|p| p.fajr_angle = angle)
    }

    pub fn with_maghrib_angle(self, angle: f64) -> Self {
        self.customize(|p| p.maghrib = AngleOrMinutes::Angle(angle))
    }

    pub fn with_maghrib_minutes(self, minutes: f64) -> Self {
        self.customize(|p| p.maghrib = AngleOrMinutes::Minutes(minutes))
    }

    pub fn with_isha_angle(self, angle: f64) -> Self {
        self.customize(|p| p.isha = AngleOrMinutes::Angle(angle))
    }

    pub fn with_isha_minutes(self, minutes: f64) -> Self {
        self.customize(|p| p.isha = AngleOrMinutes::Minutes(minutes))
    }

    pub fn with_midnight_method(self, midnight: MidnightMethod) -> Self {
        self.customize(|p| p.midnight = midnight)
    }

    pub fn with_asr(mut self, asr: AsrJuristic) -> Self {
        self.asr = asr;
        self
    }

    pub fn with_high_latitude(mut self, mode: HighLatitudeAdjustment) -> Self {
        self.high_latitude = mode;
        self
    }

    pub fn with_imsak(mut self, imsak: AngleOrMinutes) -> Self {
        self.imsak = imsak;
        self
    }

    pub fn with_dhuhr_minutes(mut self, minutes: f64) -> Self {
        self.dhuhr_minutes = minutes;
        self
    }

    pub fn with_offset(mut self, name: PrayerName, minutes: f64) -> Self {
        self.offsets.set(name, minutes);
        self
    }

    /// Set the solver pass count; values below 1 are raised to 1.
    pub fn with_iterations(mut self, iterations: u32) -> Self {
        self.iterations = iterations.max(1);
        self
    }
}
