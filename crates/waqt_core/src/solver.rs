//! Solar angle-time solver.
//!
//! Finds the local-mean clock time at which the Sun's centre stands a given
//! angle below the horizon, on one side of solar noon. Each query evaluates
//! the solar position at a day-fraction estimate; the pipeline refines the
//! estimate by feeding each answer back in.
//!
//! All results are fractional hours of local mean time at the observer's
//! meridian, before any timezone adjustment. An event that never occurs on
//! the day (the Sun never reaches the angle) is NaN.

use tracing::trace;
use waqt_math::{darccos, darccot, dcos, dsin, dtan, fix_hour};
use waqt_solar::LocalJulianDay;

/// Atmospheric refraction plus solar semidiameter at the horizon, degrees.
const HORIZON_DIP_DEG: f64 = 0.833;

/// Which half of the day an event falls in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoonSide {
    /// Morning: noon minus the hour angle.
    Before,
    /// Evening: noon plus the hour angle.
    After,
}

/// Depression angle of sunrise and sunset for an observer at `elevation_m`
/// meters above sea level.
///
/// `0.833 + 0.0347 * sqrt(elevation)`; negative elevations count as 0.
pub fn rise_set_angle(elevation_m: f64) -> f64 {
    HORIZON_DIP_DEG + 0.0347 * elevation_m.max(0.0).sqrt()
}

/// Angle-time solver for one (date, longitude, latitude).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunAngleSolver {
    day: LocalJulianDay,
    latitude: f64,
}

impl SunAngleSolver {
    pub fn new(day: LocalJulianDay, latitude_deg: f64) -> Self {
        Self {
            day,
            latitude: latitude_deg,
        }
    }

    /// Solar transit time in hours, evaluated at day fraction `t`.
    pub fn mid_day(&self, t: f64) -> f64 {
        let eqt = self.day.position_at(t).equation_of_time_h;
        fix_hour(12.0 - eqt)
    }

    /// Time at which the Sun is `angle_deg` below the horizon.
    ///
    /// Positive angles are depressions; a negative angle asks for an
    /// altitude above the horizon. Returns NaN when the Sun never reaches
    /// the angle on this side of noon.
    pub fn sun_angle_time(&self, angle_deg: f64, t: f64, side: NoonSide) -> f64 {
        let decl = self.day.position_at(t).declination_deg;
        let noon = self.mid_day(t);
        let cos_h = (-dsin(angle_deg) - dsin(decl) * dsin(self.latitude))
            / (dcos(decl) * dcos(self.latitude));
        let hour_angle = darccos(cos_h) / 15.0;
        let time = match side {
            NoonSide::Before => noon - hour_angle,
            NoonSide::After => noon + hour_angle,
        };
        trace!(angle_deg, t, decl, cos_h, time, "sun angle time");
        time
    }

    /// Afternoon time at which an object's shadow exceeds its noon shadow
    /// by `shadow_factor` times its height.
    pub fn asr_time(&self, shadow_factor: f64, t: f64) -> f64 {
        let decl = self.day.position_at(t).declination_deg;
        let angle = -darccot(shadow_factor + dtan((self.latitude - decl).abs()));
        self.sun_angle_time(angle, t, NoonSide::After)
    }
}
