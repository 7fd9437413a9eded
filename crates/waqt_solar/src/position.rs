//! Apparent solar declination and equation of time.
//!
//! Low-precision almanac model, good to about 0.01 deg in solar position
//! for dates within a couple of centuries of J2000.0.
//!
//! Source: U.S. Naval Observatory, "Approximate Solar Coordinates"
//! (Astronomical Almanac, section C). Public domain.

use waqt_math::{darcsin, darctan2, dcos, dsin, fix_angle, fix_hour, wrap};
use waqt_time::J2000_JD;

/// Sun position quantities needed for rise/set and transit times.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarPosition {
    /// Apparent declination in degrees, range [-23.44, 23.44].
    pub declination_deg: f64,
    /// Equation of time in hours (apparent minus mean solar time), range [-12, 12).
    pub equation_of_time_h: f64,
    /// Apparent right ascension in hours, range [0, 24).
    pub right_ascension_h: f64,
}

/// Compute the Sun's apparent position at a Julian Date.
///
/// # Arguments
/// * `jd`: Julian Date (UT is adequate at this precision)
///
/// # Returns
/// Declination, equation of time and right ascension. The equation of time
/// is `q/15 - RA` reduced into [-12, 12) so that it stays continuous when the
/// mean longitude wraps through 0 deg. The reduction only shows in the raw
/// value (as printed by `waqt sun`); transit times go through `fix_hour` and
/// come out the same either way.
pub fn sun_position(jd: f64) -> SolarPosition {
    let d = jd - J2000_JD;

    // Mean anomaly and mean longitude
    let g = fix_angle(357.529 + 0.985_600_28 * d);
    let q = fix_angle(280.459 + 0.985_647_36 * d);
    // Apparent ecliptic longitude
    let l = fix_angle(q + 1.915 * dsin(g) + 0.020 * dsin(2.0 * g));
    // Obliquity of the ecliptic
    let e = 23.439 - 0.000_000_36 * d;

    let ra = fix_hour(darctan2(dcos(e) * dsin(l), dcos(l)) / 15.0);
    let dec = darcsin(dsin(e) * dsin(l));
    let eqt = wrap(q / 15.0 - ra, -12.0, 12.0);

    SolarPosition {
        declination_deg: dec,
        equation_of_time_h: eqt,
        right_ascension_h: ra,
    }
}

/// Solar declination in degrees at a Julian Date.
pub fn sun_declination(jd: f64) -> f64 {
    sun_position(jd).declination_deg
}

/// Equation of time in hours at a Julian Date.
pub fn equation_of_time(jd: f64) -> f64 {
    sun_position(jd).equation_of_time_h
}
