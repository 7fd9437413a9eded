//! Gregorian calendar to Julian Date conversion.
//!
//! Meeus, *Astronomical Algorithms*, ch. 7. January and February are
//! counted as months 13 and 14 of the previous year before applying the
//! polynomial. The formula is defined for any integer input and does not
//! validate calendar legality.

/// Julian Date of the J2000.0 epoch (2000-01-01 12:00 TT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Hours in one day, used when moving between day fractions and clock hours.
pub const HOURS_PER_DAY: f64 = 24.0;

/// Julian Date at the given Gregorian calendar day.
///
/// `day` may carry a fraction of a day; an integer day gives the JD at
/// 0h UT (ending in `.5`).
pub fn calendar_to_jd(year: i32, month: u32, day: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year as f64 - 1.0, month as f64 + 12.0)
    } else {
        (year as f64, month as f64)
    };

    let a = (y / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();

    (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + day + b - 1524.5
}

/// Shift a 0h UT Julian Date onto the local mean time basis of `longitude_deg`.
///
/// `jd - longitude / (15 * 24)`: one hour per 15 deg of longitude, east positive.
pub fn local_mean_jd(jd: f64, longitude_deg: f64) -> f64 {
    jd - longitude_deg / (15.0 * HOURS_PER_DAY)
}
