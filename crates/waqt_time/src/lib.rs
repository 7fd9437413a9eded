//! Calendar dates and Julian Day conversion.
//!
//! This crate provides:
//! - [`CalendarDate`], the Gregorian input date of a computation
//! - Julian Date conversion (Meeus) and the local-mean-time shift by longitude
//! - The host's current date and UTC offset, via `jiff`

pub mod calendar;
pub mod error;
pub mod julian;

pub use calendar::{CalendarDate, system_utc_offset_hours};
pub use error::TimeError;
pub use julian::{HOURS_PER_DAY, J2000_JD, calendar_to_jd, local_mean_jd};

/// Julian Date at 0h UT of the host's current local date.
pub fn julian_date_today() -> f64 {
    CalendarDate::today().to_jd()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn today_is_after_2020() {
        let jd = julian_date_today();
        assert!(jd > calendar_to_jd(2020, 1, 1.0), "jd = {jd}");
    }

    #[test]
    fn today_is_a_midnight_jd() {
        let jd = julian_date_today();
        assert!((jd.fract() - 0.5).abs() < 1e-9, "jd = {jd}");
    }
}
