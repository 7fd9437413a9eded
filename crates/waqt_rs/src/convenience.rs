//! One-call entry points that take plain numbers.

use waqt_core::{Coordinate, DayTimes, PrayerSettings, compute_day_times};
use waqt_time::{CalendarDate, system_utc_offset_hours};

/// Times for a calendar day at (`latitude`, `longitude`), expressed at
/// `utc_offset_hours`.
///
/// Date components are not validated; out-of-range values follow the
/// Julian Date arithmetic.
pub fn prayer_times_for_date(
    year: i32,
    month: u32,
    day: u32,
    latitude: f64,
    longitude: f64,
    utc_offset_hours: f64,
    settings: &PrayerSettings,
) -> DayTimes {
    compute_day_times(
        CalendarDate::new(year, month, day),
        &Coordinate::new(latitude, longitude),
        utc_offset_hours,
        settings,
    )
}

/// Times for the host's current date, in the host's time zone.
pub fn today_times(coordinate: &Coordinate, settings: &PrayerSettings) -> DayTimes {
    compute_day_times(
        CalendarDate::today(),
        coordinate,
        system_utc_offset_hours(),
        settings,
    )
}
