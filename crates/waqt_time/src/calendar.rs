//! Gregorian calendar day used as the input date of a computation.
//!
//! A `CalendarDate` is converted once into a Julian Date and never mutated
//! afterward. Construction through [`CalendarDate::new`] performs no
//! validation; [`CalendarDate::validated`] and the `FromStr` impl check
//! calendar legality through `jiff`.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TimeError;
use crate::julian::calendar_to_jd;

/// Gregorian calendar date (year, month 1-12, day 1-31).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CalendarDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl CalendarDate {
    /// Create a date without validating it.
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// Create a date, rejecting components that do not name a real day.
    pub fn validated(year: i32, month: u32, day: u32) -> Result<Self, TimeError> {
        let invalid = || TimeError::InvalidDate { year, month, day };
        let y = i16::try_from(year).map_err(|_| invalid())?;
        let m = i8::try_from(month).map_err(|_| invalid())?;
        let d = i8::try_from(day).map_err(|_| invalid())?;
        jiff::civil::Date::new(y, m, d).map_err(|_| invalid())?;
        Ok(Self::new(year, month, day))
    }

    /// Today's date in the host's local time zone.
    pub fn today() -> Self {
        Self::from(jiff::Zoned::now().date())
    }

    /// Julian Date at 0h UT of this day.
    pub fn to_jd(&self) -> f64 {
        calendar_to_jd(self.year, self.month, self.day as f64)
    }
}

impl From<jiff::civil::Date> for CalendarDate {
    fn from(date: jiff::civil::Date) -> Self {
        Self {
            year: i32::from(date.year()),
            month: date.month() as u32,
            day: date.day() as u32,
        }
    }
}

impl FromStr for CalendarDate {
    type Err = TimeError;

    /// Parse `YYYY-MM-DD`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parsed: Result<jiff::civil::Date, jiff::Error> = s.trim().parse();
        let date = parsed.map_err(|e| TimeError::Parse {
            input: s.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self::from(date))
    }
}

impl Display for CalendarDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// UTC offset of the host's current time zone in hours (e.g. `5.5` for IST).
///
/// Includes any daylight-saving shift in effect right now.
pub fn system_utc_offset_hours() -> f64 {
    let offset = jiff::Zoned::now().offset();
    offset.seconds() as f64 / 3600.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_constructor() {
        let d = CalendarDate::new(2024, 3, 20);
        assert_eq!(d.year, 2024);
        assert_eq!(d.month, 3);
        assert_eq!(d.day, 20);
    }

    #[test]
    fn new_does_not_validate() {
        let d = CalendarDate::new(2023, 2, 31);
        assert_eq!(d.day, 31);
        assert!(d.to_jd().is_finite());
    }

    #[test]
    fn validated_rejects_feb_30() {
        let err = CalendarDate::validated(2023, 2, 30).unwrap_err();
        assert_eq!(
            err,
            TimeError::InvalidDate {
                year: 2023,
                month: 2,
                day: 30
            }
        );
    }

    #[test]
    fn validated_accepts_leap_day() {
        assert!(CalendarDate::validated(2024, 2, 29).is_ok());
    }

    #[test]
    fn parse_iso_date() {
        let d: CalendarDate = "2024-03-20".parse().unwrap();
        assert_eq!(d, CalendarDate::new(2024, 3, 20));
    }

    #[test]
    fn parse_rejects_garbage() {
        let err = "20-03-2024".parse::<CalendarDate>().unwrap_err();
        assert!(matches!(err, TimeError::Parse { .. }), "got {err:?}");
    }

    #[test]
    fn display_zero_padded() {
        assert_eq!(CalendarDate::new(2024, 1, 5).to_string(), "2024-01-05");
    }

    #[test]
    fn to_jd_is_midnight() {
        let jd = CalendarDate::new(2000, 1, 1).to_jd();
        assert!((jd - 2_451_544.5).abs() < 1e-9);
    }

    #[test]
    fn system_offset_in_range() {
        let h = system_utc_offset_hours();
        assert!((-14.0..=14.0).contains(&h), "offset = {h}");
    }
}
