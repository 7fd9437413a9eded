//! Clock formatting for computed times.

use clap::ValueEnum;
use waqt_rs::{AngleOrMinutes, ComputedTime};

/// Placeholder for an event that does not occur.
pub const ABSENT: &str = "-----";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum TimeFormat {
    /// 24-hour `HH:MM`
    #[default]
    #[value(name = "24h")]
    H24,
    /// 12-hour `HH:MM am`
    #[value(name = "12h")]
    H12,
    /// 12-hour without suffix
    #[value(name = "12h-ns")]
    H12NoSuffix,
    /// Fractional hours
    Float,
}

pub fn to_time24(t: ComputedTime) -> String {
    format!("{:02}:{:02}", t.hours(), t.minutes())
}

pub fn to_time12(t: ComputedTime, suffix: bool) -> String {
    let h = t.hours();
    let h12 = match h % 12 {
        0 => 12,
        n => n,
    };
    if suffix {
        let ampm = if h >= 12 { "pm" } else { "am" };
        format!("{:02}:{:02} {ampm}", h12, t.minutes())
    } else {
        format!("{:02}:{:02}", h12, t.minutes())
    }
}

/// Render `hours` (clock value in [0, 24)) in the requested format.
pub fn format_hours(hours: Option<f64>, format: TimeFormat) -> String {
    let Some(h) = hours else {
        return ABSENT.to_string();
    };
    if format == TimeFormat::Float {
        return format!("{h:.4}");
    }
    let Some(t) = ComputedTime::from_duration(h) else {
        return ABSENT.to_string();
    };
    match format {
        TimeFormat::H24 => to_time24(t),
        TimeFormat::H12 => to_time12(t, true),
        TimeFormat::H12NoSuffix | TimeFormat::Float => to_time12(t, false),
    }
}

pub fn describe_rule(rule: AngleOrMinutes) -> String {
    match rule {
        AngleOrMinutes::Angle(a) => format!("{a} deg"),
        AngleOrMinutes::Minutes(m) => format!("{m} min"),
    }
}

/// `+06:00`, `-03:30`
pub fn format_utc_offset(hours: f64) -> String {
    let sign = if hours < 0.0 { '-' } else { '+' };
    let total = (hours.abs() * 60.0).round() as u32;
    format!("{sign}{:02}:{:02}", total / 60, total % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hm(h: i32, m: i32) -> ComputedTime {
        ComputedTime::from_hours_minutes(h, m)
    }

    #[test]
    fn time24_pads() {
        assert_eq!(to_time24(hm(5, 3)), "05:03");
        assert_eq!(to_time24(hm(23, 59)), "23:59");
    }

    #[test]
    fn time12_noon_is_pm() {
        assert_eq!(to_time12(hm(12, 15), true), "12:15 pm");
        assert_eq!(to_time12(hm(0, 30), true), "12:30 am");
        assert_eq!(to_time12(hm(18, 5), true), "06:05 pm");
        assert_eq!(to_time12(hm(18, 5), false), "06:05");
    }

    #[test]
    fn absent_placeholder() {
        assert_eq!(format_hours(None, TimeFormat::H24), ABSENT);
        assert_eq!(format_hours(None, TimeFormat::Float), ABSENT);
    }

    #[test]
    fn rounds_to_nearest_minute() {
        let h = 5.0 + 29.6 / 60.0;
        assert_eq!(format_hours(Some(h), TimeFormat::H24), "05:30");
        assert_eq!(format_hours(Some(h), TimeFormat::H12), "05:30 am");
    }

    #[test]
    fn float_format() {
        assert_eq!(format_hours(Some(12.125), TimeFormat::Float), "12.1250");
    }

    #[test]
    fn rules_and_offsets() {
        assert_eq!(describe_rule(AngleOrMinutes::Angle(4.5)), "4.5 deg");
        assert_eq!(describe_rule(AngleOrMinutes::Minutes(90.0)), "90 min");
        assert_eq!(format_utc_offset(6.0), "+06:00");
        assert_eq!(format_utc_offset(-3.5), "-03:30");
        assert_eq!(format_utc_offset(5.75), "+05:45");
    }
}
