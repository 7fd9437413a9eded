//! Day-times pipeline.
//!
//! Turns (date, coordinate, UTC offset, settings) into the ten prayer
//! times for that day:
//!
//! 1. Seed each event with a rough clock estimate.
//! 2. Solve every angle-based event, feeding each pass's output back in as
//!    the next pass's day fraction.
//! 3. Shift from local mean time to the requested UTC offset.
//! 4. Apply the high-latitude correction.
//! 5. Derive the minute-based events (imsak, maghrib, isha) and dhuhr
//!    minutes, then midnight and qiyam from the night length.
//! 6. Add per-event offsets.
//!
//! The pipeline is pure: it reads nothing but its arguments.

use tracing::{debug, trace};
use waqt_math::{fix_hour, time_diff};
use waqt_solar::LocalJulianDay;
use waqt_time::{CalendarDate, HOURS_PER_DAY};

use crate::high_latitude::adjust_high_latitude;
use crate::method::MidnightMethod;
use crate::settings::PrayerSettings;
use crate::solver::{NoonSide, SunAngleSolver, rise_set_angle};
use crate::types::{ALL_PRAYERS, AngleOrMinutes, ComputedTime, Coordinate, PrayerName};

/// Initial clock estimates, indexed by [`PrayerName::index`].
///
/// Midnight and qiyam are derived, never solved; their seeds are unused.
const SEED_HOURS: [f64; 10] = [5.0, 5.0, 6.0, 12.0, 13.0, 18.0, 18.0, 18.0, 0.0, 0.0];

/// The ten computed times of one day.
///
/// Values are fractional hours at the requested UTC offset. Raw values may
/// fall outside [0, 24) (e.g. midnight past 24) and are NaN for events that
/// do not occur.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayTimes {
    hours: [f64; 10],
}

impl DayTimes {
    /// Unwrapped value; NaN when the event does not occur.
    pub fn raw_hours(&self, name: PrayerName) -> f64 {
        self.hours[name.index()]
    }

    /// Clock value in [0, 24), or `None` when the event does not occur.
    pub fn hours(&self, name: PrayerName) -> Option<f64> {
        let h = self.raw_hours(name);
        h.is_finite().then(|| fix_hour(h))
    }

    /// Rounded clock value, or `None` when the event does not occur.
    pub fn time(&self, name: PrayerName) -> Option<ComputedTime> {
        ComputedTime::from_duration(self.raw_hours(name))
    }

    /// Present events in canonical display order.
    pub fn iter(&self) -> impl Iterator<Item = (PrayerName, ComputedTime)> + '_ {
        ALL_PRAYERS
            .into_iter()
            .filter_map(|p| self.time(p).map(|t| (p, t)))
    }

    /// Present events ordered by clock time; ties keep canonical order.
    pub fn sorted(&self) -> Vec<(PrayerName, ComputedTime)> {
        let mut out: Vec<_> = self.iter().collect();
        out.sort_by_key(|&(_, t)| t);
        out
    }

    /// Number of events that occur on this day.
    pub fn present_count(&self) -> usize {
        self.hours.iter().filter(|h| h.is_finite()).count()
    }
}

/// One solver pass over all angle-based events.
///
/// Minute-based and derived slots come back NaN.
fn solve_pass(
    solver: &SunAngleSolver,
    fractions: &[f64; 10],
    settings: &PrayerSettings,
    horizon_deg: f64,
) -> [f64; 10] {
    let params = settings.params();
    let shadow = settings.asr.shadow_factor();
    let by_angle = |rule: AngleOrMinutes, t: f64, side: NoonSide| match rule {
        AngleOrMinutes::Angle(a) => solver.sun_angle_time(a, t, side),
        AngleOrMinutes::Minutes(_) => f64::NAN,
    };

    ALL_PRAYERS.map(|name| {
        let t = fractions[name.index()];
        match name {
            PrayerName::Imsak => by_angle(settings.imsak, t, NoonSide::Before),
            PrayerName::Fajr => solver.sun_angle_time(params.fajr_angle, t, NoonSide::Before),
            PrayerName::Sunrise => solver.sun_angle_time(horizon_deg, t, NoonSide::Before),
            PrayerName::Dhuhr => solver.mid_day(t),
            PrayerName::Asr => solver.asr_time(shadow, t),
            PrayerName::Sunset => solver.sun_angle_time(horizon_deg, t, NoonSide::After),
            PrayerName::Maghrib => by_angle(params.maghrib, t, NoonSide::After),
            PrayerName::Isha => by_angle(params.isha, t, NoonSide::After),
            PrayerName::Midnight | PrayerName::Qiyam => f64::NAN,
        }
    })
}

/// Compute the ten prayer times for `date` at `coordinate`.
///
/// `utc_offset_hours` is the civil offset the results are expressed in
/// (e.g. `6.0` for UTC+6). Events the Sun never reaches, and that the
/// high-latitude correction does not recover, come back absent.
pub fn compute_day_times(
    date: CalendarDate,
    coordinate: &Coordinate,
    utc_offset_hours: f64,
    settings: &PrayerSettings,
) -> DayTimes {
    let params = settings.params();
    let day = LocalJulianDay::new(date, coordinate.longitude);
    let solver = SunAngleSolver::new(day, coordinate.latitude);
    let horizon = rise_set_angle(coordinate.elevation);

    let mut estimate = SEED_HOURS;
    let mut hours = [f64::NAN; 10];
    for pass in 0..settings.iterations.max(1) {
        let fractions = estimate.map(|h| h / HOURS_PER_DAY);
        hours = solve_pass(&solver, &fractions, settings, horizon);
        for (est, &h) in estimate.iter_mut().zip(hours.iter()) {
            // An unsolved event keeps its previous estimate for the next pass.
            if h.is_finite() {
                *est = h;
            }
        }
        trace!(pass, ?hours, "solver pass");
    }

    let shift = utc_offset_hours - coordinate.longitude / 15.0;
    for h in hours.iter_mut() {
        *h += shift;
    }

    adjust_high_latitude(&mut hours, settings.high_latitude, &params, settings.imsak);

    let idx = |name: PrayerName| name.index();
    if let AngleOrMinutes::Minutes(m) = settings.imsak {
        hours[idx(PrayerName::Imsak)] = hours[idx(PrayerName::Fajr)] - m / 60.0;
    }
    if let AngleOrMinutes::Minutes(m) = params.maghrib {
        hours[idx(PrayerName::Maghrib)] = hours[idx(PrayerName::Sunset)] + m / 60.0;
    }
    if let AngleOrMinutes::Minutes(m) = params.isha {
        hours[idx(PrayerName::Isha)] = hours[idx(PrayerName::Maghrib)] + m / 60.0;
    }
    hours[idx(PrayerName::Dhuhr)] += settings.dhuhr_minutes / 60.0;

    let sunset = hours[idx(PrayerName::Sunset)];
    let night_end = match params.midnight {
        MidnightMethod::Standard => hours[idx(PrayerName::Sunrise)],
        MidnightMethod::Jafari => hours[idx(PrayerName::Fajr)],
    };
    let night = time_diff(sunset, night_end);
    hours[idx(PrayerName::Midnight)] = sunset + night / 2.0;
    hours[idx(PrayerName::Qiyam)] = sunset + 2.0 * night / 3.0;

    for (h, (_, minutes)) in hours.iter_mut().zip(settings.offsets.iter()) {
        *h += minutes / 60.0;
    }

    let times = DayTimes { hours };
    debug!(
        %date,
        latitude = coordinate.latitude,
        longitude = coordinate.longitude,
        method = settings.method().name(),
        present = times.present_count(),
        "computed day times"
    );
    times
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::method::CalculationMethod;

    fn greenwich_equinox() -> DayTimes {
        compute_day_times(
            CalendarDate::new(2024, 3, 20),
            &Coordinate::new(0.0, 0.0),
            0.0,
            &PrayerSettings::default(),
        )
    }

    #[test]
    fn all_events_present_at_equator() {
        let t = greenwich_equinox();
        assert_eq!(t.present_count(), 10);
        assert_eq!(t.iter().count(), 10);
    }

    #[test]
    fn imsak_ten_minutes_before_fajr() {
        let t = greenwich_equinox();
        let gap = t.raw_hours(PrayerName::Fajr) - t.raw_hours(PrayerName::Imsak);
        assert!((gap - 10.0 / 60.0).abs() < 1e-12, "gap = {gap}");
    }

    #[test]
    fn maghrib_equals_sunset_for_zero_minutes() {
        let t = greenwich_equinox();
        assert_eq!(
            t.raw_hours(PrayerName::Maghrib),
            t.raw_hours(PrayerName::Sunset)
        );
    }

    #[test]
    fn midnight_is_half_the_night() {
        let t = greenwich_equinox();
        let sunset = t.raw_hours(PrayerName::Sunset);
        let sunrise = t.raw_hours(PrayerName::Sunrise);
        let night = time_diff(sunset, sunrise);
        let mid = t.raw_hours(PrayerName::Midnight);
        assert!((mid - (sunset + night / 2.0)).abs() < 1e-12);
        assert!(t.raw_hours(PrayerName::Qiyam) > mid);
    }

    #[test]
    fn jafari_night_runs_from_sunset_to_fajr() {
        let date = CalendarDate::new(2024, 1, 15);
        let nyc = Coordinate::new(40.7128, -74.006);
        let jafari = PrayerSettings::default().with_midnight_method(MidnightMethod::Jafari);
        let t = compute_day_times(date, &nyc, -5.0, &jafari);

        let sunset = t.raw_hours(PrayerName::Sunset);
        let fajr = t.raw_hours(PrayerName::Fajr);
        let night = time_diff(sunset, fajr);
        let mid = t.raw_hours(PrayerName::Midnight);
        let qiyam = t.raw_hours(PrayerName::Qiyam);
        assert!((mid - (sunset + night / 2.0)).abs() < 1e-12);
        assert!((qiyam - (sunset + 2.0 * night / 3.0)).abs() < 1e-12);

        // sunset 16:53, fajr 05:52
        let clock = t.time(PrayerName::Midnight).unwrap();
        assert_eq!(clock.hours(), 23);
        assert!((20..=26).contains(&clock.minutes()), "{clock:?}");

        // fajr precedes sunrise, so the night is shorter than the standard one
        let standard = compute_day_times(date, &nyc, -5.0, &PrayerSettings::default());
        assert!(mid < standard.raw_hours(PrayerName::Midnight));
        assert_eq!(fajr, standard.raw_hours(PrayerName::Fajr));
    }

    #[test]
    fn utc_offset_shifts_everything() {
        let date = CalendarDate::new(2024, 3, 20);
        let c = Coordinate::new(0.0, 0.0);
        let s = PrayerSettings::default();
        let a = compute_day_times(date, &c, 0.0, &s);
        let b = compute_day_times(date, &c, 3.0, &s);
        for p in ALL_PRAYERS {
            let d = b.raw_hours(p) - a.raw_hours(p);
            assert!((d - 3.0).abs() < 1e-9, "{p:?}: {d}");
        }
    }

    #[test]
    fn offsets_and_dhuhr_minutes_add() {
        let date = CalendarDate::new(2024, 3, 20);
        let c = Coordinate::new(0.0, 0.0);
        let base = compute_day_times(date, &c, 0.0, &PrayerSettings::default());
        let s = PrayerSettings::default()
            .with_offset(PrayerName::Asr, 2.0)
            .with_dhuhr_minutes(1.0);
        let t = compute_day_times(date, &c, 0.0, &s);
        let asr = t.raw_hours(PrayerName::Asr) - base.raw_hours(PrayerName::Asr);
        let dhuhr = t.raw_hours(PrayerName::Dhuhr) - base.raw_hours(PrayerName::Dhuhr);
        assert!((asr - 2.0 / 60.0).abs() < 1e-12);
        assert!((dhuhr - 1.0 / 60.0).abs() < 1e-12);
        assert_eq!(
            t.raw_hours(PrayerName::Fajr),
            base.raw_hours(PrayerName::Fajr)
        );
    }

    #[test]
    fn makkah_isha_ninety_minutes_after_maghrib() {
        let t = compute_day_times(
            CalendarDate::new(2024, 6, 1),
            &Coordinate::new(21.4225, 39.8262),
            3.0,
            &PrayerSettings::new(CalculationMethod::Makkah),
        );
        let gap = t.raw_hours(PrayerName::Isha) - t.raw_hours(PrayerName::Maghrib);
        assert!((gap - 1.5).abs() < 1e-12, "gap = {gap}");
    }

    #[test]
    fn sorted_is_chronological() {
        let t = greenwich_equinox();
        let sorted = t.sorted();
        assert!(sorted.windows(2).all(|w| w[0].1 <= w[1].1));
        assert_eq!(sorted.len(), 10);
    }

    #[test]
    fn zero_iterations_treated_as_one() {
        let mut s = PrayerSettings::default();
        s.iterations = 0;
        let t = compute_day_times(
            CalendarDate::new(2024, 3, 20),
            &Coordinate::new(0.0, 0.0),
            0.0,
            &s,
        );
        assert_eq!(t.present_count(), 10);
    }
}
