//! Golden Julian Dates for calendar days (0h UT), cross-checked against
//! the USNO Julian Date converter.

use waqt_time::{CalendarDate, calendar_to_jd, local_mean_jd};

const CASES: &[(i32, u32, u32, f64)] = &[
    (1900, 1, 1, 2_415_020.5),
    (1987, 1, 27, 2_446_822.5),
    (1988, 6, 19, 2_447_331.5),
    (2000, 1, 1, 2_451_544.5),
    (2024, 3, 20, 2_460_389.5),
    (2025, 12, 31, 2_461_040.5),
];

#[test]
fn calendar_dates_match_reference() {
    for &(y, m, d, expected) in CASES {
        let jd = CalendarDate::new(y, m, d).to_jd();
        assert!(
            (jd - expected).abs() < 1e-9,
            "{y:04}-{m:02}-{d:02}: got {jd}, expected {expected}"
        );
    }
}

#[test]
fn parsed_date_matches_components() {
    let parsed: CalendarDate = "1988-06-19".parse().unwrap();
    assert_eq!(parsed.to_jd(), calendar_to_jd(1988, 6, 19.0));
}

#[test]
fn dhaka_local_mean_jd() {
    // 90.4125 deg E is about 6h01m ahead of Greenwich
    assert!((local_mean_jd(0.0, 90.4125) + 90.4125 / 360.0).abs() < 1e-15);

    // One f64 step near JD 2.46e6 is about 4.7e-10 days
    let jd = CalendarDate::new(2024, 3, 20).to_jd();
    let local = local_mean_jd(jd, 90.4125);
    assert!((jd - local - 90.4125 / 360.0).abs() < 1e-9);
}
