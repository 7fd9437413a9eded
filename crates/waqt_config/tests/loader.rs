//! Loading configuration documents from TOML text, files and environment maps.

use std::path::PathBuf;

use waqt_config::{ConfigError, WaqtConfig};
use waqt_core::{
    AngleOrMinutes, AsrJuristic, CalculationMethod, HighLatitudeAdjustment, MidnightMethod,
    PrayerName,
};

const DHAKA_TOML: &str = r#"
[location]
latitude = 23.810332
longitude = 90.4125181
utc_offset_hours = 6

[calculation]
method = "karachi"
asr = "hanafi"
high_latitude = "one-seventh"

[offsets]
maghrib = 3
"#;

fn env_map(pairs: &[(&str, &str)]) -> config::Map<String, String> {
    pairs
        .iter()
        .map(|&(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn full_document() {
    let cfg = WaqtConfig::from_toml_str(DHAKA_TOML).unwrap();
    let coord = cfg.coordinate().unwrap().unwrap();
    assert!((coord.latitude - 23.810332).abs() < 1e-12);
    assert_eq!(coord.elevation, 0.0);
    assert_eq!(cfg.location.utc_offset_hours, Some(6.0));

    let s = cfg.settings();
    assert_eq!(s.method(), CalculationMethod::Karachi);
    assert_eq!(s.asr, AsrJuristic::Hanafi);
    assert_eq!(s.high_latitude, HighLatitudeAdjustment::OneSeventh);
    assert_eq!(s.offsets.get(PrayerName::Maghrib), 3.0);
}

#[test]
fn angle_and_minute_rules() {
    let toml = r#"
[calculation]
method = "isna"
maghrib = { angle = 4.5 }
isha = { minutes = 90 }
imsak = { angle = 19.5 }
midnight = "jafari"
"#;
    let s = WaqtConfig::from_toml_str(toml).unwrap().settings();
    assert_eq!(s.method(), CalculationMethod::Custom);
    let p = s.params();
    assert_eq!(p.fajr_angle, 15.0);
    assert_eq!(p.maghrib, AngleOrMinutes::Angle(4.5));
    assert_eq!(p.isha, AngleOrMinutes::Minutes(90.0));
    assert_eq!(p.midnight, MidnightMethod::Jafari);
    assert_eq!(s.imsak, AngleOrMinutes::Angle(19.5));
}

#[test]
fn empty_document() {
    let cfg = WaqtConfig::from_toml_str("").unwrap();
    assert_eq!(cfg, WaqtConfig::default());
}

#[test]
fn unknown_method_is_rejected() {
    let err = WaqtConfig::from_toml_str("[calculation]\nmethod = \"dubai\"\n").unwrap_err();
    assert!(matches!(err, ConfigError::Load(_)), "{err}");
}

#[test]
fn environment_overrides_file() {
    let env = env_map(&[
        ("WAQT_LOCATION__LATITUDE", "21.4225"),
        ("WAQT_CALCULATION__METHOD", "makkah"),
        ("WAQT_OFFSETS__ISHA", "2"),
    ]);
    let cfg = WaqtConfig::from_toml_and_env(DHAKA_TOML, env).unwrap();
    assert_eq!(cfg.location.latitude, Some(21.4225));
    // untouched by the environment
    assert_eq!(cfg.location.longitude, Some(90.4125181));
    assert_eq!(cfg.calculation.method, Some(CalculationMethod::Makkah));
    assert_eq!(cfg.offsets.isha, 2.0);
    assert_eq!(cfg.offsets.maghrib, 3.0);
}

#[test]
fn load_from_file() {
    let path = std::env::temp_dir().join(format!("waqt-config-test-{}.toml", std::process::id()));
    std::fs::write(&path, DHAKA_TOML).unwrap();
    let cfg = WaqtConfig::load(Some(&path));
    std::fs::remove_file(&path).unwrap();
    let cfg = cfg.unwrap();
    assert_eq!(cfg.calculation.method, Some(CalculationMethod::Karachi));
}

#[test]
fn missing_explicit_file_is_an_error() {
    let path = PathBuf::from("/nonexistent/waqt-does-not-exist.toml");
    assert!(WaqtConfig::load(Some(&path)).is_err());
}
