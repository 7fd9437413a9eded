//! Calculation conventions and their solver parameters.
//!
//! Each regional convention fixes a fajr depression angle, a maghrib rule,
//! an isha rule and a midnight convention. The table is constant; user
//! overrides live in the `custom` slot of
//! [`PrayerSettings`](crate::settings::PrayerSettings).

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::WaqtError;
use crate::types::AngleOrMinutes;

/// Named regional calculation conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalculationMethod {
    /// Muslim World League.
    Mwl,
    /// Islamic Society of North America.
    Isna,
    /// Egyptian General Authority of Survey.
    Egypt,
    /// Umm al-Qura University, Makkah.
    Makkah,
    /// University of Islamic Sciences, Karachi.
    Karachi,
    /// Institute of Geophysics, University of Tehran.
    Tehran,
    /// Shia Ithna Ashari, Leva Research Institute, Qum.
    Jafari,
    /// User-derived parameters.
    Custom,
}

/// All conventions (index 0 = Mwl, last = Custom).
pub const ALL_METHODS: [CalculationMethod; 8] = [
    CalculationMethod::Mwl,
    CalculationMethod::Isna,
    CalculationMethod::Egypt,
    CalculationMethod::Makkah,
    CalculationMethod::Karachi,
    CalculationMethod::Tehran,
    CalculationMethod::Jafari,
    CalculationMethod::Custom,
];

impl CalculationMethod {
    /// Short identifier, as accepted by `FromStr` and configuration files.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mwl => "mwl",
            Self::Isna => "isna",
            Self::Egypt => "egypt",
            Self::Makkah => "makkah",
            Self::Karachi => "karachi",
            Self::Tehran => "tehran",
            Self::Jafari => "jafari",
            Self::Custom => "custom",
        }
    }

    /// Issuing authority.
    pub const fn description(self) -> &'static str {
        match self {
            Self::Mwl => "Muslim World League",
            Self::Isna => "Islamic Society of North America",
            Self::Egypt => "Egyptian General Authority of Survey",
            Self::Makkah => "Umm al-Qura University, Makkah",
            Self::Karachi => "University of Islamic Sciences, Karachi",
            Self::Tehran => "Institute of Geophysics, University of Tehran",
            Self::Jafari => "Shia Ithna Ashari, Leva Research Institute, Qum",
            Self::Custom => "Custom parameters",
        }
    }

    /// Fixed parameters of this convention.
    ///
    /// For [`Custom`](Self::Custom) this is the starting template of the
    /// custom slot (the MWL values).
    pub const fn params(self) -> MethodParameters {
        use AngleOrMinutes::{Angle, Minutes};
        use MidnightMethod::{Jafari, Standard};

        match self {
            Self::Mwl | Self::Custom => {
                MethodParameters::new(18.0, Minutes(0.0), Angle(17.0), Standard)
            }
            Self::Isna => MethodParameters::new(15.0, Minutes(0.0), Angle(15.0), Standard),
            Self::Egypt => MethodParameters::new(19.5, Minutes(0.0), Angle(17.5), Standard),
            // Fajr angle was 19 deg before 1430 AH.
            Self::Makkah => MethodParameters::new(18.5, Minutes(0.0), Minutes(90.0), Standard),
            Self::Karachi => MethodParameters::new(18.0, Minutes(0.0), Angle(18.0), Standard),
            Self::Tehran => MethodParameters::new(17.7, Angle(4.5), Angle(14.0), Jafari),
            Self::Jafari => MethodParameters::new(16.0, Angle(4.0), Angle(14.0), Jafari),
        }
    }
}

impl Display for CalculationMethod {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CalculationMethod {
    type Err = WaqtError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        ALL_METHODS
            .into_iter()
            .find(|m| m.name() == lower)
            .ok_or_else(|| WaqtError::UnknownName {
                kind: "calculation method",
                value: s.to_string(),
                expected: "mwl, isna, egypt, makkah, karachi, tehran, jafari, custom",
            })
    }
}

/// Juristic school for the Asr shadow length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AsrJuristic {
    /// Shafi'i, Maliki, Ja'fari and Hanbali: shadow equals object length.
    #[default]
    Shafii,
    /// Hanafi: shadow equals twice the object length.
    Hanafi,
}

impl AsrJuristic {
    /// Shadow length as a multiple of object height, beyond the noon shadow.
    pub const fn shadow_factor(self) -> f64 {
        match self {
            Self::Shafii => 1.0,
            Self::Hanafi => 2.0,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Shafii => "shafii",
            Self::Hanafi => "hanafi",
        }
    }
}

impl FromStr for AsrJuristic {
    type Err = WaqtError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "shafii" | "shafi" | "standard" => Ok(Self::Shafii),
            "hanafi" => Ok(Self::Hanafi),
            _ => Err(WaqtError::UnknownName {
                kind: "asr juristic method",
                value: s.to_string(),
                expected: "shafii, hanafi",
            }),
        }
    }
}

/// How the night is measured for midnight and qiyam.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MidnightMethod {
    /// Sunset to sunrise.
    #[default]
    Standard,
    /// Sunset to fajr.
    Jafari,
}

impl MidnightMethod {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Jafari => "jafari",
        }
    }
}

impl FromStr for MidnightMethod {
    type Err = WaqtError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "standard" => Ok(Self::Standard),
            "jafari" => Ok(Self::Jafari),
            _ => Err(WaqtError::UnknownName {
                kind: "midnight method",
                value: s.to_string(),
                expected: "standard, jafari",
            }),
        }
    }
}

/// Solver parameters for one calculation convention.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MethodParameters {
    /// Fajr depression angle in degrees.
    pub fajr_angle: f64,
    /// Maghrib as an angle, or minutes after sunset.
    pub maghrib: AngleOrMinutes,
    /// Isha as an angle, or minutes after maghrib.
    pub isha: AngleOrMinutes,
    pub midnight: MidnightMethod,
}

impl MethodParameters {
    pub const fn new(
        fajr_angle: f64,
        maghrib: AngleOrMinutes,
        isha: AngleOrMinutes,
        midnight: MidnightMethod,
    ) -> Self {
        Self {
            fajr_angle,
            maghrib,
            isha,
            midnight,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mwl_params() {
        let p = CalculationMethod::Mwl.params();
        assert_eq!(p.fajr_angle, 18.0);
        assert_eq!(p.maghrib, AngleOrMinutes::Minutes(0.0));
        assert_eq!(p.isha, AngleOrMinutes::Angle(17.0));
        assert_eq!(p.midnight, MidnightMethod::Standard);
    }

    #[test]
    fn makkah_isha_is_minutes() {
        let p = CalculationMethod::Makkah.params();
        assert_eq!(p.fajr_angle, 18.5);
        assert_eq!(p.isha, AngleOrMinutes::Minutes(90.0));
    }

    #[test]
    fn tehran_and_jafari_use_angle_maghrib() {
        let t = CalculationMethod::Tehran.params();
        assert_eq!(t.maghrib, AngleOrMinutes::Angle(4.5));
        assert_eq!(t.midnight, MidnightMethod::Jafari);
        let j = CalculationMethod::Jafari.params();
        assert_eq!(j.maghrib, AngleOrMinutes::Angle(4.0));
        assert_eq!(j.fajr_angle, 16.0);
    }

    #[test]
    fn custom_template_matches_mwl() {
        assert_eq!(
            CalculationMethod::Custom.params(),
            CalculationMethod::Mwl.params()
        );
    }

    #[test]
    fn method_names_roundtrip() {
        for m in ALL_METHODS {
            assert_eq!(m.name().parse::<CalculationMethod>().unwrap(), m);
            assert_eq!(m.to_string(), m.name());
        }
    }

    #[test]
    fn method_parse_is_case_insensitive() {
        assert_eq!(
            "Karachi".parse::<CalculationMethod>().unwrap(),
            CalculationMethod::Karachi
        );
    }

    #[test]
    fn unknown_method_reports_kind() {
        let err = "dubai".parse::<CalculationMethod>().unwrap_err();
        assert!(err.to_string().contains("calculation method"), "{err}");
    }

    #[test]
    fn shadow_factors() {
        assert_eq!(AsrJuristic::Shafii.shadow_factor(), 1.0);
        assert_eq!(AsrJuristic::Hanafi.shadow_factor(), 2.0);
        assert_eq!(
            "Hanafi".parse::<AsrJuristic>().unwrap(),
            AsrJuristic::Hanafi
        );
        assert_eq!("shafi".parse::<AsrJuristic>().unwrap(), AsrJuristic::Shafii);
    }

    #[test]
    fn midnight_parse() {
        assert_eq!(
            "jafari".parse::<MidnightMethod>().unwrap(),
            MidnightMethod::Jafari
        );
        assert!("islamic".parse::<MidnightMethod>().is_err());
    }
}
