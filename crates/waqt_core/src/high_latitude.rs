//! High-latitude correction for twilight events.
//!
//! Near the poles in summer the Sun may never reach the fajr or isha
//! depression angle, or only reaches it deep into the night. The
//! correction caps the distance between each twilight event and its
//! anchor (sunrise for the morning events, sunset for the evening ones)
//! at a fraction of the night.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;
use waqt_math::time_diff;

use crate::error::WaqtError;
use crate::method::MethodParameters;
use crate::types::{AngleOrMinutes, PrayerName};

/// Night-portion rule for twilight events at high latitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HighLatitudeAdjustment {
    /// No correction; unreachable events stay absent.
    None,
    /// Half of the night.
    #[default]
    Midnight,
    /// One seventh of the night.
    OneSeventh,
    /// `angle / 60` of the night.
    AngleBased,
}

pub const ALL_HIGH_LATITUDE_ADJUSTMENTS: [HighLatitudeAdjustment; 4] = [
    HighLatitudeAdjustment::None,
    HighLatitudeAdjustment::Midnight,
    HighLatitudeAdjustment::OneSeventh,
    HighLatitudeAdjustment::AngleBased,
];

impl HighLatitudeAdjustment {
    pub const fn name(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Midnight => "midnight",
            Self::OneSeventh => "one-seventh",
            Self::AngleBased => "angle-based",
        }
    }

    /// Fraction of the night allowed between a twilight event and its anchor.
    pub fn night_fraction(self, angle_deg: f64) -> f64 {
        match self {
            Self::None => 0.0,
            Self::Midnight => 0.5,
            Self::OneSeventh => 0.14286,
            Self::AngleBased => angle_deg / 60.0,
        }
    }
}

impl FromStr for HighLatitudeAdjustment {
    type Err = WaqtError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase().replace('_', "-");
        ALL_HIGH_LATITUDE_ADJUSTMENTS
            .into_iter()
            .find(|m| m.name() == lower)
            .ok_or_else(|| WaqtError::UnknownName {
                kind: "high-latitude adjustment",
                value: s.to_string(),
                expected: "none, midnight, one-seventh, angle-based",
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Anchor {
    /// Event precedes the anchor (morning).
    Before,
    /// Event follows the anchor (evening).
    After,
}

/// Clamp one twilight time to within `fraction * night` of `base`.
///
/// A NaN `time` (event never occurs) is always replaced.
fn clamp_to_night_portion(time: f64, base: f64, fraction: f64, night: f64, anchor: Anchor) -> f64 {
    let portion = fraction * night;
    let diff = match anchor {
        Anchor::Before => time_diff(time, base),
        Anchor::After => time_diff(base, time),
    };
    if time.is_nan() || diff.is_nan() || diff > portion {
        match anchor {
            Anchor::Before => base - portion,
            Anchor::After => base + portion,
        }
    } else {
        time
    }
}

/// Apply the high-latitude correction in place.
///
/// `hours` holds timezone-adjusted raw times indexed by
/// [`PrayerName::index`]. Fajr is always clamped; imsak, maghrib and isha
/// only when their rule is an angle. A no-op for
/// [`HighLatitudeAdjustment::None`].
pub fn adjust_high_latitude(
    hours: &mut [f64; 10],
    mode: HighLatitudeAdjustment,
    params: &MethodParameters,
    imsak: AngleOrMinutes,
) {
    if mode == HighLatitudeAdjustment::None {
        return;
    }
    let sunrise = hours[PrayerName::Sunrise.index()];
    let sunset = hours[PrayerName::Sunset.index()];
    let night = time_diff(sunset, sunrise);

    let mut clamp = |name: PrayerName, angle: f64, base: f64, anchor: Anchor| {
        let i = name.index();
        let before = hours[i];
        let fraction = mode.night_fraction(angle);
        let after = clamp_to_night_portion(before, base, fraction, night, anchor);
        if after.to_bits() != before.to_bits() {
            debug!(
                prayer = name.name(),
                before,
                after,
                mode = mode.name(),
                "high-latitude clamp"
            );
        }
        hours[i] = after;
    };

    if let AngleOrMinutes::Angle(a) = imsak {
        clamp(PrayerName::Imsak, a, sunrise, Anchor::Before);
    }
    clamp(PrayerName::Fajr, params.fajr_angle, sunrise, Anchor::Before);
    if let AngleOrMinutes::Angle(a) = params.maghrib {
        clamp(PrayerName::Maghrib, a, sunset, Anchor::After);
    }
    if let AngleOrMinutes::Angle(a) = params.isha {
        clamp(PrayerName::Isha, a, sunset, Anchor::After);
    }
}
