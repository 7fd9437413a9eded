//! Degree-based trigonometry and interval wrapping.
//!
//! Every angle in the engine is carried in degrees and every clock value in
//! fractional hours, so this crate provides the two range-reduction helpers
//! ([`fix_angle`], [`fix_hour`]) on top of one primitive, [`wrap`], plus thin
//! degree wrappers around the `f64` trigonometric functions.
//!
//! None of these functions fail. Inverse functions return NaN when their
//! argument falls outside `[-1, 1]`, and NaN flows through [`wrap`]
//! unchanged; downstream code reads that NaN as "the event never occurs".

/// Reduce `value` into the half-open interval `[min, max)`.
///
/// Uses the floating remainder and corrects negative remainders by one
/// period. NaN and infinities produce NaN.
pub fn wrap(value: f64, min: f64, max: f64) -> f64 {
    let range = max - min;
    let mut r = (value - min) % range;
    if r < 0.0 {
        r += range;
    }
    let out = min + r;
    // -1e-17 + 24.0 rounds to 24.0
    if out >= max { min } else { out }
}

/// Normalize an angle to [0, 360) degrees.
pub fn fix_angle(deg: f64) -> f64 {
    wrap(deg, 0.0, 360.0)
}

/// Normalize a clock value to [0, 24) hours.
pub fn fix_hour(hours: f64) -> f64 {
    wrap(hours, 0.0, 24.0)
}

/// Forward distance in hours from `from` to `to` on a 24 h dial.
///
/// `time_diff(23.0, 1.0) == 2.0`. NaN in either argument gives NaN.
pub fn time_diff(from: f64, to: f64) -> f64 {
    fix_hour(to - from)
}

pub fn dsin(deg: f64) -> f64 {
    deg.to_radians().sin()
}

pub fn dcos(deg: f64) -> f64 {
    deg.to_radians().cos()
}

pub fn dtan(deg: f64) -> f64 {
    deg.to_radians().tan()
}

pub fn darcsin(x: f64) -> f64 {
    x.asin().to_degrees()
}

pub fn darccos(x: f64) -> f64 {
    x.acos().to_degrees()
}

pub fn darctan(x: f64) -> f64 {
    x.atan().to_degrees()
}

pub fn darctan2(y: f64, x: f64) -> f64 {
    y.atan2(x).to_degrees()
}

/// Inverse cotangent in degrees, computed as `atan2(1, x)` so that it stays
/// defined (90 deg) at `x = 0`.
pub fn darccot(x: f64) -> f64 {
    1.0_f64.atan2(x).to_degrees()
}
