//! Shared angle utilities.

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    if r < 0.0 { r + 360.0 } else { r }
}

/// Minimum angular separation between two longitudes, in [0, 180].
///
/// Accounts for zodiac wraparound: the separation between 359 and 1
/// degrees is 2, not 358.
pub fn min_separation(a: f64, b: f64) -> f64 {
    let d = (normalize_360(a) - normalize_360(b)).abs();
    if d > 180.0 { 360.0 - d } else { d }
}
