//! Birth balance: the unexpired share of the first dasha period.
//!
//! Nakshatra-based systems measure from the Moon's progress through its
//! nakshatra; sign-based systems from the ascendant's progress through
//! its sign.

use crate::nakshatra::NAKSHATRA_SPAN;
use crate::util::normalize_360;

/// Balance for a nakshatra-based system.
///
/// Returns `(nakshatra_index, balance_days, elapsed_fraction)`:
/// the Moon's 0-based nakshatra, the remaining days of the starting
/// lord's period, and the fraction of the nakshatra already traversed.
pub fn nakshatra_balance(moon_sidereal_lon: f64, entry_period_days: f64) -> (u8, f64, f64) {
    let lon = normalize_360(moon_sidereal_lon);
    let nak_idx = ((lon / NAKSHATRA_SPAN).floor() as u8).min(26);
    let within = lon - (nak_idx as f64) * NAKSHATRA_SPAN;
    let elapsed_fraction = within / NAKSHATRA_SPAN;
    (nak_idx, entry_period_days * (1.0 - elapsed_fraction), elapsed_fraction)
}

/// Balance for a sign-based system.
///
/// Returns `(balance_days, elapsed_fraction)` from the ascendant's
/// position within its sign.
pub fn sign_balance(asc_sidereal_lon: f64, entry_period_days: f64) -> (f64, f64) {
    let lon = normalize_360(asc_sidereal_lon);
    let rasi_idx = ((lon / 30.0).floor() as u8).min(11);
    let within = lon - (rasi_idx as f64) * 30.0;
    let elapsed_fraction = within / 30.0;
    (entry_period_days * (1.0 - elapsed_fraction), elapsed_fraction)
}
