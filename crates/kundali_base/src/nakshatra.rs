//! The 27 nakshatras (lunar mansions).
//!
//! Each nakshatra spans 360/27 = 13°20′ of the sidereal zodiac and is
//! divided into 4 equal padas of 3°20′ each.

use crate::util::normalize_360;

/// Span of one nakshatra in degrees.
pub const NAKSHATRA_SPAN: f64 = 360.0 / 27.0;

/// Span of one pada in degrees.
pub const PADA_SPAN: f64 = NAKSHATRA_SPAN / 4.0;

/// The 27 nakshatra names, 0-indexed from Ashwini.
pub const NAKSHATRA_NAMES: [&str; 27] = [
    "Ashwini",
    "Bharani",
    "Krittika",
    "Rohini",
    "Mrigashira",
    "Ardra",
    "Punarvasu",
    "Pushya",
    "Ashlesha",
    "Magha",
    "Purva Phalguni",
    "Uttara Phalguni",
    "Hasta",
    "Chitra",
    "Swati",
    "Vishakha",
    "Anuradha",
    "Jyeshtha",
    "Mula",
    "Purva Ashadha",
    "Uttara Ashadha",
    "Shravana",
    "Dhanishta",
    "Shatabhisha",
    "Purva Bhadrapada",
    "Uttara Bhadrapada",
    "Revati",
];

/// Nakshatra occupied by a sidereal longitude, 0-based (0=Ashwini..26=Revati).
pub fn nakshatra_index(longitude: f64) -> u8 {
    let lon = normalize_360(longitude);
    let idx = (lon / NAKSHATRA_SPAN).floor() as u8;
    idx.min(26)
}

/// Pada within the occupied nakshatra, 1..4.
pub fn pada_of(longitude: f64) -> u8 {
    let lon = normalize_360(longitude);
    let idx = nakshatra_index(lon);
    let within = lon - (idx as f64) * NAKSHATRA_SPAN;
    let pada = (within / PADA_SPAN).floor() as u8;
    pada.min(3) + 1
}

/// Fraction of the occupied nakshatra already traversed, [0, 1).
pub fn nakshatra_fraction(longitude: f64) -> f64 {
    let lon = normalize_360(longitude);
    let idx = nakshatra_index(lon);
    (lon - (idx as f64) * NAKSHATRA_SPAN) / NAKSHATRA_SPAN
}

/// Name for a 0-based nakshatra index.
pub fn nakshatra_name(idx: u8) -> &'static str {
    NAKSHATRA_NAMES.get(idx as usize).copied().unwrap_or("Unknown")
}
