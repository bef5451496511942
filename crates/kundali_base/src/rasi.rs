//! The twelve sidereal signs (rasis).
//!
//! Signs are 1-indexed in public output (1=Aries..12=Pisces); the 0-based
//! form is used internally for modular arithmetic.

use crate::util::normalize_360;

/// The 12 sidereal signs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rasi {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// All 12 signs in zodiacal order.
pub const ALL_RASIS: [Rasi; 12] = [
    Rasi::Aries,
    Rasi::Taurus,
    Rasi::Gemini,
    Rasi::Cancer,
    Rasi::Leo,
    Rasi::Virgo,
    Rasi::Libra,
    Rasi::Scorpio,
    Rasi::Sagittarius,
    Rasi::Capricorn,
    Rasi::Aquarius,
    Rasi::Pisces,
];

impl Rasi {
    /// Sign name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
        }
    }

    /// 0-based index into ALL_RASIS.
    pub const fn index(self) -> u8 {
        match self {
            Self::Aries => 0,
            Self::Taurus => 1,
            Self::Gemini => 2,
            Self::Cancer => 3,
            Self::Leo => 4,
            Self::Virgo => 5,
            Self::Libra => 6,
            Self::Scorpio => 7,
            Self::Sagittarius => 8,
            Self::Capricorn => 9,
            Self::Aquarius => 10,
            Self::Pisces => 11,
        }
    }

    /// Sign from a 0-based index. Returns None if index >= 12.
    pub fn from_index(idx: u8) -> Option<Self> {
        ALL_RASIS.get(idx as usize).copied()
    }

    /// Odd signs (Aries, Gemini, ...) in 1-based counting. Index 0 is odd.
    pub const fn is_odd(self) -> bool {
        self.index() % 2 == 0
    }
}

/// Sign occupied by a longitude, 1-indexed (1=Aries..12=Pisces).
pub fn rasi_of(longitude: f64) -> u8 {
    let lon = normalize_360(longitude);
    let idx = (lon / 30.0).floor() as u8;
    idx.min(11) + 1
}

/// Degrees traversed within the occupied sign, [0, 30).
pub fn degree_in_rasi(longitude: f64) -> f64 {
    normalize_360(longitude) % 30.0
}
