//! The nine planets of the sidereal chart and sign lordship.

use crate::rasi::Rasi;

/// The 9 planets, in computation order.
///
/// Ord matches this declaration order so BTreeMap-keyed chart output
/// iterates deterministically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Planet {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Rahu,
    Ketu,
}

/// All 9 planets in computation order.
pub const ALL_PLANETS: [Planet; 9] = [
    Planet::Sun,
    Planet::Moon,
    Planet::Mercury,
    Planet::Venus,
    Planet::Mars,
    Planet::Jupiter,
    Planet::Saturn,
    Planet::Rahu,
    Planet::Ketu,
];

/// The 7 classical planets in Parashara order (Sun, Moon, Mars, Mercury,
/// Jupiter, Venus, Saturn). This is the contributor order used by the
/// ashtakavarga rules tables.
pub const SAPTA_PLANETS: [Planet; 7] = [
    Planet::Sun,
    Planet::Moon,
    Planet::Mars,
    Planet::Mercury,
    Planet::Jupiter,
    Planet::Venus,
    Planet::Saturn,
];

impl Planet {
    /// Planet name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mercury => "Mercury",
            Self::Venus => "Venus",
            Self::Mars => "Mars",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// 0-based index into ALL_PLANETS.
    pub const fn index(self) -> u8 {
        match self {
            Self::Sun => 0,
            Self::Moon => 1,
            Self::Mercury => 2,
            Self::Venus => 3,
            Self::Mars => 4,
            Self::Jupiter => 5,
            Self::Saturn => 6,
            Self::Rahu => 7,
            Self::Ketu => 8,
        }
    }

    /// Parse a planet from its name. Case-sensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        ALL_PLANETS.iter().copied().find(|p| p.name() == name)
    }

    /// Lunar nodes (Rahu, Ketu) have no physical body.
    pub const fn is_node(self) -> bool {
        matches!(self, Self::Rahu | Self::Ketu)
    }
}

/// Planetary lord of a sign. Standard lordship, universal convention.
pub const fn sign_lord(rasi: Rasi) -> Planet {
    match rasi {
        Rasi::Aries | Rasi::Scorpio => Planet::Mars,
        Rasi::Taurus | Rasi::Libra => Planet::Venus,
        Rasi::Gemini | Rasi::Virgo => Planet::Mercury,
        Rasi::Cancer => Planet::Moon,
        Rasi::Leo => Planet::Sun,
        Rasi::Sagittarius | Rasi::Pisces => Planet::Jupiter,
        Rasi::Capricorn | Rasi::Aquarius => Planet::Saturn,
    }
}

/// Lord of a sign by 0-based index. Returns None if index >= 12.
pub fn sign_lord_by_index(rasi_index: u8) -> Option<Planet> {
    Rasi::from_index(rasi_index).map(sign_lord)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_planets_count() {
        assert_eq!(ALL_PLANETS.len(), 9);
        assert_eq!(SAPTA_PLANETS.len(), 7);
    }

    #[test]
    fn planet_indices_sequential() {
        for (i, p) in ALL_PLANETS.iter().enumerate() {
            assert_eq!(p.index() as usize, i);
        }
    }

    #[test]
    fn ord_matches_index() {
        for pair in ALL_PLANETS.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn from_name_round_trip() {
        for p in ALL_PLANETS {
            assert_eq!(Planet::from_name(p.name()), Some(p));
        }
        assert_eq!(Planet::from_name("Pluto"), None);
    }

    #[test]
    fn nodes() {
        assert!(Planet::Rahu.is_node());
        assert!(Planet::Ketu.is_node());
        assert!(!Planet::Sun.is_node());
    }

    #[test]
    fn lordship_dual_ruled() {
        assert_eq!(sign_lord(Rasi::Aries), Planet::Mars);
        assert_eq!(sign_lord(Rasi::Scorpio), Planet::Mars);
        assert_eq!(sign_lord(Rasi::Taurus), Planet::Venus);
        assert_eq!(sign_lord(Rasi::Libra), Planet::Venus);
        assert_eq!(sign_lord(Rasi::Gemini), Planet::Mercury);
        assert_eq!(sign_lord(Rasi::Virgo), Planet::Mercury);
        assert_eq!(sign_lord(Rasi::Sagittarius), Planet::Jupiter);
        assert_eq!(sign_lord(Rasi::Pisces), Planet::Jupiter);
        assert_eq!(sign_lord(Rasi::Capricorn), Planet::Saturn);
        assert_eq!(sign_lord(Rasi::Aquarius), Planet::Saturn);
    }

    #[test]
    fn lordship_luminaries() {
        assert_eq!(sign_lord(Rasi::Leo), Planet::Sun);
        assert_eq!(sign_lord(Rasi::Cancer), Planet::Moon);
    }

    #[test]
    fn lord_by_index() {
        assert_eq!(sign_lord_by_index(0), Some(Planet::Mars));
        assert_eq!(sign_lord_by_index(4), Some(Planet::Sun));
        assert_eq!(sign_lord_by_index(12), None);
    }
}
