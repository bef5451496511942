//! Divisional (varga) chart transforms.
//!
//! A varga of order N splits each 30-degree sign into N equal slots and
//! maps (sign, slot) to a resulting sign. D1, D2, D3, and D9 carry
//! dedicated mapping rules; every other supported order uses the generic
//! forward-count rule. 20 orders are supported; any other order is
//! rejected with `UnsupportedVarga`.

use std::collections::BTreeMap;

use crate::error::KundaliError;
use crate::planet::Planet;
use crate::util::normalize_360;

/// The 20 supported divisional charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Varga {
    Rasi,
    Hora,
    Drekkana,
    Chaturthamsa,
    Panchamsa,
    Shashthamsa,
    Saptamsa,
    Ashtamsa,
    Navamsa,
    Dasamsa,
    Ekadasamsa,
    Dwadasamsa,
    Shodasamsa,
    Vimsamsa,
    Chaturvimsamsa,
    Saptavimsamsa,
    Trimsamsa,
    Khavedamsa,
    Akshavedamsa,
    Shashtiamsa,
}

/// All supported vargas in ascending division order.
pub const ALL_VARGAS: [Varga; 20] = [
    Varga::Rasi,
    Varga::Hora,
    Varga::Drekkana,
    Varga::Chaturthamsa,
    Varga::Panchamsa,
    Varga::Shashthamsa,
    Varga::Saptamsa,
    Varga::Ashtamsa,
    Varga::Navamsa,
    Varga::Dasamsa,
    Varga::Ekadasamsa,
    Varga::Dwadasamsa,
    Varga::Shodasamsa,
    Varga::Vimsamsa,
    Varga::Chaturvimsamsa,
    Varga::Saptavimsamsa,
    Varga::Trimsamsa,
    Varga::Khavedamsa,
    Varga::Akshavedamsa,
    Varga::Shashtiamsa,
];

impl Varga {
    /// Number of divisions per sign (the D-number).
    pub const fn divisions(self) -> u16 {
        match self {
            Self::Rasi => 1,
            Self::Hora => 2,
            Self::Drekkana => 3,
            Self::Chaturthamsa => 4,
            Self::Panchamsa => 5,
            Self::Shashthamsa => 6,
            Self::Saptamsa => 7,
            Self::Ashtamsa => 8,
            Self::Navamsa => 9,
            Self::Dasamsa => 10,
            Self::Ekadasamsa => 11,
            Self::Dwadasamsa => 12,
            Self::Shodasamsa => 16,
            Self::Vimsamsa => 20,
            Self::Chaturvimsamsa => 24,
            Self::Saptavimsamsa => 27,
            Self::Trimsamsa => 30,
            Self::Khavedamsa => 40,
            Self::Akshavedamsa => 45,
            Self::Shashtiamsa => 60,
        }
    }

    /// Traditional name of the divisional chart.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rasi => "Rasi",
            Self::Hora => "Hora",
            Self::Drekkana => "Drekkana",
            Self::Chaturthamsa => "Chaturthamsa",
            Self::Panchamsa => "Panchamsa",
            Self::Shashthamsa => "Shashthamsa",
            Self::Saptamsa => "Saptamsa",
            Self::Ashtamsa => "Ashtamsa",
            Self::Navamsa => "Navamsa",
            Self::Dasamsa => "Dasamsa",
            Self::Ekadasamsa => "Ekadasamsa",
            Self::Dwadasamsa => "Dwadasamsa",
            Self::Shodasamsa => "Shodasamsa",
            Self::Vimsamsa => "Vimsamsa",
            Self::Chaturvimsamsa => "Chaturvimsamsa",
            Self::Saptavimsamsa => "Saptavimsamsa",
            Self::Trimsamsa => "Trimsamsa",
            Self::Khavedamsa => "Khavedamsa",
            Self::Akshavedamsa => "Akshavedamsa",
            Self::Shashtiamsa => "Shashtiamsa",
        }
    }

    /// Varga from its D-number. Returns an error for unsupported orders.
    pub fn from_code(code: u16) -> Result<Self, KundaliError> {
        ALL_VARGAS
            .iter()
            .copied()
            .find(|v| v.divisions() == code)
            .ok_or(KundaliError::UnsupportedVarga(code))
    }
}

/// Sign occupied by a longitude in a divisional chart, 1-indexed.
///
/// The sign is split into `divisions()` equal slots; the occupied slot
/// and the natal sign determine the result:
/// - D1: the natal sign itself.
/// - D2: first half of an even-index sign maps to Leo, second half to
///   Virgo; odd-index signs reversed.
/// - D3: natal sign, then 5th, then 9th (step of 4 signs per slot).
/// - D9: sign-derived starting offset, advancing one sign per slot.
/// - Everything else: count `slot` signs forward from the natal sign.
pub fn divisional_position(longitude: f64, varga: Varga) -> u8 {
    let lon = normalize_360(longitude);
    let rasi0 = ((lon / 30.0).floor() as usize).min(11);
    let deg = lon - (rasi0 as f64) * 30.0;
    let n = varga.divisions() as usize;
    let slot = (((deg / 30.0) * n as f64).floor() as usize).min(n - 1);

    let result = match varga {
        Varga::Rasi => rasi0,
        Varga::Hora => {
            if rasi0 % 2 == 0 {
                if slot == 0 { 4 } else { 5 }
            } else if slot == 0 {
                5
            } else {
                4
            }
        }
        Varga::Drekkana => (rasi0 + slot * 4) % 12,
        Varga::Navamsa => ((rasi0 % 3) * 3 + rasi0 / 3 + slot) % 12,
        _ => (rasi0 + slot) % 12,
    };

    (result + 1) as u8
}

/// Divisional position by raw D-number.
pub fn divisional_position_by_code(longitude: f64, code: u16) -> Result<u8, KundaliError> {
    Ok(divisional_position(longitude, Varga::from_code(code)?))
}

/// Build all 20 divisional charts for a set of planet longitudes.
///
/// Keyed by D-number, each chart maps planet to its 1-indexed sign.
pub fn all_divisional_charts(
    longitudes: &BTreeMap<Planet, f64>,
) -> BTreeMap<u16, BTreeMap<Planet, u8>> {
    let mut charts = BTreeMap::new();
    for varga in ALL_VARGAS {
        let chart: BTreeMap<Planet, u8> = longitudes
            .iter()
            .map(|(&p, &lon)| (p, divisional_position(lon, varga)))
            .collect();
        charts.insert(varga.divisions(), chart);
    }
    charts
}
