//! Chart-level data model.

use std::collections::BTreeMap;

use kundali_base::{Dignity, Planet};

use crate::error::ChartError;
use crate::time::UtcInstant;

/// Supported sidereal reference systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ayanamsa {
    Lahiri,
    Raman,
    Krishnamurti,
    Yukteshwar,
}

/// All supported ayanamsas.
pub const ALL_AYANAMSAS: [Ayanamsa; 4] = [
    Ayanamsa::Lahiri,
    Ayanamsa::Raman,
    Ayanamsa::Krishnamurti,
    Ayanamsa::Yukteshwar,
];

impl Ayanamsa {
    /// Canonical name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Lahiri => "Lahiri",
            Self::Raman => "Raman",
            Self::Krishnamurti => "Krishnamurti",
            Self::Yukteshwar => "Yukteshwar",
        }
    }

    /// Parse from a case-insensitive name. "KP" is accepted for
    /// Krishnamurti.
    pub fn from_name(name: &str) -> Option<Self> {
        if name.eq_ignore_ascii_case("kp") {
            return Some(Self::Krishnamurti);
        }
        ALL_AYANAMSAS
            .iter()
            .copied()
            .find(|a| a.name().eq_ignore_ascii_case(name))
    }
}

/// A validated birth event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BirthQuery {
    pub instant: UtcInstant,
    /// Geographic latitude in degrees, [-90, 90].
    pub latitude: f64,
    /// Geographic longitude in degrees, [-180, 180].
    pub longitude: f64,
    pub ayanamsa: Ayanamsa,
}

impl BirthQuery {
    /// Validated constructor.
    pub fn new(
        instant: UtcInstant,
        latitude: f64,
        longitude: f64,
        ayanamsa: Ayanamsa,
    ) -> Result<Self, ChartError> {
        let query = Self {
            instant,
            latitude,
            longitude,
            ayanamsa,
        };
        query.validate()?;
        Ok(query)
    }

    pub fn validate(&self) -> Result<(), ChartError> {
        self.instant.validate()?;
        if !self.latitude.is_finite() || !(-90.0..=90.0).contains(&self.latitude) {
            return Err(ChartError::InvalidInput("latitude must be in [-90, 90]"));
        }
        if !self.longitude.is_finite() || !(-180.0..=180.0).contains(&self.longitude) {
            return Err(ChartError::InvalidInput("longitude must be in [-180, 180]"));
        }
        Ok(())
    }
}

/// Derived sidereal position of one planet.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanetPosition {
    /// Sidereal ecliptic longitude in degrees, [0, 360).
    pub longitude: f64,
    /// Ecliptic latitude in degrees.
    pub latitude: f64,
    /// Distance in AU.
    pub distance: f64,
    /// Longitude speed in degrees/day.
    pub speed: f64,
    /// True when speed is negative.
    pub retrograde: bool,
    /// Nakshatra name.
    pub nakshatra: &'static str,
    /// Pada within the nakshatra, 1..4.
    pub pada: u8,
    /// Occupied sign, 1..12.
    pub rasi: u8,
    /// Degrees within the sign, [0, 30).
    pub degree_in_rasi: f64,
    pub is_combust: bool,
    pub dignity: Dignity,
}

/// An immutable computed natal chart.
#[derive(Debug, Clone)]
pub struct NatalChart {
    pub query: BirthQuery,
    pub julian_day: f64,
    /// Applied ayanamsa value in degrees.
    pub ayanamsa_value: f64,
    /// Sidereal ascendant in degrees.
    pub ascendant: f64,
    /// Sidereal midheaven (10th cusp) in degrees.
    pub midheaven: f64,
    /// Sidereal cusps, cusps[0] = 1st house.
    pub cusps: [f64; 12],
    pub planets: BTreeMap<Planet, PlanetPosition>,
    /// Divisional charts keyed by D-number; each maps planet → sign 1..12.
    pub divisional: BTreeMap<u16, BTreeMap<Planet, u8>>,
    /// Deterministic content key over (instant, location, ayanamsa).
    pub chart_key: u64,
}
