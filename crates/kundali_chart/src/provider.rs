//! The ephemeris provider seam.
//!
//! All raw astronomy (body positions, house cusps, ayanamsa values,
//! timescale handling) comes from outside through this trait; the chart
//! layer only performs sidereal conversion and derivation on top. Any
//! provider failure aborts the whole chart computation.

use kundali_base::Planet;

use crate::error::ChartError;
use crate::time::UtcInstant;
use crate::types::Ayanamsa;

/// Tropical house output for one instant and location.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Houses {
    /// Tropical ascendant longitude in degrees.
    pub ascendant: f64,
    /// Tropical cusp longitudes in degrees, cusps[0] = 1st house.
    pub cusps: [f64; 12],
}

/// Tropical state of one body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyState {
    /// Tropical ecliptic longitude in degrees.
    pub longitude: f64,
    /// Ecliptic latitude in degrees.
    pub latitude: f64,
    /// Distance in AU.
    pub distance: f64,
    /// Longitude speed in degrees/day; negative when retrograde.
    pub speed: f64,
}

/// External ephemeris collaborator.
///
/// Implementations must be pure with respect to their inputs: the same
/// arguments always produce the same outputs. Rahu is queried as the
/// lunar node; Ketu is never queried (it is derived from Rahu).
pub trait EphemerisProvider {
    /// Julian day for a UTC instant.
    fn julian_day(&self, instant: &UtcInstant) -> Result<f64, ChartError>;

    /// Ayanamsa value in degrees for a Julian day.
    fn ayanamsa_value(&self, jd: f64, ayanamsa: Ayanamsa) -> Result<f64, ChartError>;

    /// Placidus houses (tropical) for a Julian day and geographic location.
    fn houses_placidus(&self, jd: f64, latitude: f64, longitude: f64)
    -> Result<Houses, ChartError>;

    /// Tropical state of a body at a Julian day.
    fn body_position(&self, jd: f64, planet: Planet) -> Result<BodyState, ChartError>;
}
