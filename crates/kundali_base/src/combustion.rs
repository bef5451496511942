//! Combustion: a planet within its orb of the Sun.
//!
//! Orbs are fixed per planet. Separation uses the minimum angular
//! distance, so conjunctions across the 0°/360° seam are handled.
//! A planet exactly at its orb limit counts as combust.

use crate::planet::Planet;
use crate::util::min_separation;

/// Combustion orb in degrees. None for the Sun itself and the nodes,
/// which are never combust.
pub const fn combustion_orb(planet: Planet) -> Option<f64> {
    match planet {
        Planet::Moon => Some(12.0),
        Planet::Mars => Some(17.0),
        Planet::Mercury => Some(14.0),
        Planet::Jupiter => Some(11.0),
        Planet::Venus => Some(10.0),
        Planet::Saturn => Some(15.0),
        Planet::Sun | Planet::Rahu | Planet::Ketu => None,
    }
}

/// Whether a planet is combust given its and the Sun's sidereal longitudes.
pub fn is_combust(planet: Planet, planet_lon: f64, sun_lon: f64) -> bool {
    match combustion_orb(planet) {
        Some(orb) => min_separation(planet_lon, sun_lon) <= orb,
        None => false,
    }
}
