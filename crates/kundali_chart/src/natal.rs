//! Natal chart computation.
//!
//! Pulls tropical raw data from the ephemeris provider, converts to the
//! requested sidereal frame, derives per-planet metadata, and builds
//! the full divisional cross-product. Pure and total for valid input;
//! the first provider failure aborts everything.

use std::collections::BTreeMap;

use kundali_base::{
    ALL_PLANETS, Planet, all_divisional_charts, degree_in_rasi, dignity_of, is_combust,
    nakshatra_index, nakshatra_name, normalize_360, pada_of, rasi_of,
};

use crate::error::ChartError;
use crate::key::chart_key;
use crate::provider::{BodyState, EphemerisProvider};
use crate::types::{BirthQuery, NatalChart, PlanetPosition};

/// Ketu from Rahu: opposite longitude, mirrored latitude, inverted
/// speed sign.
fn ketu_from_rahu(rahu: &BodyState) -> BodyState {
    BodyState {
        longitude: normalize_360(rahu.longitude + 180.0),
        latitude: -rahu.latitude,
        distance: rahu.distance,
        speed: -rahu.speed,
    }
}

fn to_position(sidereal_lon: f64, state: &BodyState, planet: Planet, sun_lon: f64) -> PlanetPosition {
    let rasi = rasi_of(sidereal_lon);
    PlanetPosition {
        longitude: sidereal_lon,
        latitude: state.latitude,
        distance: state.distance,
        speed: state.speed,
        // The mean nodes move retrograde permanently; the flag marks
        // apparent retrogression only, so they always report false.
        retrograde: !planet.is_node() && state.speed < 0.0,
        nakshatra: nakshatra_name(nakshatra_index(sidereal_lon)),
        pada: pada_of(sidereal_lon),
        rasi,
        degree_in_rasi: degree_in_rasi(sidereal_lon),
        is_combust: is_combust(planet, sidereal_lon, sun_lon),
        dignity: dignity_of(planet, rasi),
    }
}

/// Compute the full natal chart for a validated birth query.
pub fn compute_natal_chart(
    provider: &impl EphemerisProvider,
    query: &BirthQuery,
) -> Result<NatalChart, ChartError> {
    query.validate()?;

    let jd = provider.julian_day(&query.instant)?;
    let ayanamsa_value = provider.ayanamsa_value(jd, query.ayanamsa)?;
    let houses = provider.houses_placidus(jd, query.latitude, query.longitude)?;

    let ascendant = normalize_360(houses.ascendant - ayanamsa_value);
    let mut cusps = [0.0f64; 12];
    for (slot, &tropical) in cusps.iter_mut().zip(houses.cusps.iter()) {
        *slot = normalize_360(tropical - ayanamsa_value);
    }
    let midheaven = cusps[9];

    // Tropical states; Ketu is derived, never queried.
    let mut states: BTreeMap<Planet, BodyState> = BTreeMap::new();
    for planet in ALL_PLANETS {
        if planet == Planet::Ketu {
            continue;
        }
        states.insert(planet, provider.body_position(jd, planet)?);
    }
    let rahu = states
        .get(&Planet::Rahu)
        .copied()
        .ok_or(ChartError::Internal("rahu state missing"))?;
    states.insert(Planet::Ketu, ketu_from_rahu(&rahu));

    let sidereal: BTreeMap<Planet, f64> = states
        .iter()
        .map(|(&p, s)| (p, normalize_360(s.longitude - ayanamsa_value)))
        .collect();
    let sun_lon = *sidereal
        .get(&Planet::Sun)
        .ok_or(ChartError::Internal("sun state missing"))?;

    let planets: BTreeMap<Planet, PlanetPosition> = states
        .iter()
        .map(|(&p, s)| (p, to_position(sidereal[&p], s, p, sun_lon)))
        .collect();

    let divisional = all_divisional_charts(&sidereal);

    Ok(NatalChart {
        query: *query,
        julian_day: jd,
        ayanamsa_value,
        ascendant,
        midheaven,
        cusps,
        planets,
        divisional,
        chart_key: chart_key(query),
    })
}
