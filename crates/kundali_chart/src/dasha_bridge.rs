//! Chart-level dasha and ashtakavarga entry points.
//!
//! Dispatches a computed chart to the right engine: nakshatra systems
//! run off the Moon's sidereal longitude, Chara assembles its sign
//! inputs from the whole chart.

use kundali_base::dasha::{
    CharaInputs, DEFAULT_NUM_YEARS, DashaSnapshot, DashaSystem, DashaTree, chara_snapshot_at,
    chara_tree, expand_tree, ruleset_for, snapshot_at,
};
use kundali_base::{ALL_PLANETS, AshtakavargaResult, Planet, SAPTA_PLANETS, compute_ashtakavarga};

use crate::error::ChartError;
use crate::types::NatalChart;

fn moon_longitude(chart: &NatalChart) -> Result<f64, ChartError> {
    chart
        .planets
        .get(&Planet::Moon)
        .map(|p| p.longitude)
        .ok_or(ChartError::Internal("moon position missing"))
}

fn chara_inputs(chart: &NatalChart) -> Result<CharaInputs, ChartError> {
    let mut planet_rasis = [0u8; 9];
    for (slot, &planet) in planet_rasis.iter_mut().zip(ALL_PLANETS.iter()) {
        let position = chart
            .planets
            .get(&planet)
            .ok_or(ChartError::Internal("planet position missing"))?;
        *slot = position.rasi - 1;
    }
    Ok(CharaInputs {
        lagna_sidereal_lon: chart.ascendant,
        planet_rasis,
    })
}

/// Materialized dasha forest for a chart, down to `depth` levels.
pub fn dasha_tree(
    chart: &NatalChart,
    system: DashaSystem,
    depth: u8,
) -> Result<DashaTree, ChartError> {
    match ruleset_for(system) {
        Some(rs) => {
            let moon = moon_longitude(chart)?;
            Ok(expand_tree(chart.julian_day, moon, &rs, depth, DEFAULT_NUM_YEARS)?)
        }
        None => {
            let inputs = chara_inputs(chart)?;
            Ok(chara_tree(chart.julian_day, &inputs, depth)?)
        }
    }
}

/// Active dasha chain for a chart at `query_jd`.
pub fn dasha_snapshot(
    chart: &NatalChart,
    system: DashaSystem,
    query_jd: f64,
    depth: u8,
) -> Result<DashaSnapshot, ChartError> {
    match ruleset_for(system) {
        Some(rs) => {
            let moon = moon_longitude(chart)?;
            Ok(snapshot_at(
                chart.julian_day,
                moon,
                &rs,
                query_jd,
                depth,
                DEFAULT_NUM_YEARS,
            )?)
        }
        None => {
            let inputs = chara_inputs(chart)?;
            Ok(chara_snapshot_at(chart.julian_day, &inputs, query_jd, depth)?)
        }
    }
}

/// Ashtakavarga for a chart under the standard rules.
pub fn ashtakavarga_for_chart(chart: &NatalChart) -> Result<AshtakavargaResult, ChartError> {
    let mut planet_rasis = [0u8; 7];
    for (slot, &planet) in planet_rasis.iter_mut().zip(SAPTA_PLANETS.iter()) {
        let position = chart
            .planets
            .get(&planet)
            .ok_or(ChartError::Internal("planet position missing"))?;
        *slot = position.rasi - 1;
    }
    let lagna_rasi = kundali_base::rasi_of(chart.ascendant) - 1;
    Ok(compute_ashtakavarga(&planet_rasis, lagna_rasi))
}
