//! End-to-end natal computation against a deterministic fake provider.

use kundali_base::dasha::{DashaLord, DashaSystem};
use kundali_base::{Dignity, Planet};
use kundali_chart::{
    Ayanamsa, BirthQuery, BodyState, ChartError, EphemerisProvider, Houses, UtcInstant,
    ashtakavarga_for_chart, compute_natal_chart, dasha_snapshot, dasha_tree,
};

/// Fixed tropical ephemeris with a 24-degree ayanamsa, giving known
/// sidereal positions: Sun 15, Moon 100, Venus 25, Jupiter 0.
struct FakeProvider;

const AYANAMSA: f64 = 24.0;

impl FakeProvider {
    fn tropical(planet: Planet) -> BodyState {
        let (longitude, latitude, speed) = match planet {
            Planet::Sun => (39.0, 0.0, 0.9856),
            Planet::Moon => (124.0, 4.2, 13.18),
            Planet::Mercury => (52.0, 1.1, 1.3),
            Planet::Venus => (49.0, -0.8, 1.2),
            Planet::Mars => (210.0, 0.5, 0.52),
            Planet::Jupiter => (24.0, -1.0, 0.083),
            Planet::Saturn => (305.0, 2.1, -0.03),
            Planet::Rahu => (170.0, 0.0, -0.053),
            Planet::Ketu => unreachable!("ketu is derived, never queried"),
        };
        BodyState {
            longitude,
            latitude,
            distance: 1.0,
            speed,
        }
    }
}

impl EphemerisProvider for FakeProvider {
    fn julian_day(&self, instant: &UtcInstant) -> Result<f64, ChartError> {
        Ok(instant.to_jd())
    }

    fn ayanamsa_value(&self, _jd: f64, _ayanamsa: Ayanamsa) -> Result<f64, ChartError> {
        Ok(AYANAMSA)
    }

    fn houses_placidus(
        &self,
        _jd: f64,
        _latitude: f64,
        _longitude: f64,
    ) -> Result<Houses, ChartError> {
        let ascendant = 114.0;
        let mut cusps = [0.0; 12];
        for (i, slot) in cusps.iter_mut().enumerate() {
            *slot = (ascendant + 30.0 * i as f64) % 360.0;
        }
        Ok(Houses { ascendant, cusps })
    }

    fn body_position(&self, _jd: f64, planet: Planet) -> Result<BodyState, ChartError> {
        Ok(Self::tropical(planet))
    }
}

/// Provider that fails on every body query.
struct BrokenProvider;

impl EphemerisProvider for BrokenProvider {
    fn julian_day(&self, instant: &UtcInstant) -> Result<f64, ChartError> {
        Ok(instant.to_jd())
    }

    fn ayanamsa_value(&self, _jd: f64, _ayanamsa: Ayanamsa) -> Result<f64, ChartError> {
        Ok(AYANAMSA)
    }

    fn houses_placidus(
        &self,
        _jd: f64,
        _latitude: f64,
        _longitude: f64,
    ) -> Result<Houses, ChartError> {
        Ok(Houses {
            ascendant: 0.0,
            cusps: [0.0; 12],
        })
    }

    fn body_position(&self, _jd: f64, _planet: Planet) -> Result<BodyState, ChartError> {
        Err(ChartError::Upstream("ephemeris offline".into()))
    }
}

fn query() -> BirthQuery {
    BirthQuery::new(
        UtcInstant::new(1990, 5, 15, 10, 30, 0.0).unwrap(),
        28.61,
        77.23,
        Ayanamsa::Lahiri,
    )
    .unwrap()
}

#[test]
fn known_scenario_sun_and_moon() {
    let chart = compute_natal_chart(&FakeProvider, &query()).unwrap();

    let sun = &chart.planets[&Planet::Sun];
    assert!((sun.longitude - 15.0).abs() < 1e-9);
    assert_eq!(sun.rasi, 1);
    assert!((sun.degree_in_rasi - 15.0).abs() < 1e-9);
    assert_eq!(sun.dignity, Dignity::Exalted);

    let moon = &chart.planets[&Planet::Moon];
    assert!((moon.longitude - 100.0).abs() < 1e-9);
    assert_eq!(moon.rasi, 4);
    assert_eq!(moon.nakshatra, "Pushya");
    assert_eq!(moon.pada, 3);
    assert_eq!(moon.dignity, Dignity::Own);
}

#[test]
fn deterministic_with_identical_key() {
    let a = compute_natal_chart(&FakeProvider, &query()).unwrap();
    let b = compute_natal_chart(&FakeProvider, &query()).unwrap();
    assert_eq!(a.chart_key, b.chart_key);
    assert_eq!(a.planets, b.planets);
    assert_eq!(a.divisional, b.divisional);
    assert!((a.ascendant - b.ascendant).abs() < 1e-12);
}

#[test]
fn different_ayanamsa_changes_key() {
    let a = compute_natal_chart(&FakeProvider, &query()).unwrap();
    let mut other = query();
    other.ayanamsa = Ayanamsa::Raman;
    let b = compute_natal_chart(&FakeProvider, &other).unwrap();
    assert_ne!(a.chart_key, b.chart_key);
}

#[test]
fn ketu_derived_from_rahu() {
    let chart = compute_natal_chart(&FakeProvider, &query()).unwrap();
    let rahu = &chart.planets[&Planet::Rahu];
    let ketu = &chart.planets[&Planet::Ketu];
    assert!((ketu.longitude - (rahu.longitude + 180.0) % 360.0).abs() < 1e-9);
    assert!((ketu.latitude + rahu.latitude).abs() < 1e-12);
    assert!((ketu.speed + rahu.speed).abs() < 1e-12);
    assert_eq!(ketu.dignity, Dignity::Neutral);
}

#[test]
fn combustion_boundary_inclusive() {
    // Venus sidereal 25, Sun sidereal 15: separation exactly the
    // 10-degree orb, which counts as combust.
    let chart = compute_natal_chart(&FakeProvider, &query()).unwrap();
    assert!(chart.planets[&Planet::Venus].is_combust);
    // Moon at 100 is far outside its 12-degree orb
    assert!(!chart.planets[&Planet::Moon].is_combust);
    assert!(!chart.planets[&Planet::Sun].is_combust);
}

#[test]
fn retrograde_from_speed_sign() {
    let chart = compute_natal_chart(&FakeProvider, &query()).unwrap();
    assert!(chart.planets[&Planet::Saturn].retrograde);
    assert!(!chart.planets[&Planet::Sun].retrograde);
}

#[test]
fn nodes_never_flagged_retrograde() {
    // Rahu's mean motion is always negative, but the flag marks
    // apparent retrogression only
    let chart = compute_natal_chart(&FakeProvider, &query()).unwrap();
    assert!(chart.planets[&Planet::Rahu].speed < 0.0);
    assert!(!chart.planets[&Planet::Rahu].retrograde);
    assert!(!chart.planets[&Planet::Ketu].retrograde);
}

#[test]
fn houses_converted_to_sidereal() {
    let chart = compute_natal_chart(&FakeProvider, &query()).unwrap();
    assert!((chart.ascendant - 90.0).abs() < 1e-9);
    assert!((chart.cusps[0] - 90.0).abs() < 1e-9);
    assert!((chart.midheaven - chart.cusps[9]).abs() < 1e-12);
    for cusp in chart.cusps {
        assert!((0.0..360.0).contains(&cusp));
    }
}

#[test]
fn divisional_cross_product_complete() {
    let chart = compute_natal_chart(&FakeProvider, &query()).unwrap();
    assert_eq!(chart.divisional.len(), 20);
    // D1 mirrors the rasi placements
    for (planet, position) in &chart.planets {
        assert_eq!(chart.divisional[&1][planet], position.rasi);
    }
    // Jupiter at sidereal 0: first navamsa of Aries
    assert_eq!(chart.divisional[&9][&Planet::Jupiter], 1);
}

#[test]
fn provider_failure_aborts_whole_chart() {
    let result = compute_natal_chart(&BrokenProvider, &query());
    assert!(matches!(result, Err(ChartError::Upstream(_))));
}

#[test]
fn invalid_query_rejected_before_provider() {
    let mut bad = query();
    bad.latitude = 91.0;
    assert!(matches!(
        compute_natal_chart(&FakeProvider, &bad),
        Err(ChartError::InvalidInput(_))
    ));
}

#[test]
fn vimshottari_tree_from_chart() {
    let chart = compute_natal_chart(&FakeProvider, &query()).unwrap();
    let tree = dasha_tree(&chart, DashaSystem::Vimshottari, 2).unwrap();
    assert_eq!(tree.levels.len(), 2);
    // Moon at 100 (Pushya) starts the Saturn mahadasha
    assert_eq!(tree.levels[0][0].lord, DashaLord::Planet(Planet::Saturn));
    // Antardashas tile their parents
    let n0 = tree.levels[0].len();
    assert_eq!(tree.levels[1].len(), n0 * 9);
}

#[test]
fn snapshot_from_chart_drills_active_chain() {
    let chart = compute_natal_chart(&FakeProvider, &query()).unwrap();
    let query_jd = chart.julian_day + 10_000.0;
    let snap = dasha_snapshot(&chart, DashaSystem::Vimshottari, query_jd, 5).unwrap();
    assert_eq!(snap.periods.len(), 5);
    for period in &snap.periods {
        assert!(period.contains(query_jd));
    }
}

#[test]
fn chara_tree_from_chart() {
    let chart = compute_natal_chart(&FakeProvider, &query()).unwrap();
    let tree = dasha_tree(&chart, DashaSystem::Chara, 2).unwrap();
    assert_eq!(tree.levels[0].len(), 12);
    // Ascendant at sidereal 90 (Cancer, 0-based 3) rules the first period
    assert_eq!(tree.levels[0][0].lord, DashaLord::Sign(3));
}

#[test]
fn ashtakavarga_from_chart() {
    let chart = compute_natal_chart(&FakeProvider, &query()).unwrap();
    let result = ashtakavarga_for_chart(&chart).unwrap();
    assert_eq!(result.summary.total_points, 337);
    let sav_sum: u16 = result.sav.iter().sum();
    assert_eq!(sav_sum, 337);
}
