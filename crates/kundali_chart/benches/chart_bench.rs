use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kundali_base::Planet;
use kundali_base::dasha::DashaSystem;
use kundali_chart::{
    Ayanamsa, BirthQuery, BodyState, ChartError, EphemerisProvider, Houses, UtcInstant,
    compute_natal_chart, dasha_snapshot,
};

struct BenchProvider;

impl EphemerisProvider for BenchProvider {
    fn julian_day(&self, instant: &UtcInstant) -> Result<f64, ChartError> {
        Ok(instant.to_jd())
    }

    fn ayanamsa_value(&self, _jd: f64, _ayanamsa: Ayanamsa) -> Result<f64, ChartError> {
        Ok(23.85)
    }

    fn houses_placidus(
        &self,
        _jd: f64,
        _latitude: f64,
        _longitude: f64,
    ) -> Result<Houses, ChartError> {
        let mut cusps = [0.0; 12];
        for (i, slot) in cusps.iter_mut().enumerate() {
            *slot = (102.5 + 30.0 * i as f64) % 360.0;
        }
        Ok(Houses {
            ascendant: 102.5,
            cusps,
        })
    }

    fn body_position(&self, _jd: f64, planet: Planet) -> Result<BodyState, ChartError> {
        Ok(BodyState {
            longitude: (f64::from(planet.index()) * 41.7) % 360.0,
            latitude: 0.4,
            distance: 1.0,
            speed: 1.0,
        })
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

fn natal_bench(c: &mut Criterion) {
    let q = query();
    c.bench_function("compute_natal_chart", |b| {
        b.iter(|| compute_natal_chart(&BenchProvider, black_box(&q)))
    });
}

fn snapshot_bench(c: &mut Criterion) {
    let chart = compute_natal_chart(&BenchProvider, &query()).unwrap();
    let query_jd = chart.julian_day + 12_000.0;

    c.bench_function("dasha_snapshot_depth5", |b| {
        b.iter(|| {
            dasha_snapshot(
                black_box(&chart),
                DashaSystem::Vimshottari,
                black_box(query_jd),
                5,
            )
        })
    });
}

criterion_group!(benches, natal_bench, snapshot_bench);
criterion_main!(benches);
