use std::collections::BTreeMap;

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kundali_base::dasha::{expand_tree, maha_periods, snapshot_at, vimshottari};
use kundali_base::{
    ALL_PLANETS, Varga, all_divisional_charts, compute_ashtakavarga, divisional_position,
};

fn varga_bench(c: &mut Criterion) {
    let lon = 123.456;

    let mut group = c.benchmark_group("varga");
    group.bench_function("divisional_position_d9", |b| {
        b.iter(|| divisional_position(black_box(lon), Varga::Navamsa))
    });
    let lons: BTreeMap<_, _> = ALL_PLANETS
        .iter()
        .enumerate()
        .map(|(i, &p)| (p, (i as f64) * 37.5))
        .collect();
    group.bench_function("all_divisional_charts", |b| {
        b.iter(|| all_divisional_charts(black_box(&lons)))
    });
    group.finish();
}

fn dasha_bench(c: &mut Criterion) {
    let birth_jd = 2_451_545.0;
    let moon_lon = 123.456;
    let rs = vimshottari();

    let mut group = c.benchmark_group("dasha");
    group.bench_function("maha_periods", |b| {
        b.iter(|| maha_periods(black_box(birth_jd), black_box(moon_lon), &rs, 120.0))
    });
    group.bench_function("expand_tree_depth3", |b| {
        b.iter(|| expand_tree(black_box(birth_jd), black_box(moon_lon), &rs, 3, 120.0))
    });
    group.bench_function("snapshot_depth5", |b| {
        b.iter(|| {
            snapshot_at(
                black_box(birth_jd),
                black_box(moon_lon),
                &rs,
                black_box(birth_jd + 10_000.0),
                5,
                120.0,
            )
        })
    });
    group.finish();
}

fn ashtakavarga_bench(c: &mut Criterion) {
    let rasis = [3u8, 7, 0, 11, 5, 9, 2];

    c.bench_function("ashtakavarga_full", |b| {
        b.iter(|| compute_ashtakavarga(black_box(&rasis), black_box(1)))
    });
}

criterion_group!(benches, varga_bench, dasha_bench, ashtakavarga_bench);
criterion_main!(benches);
