use criterion::{black_box, criterion_group, criterion_main, Criterion};

use aerolift_core::{
    uncertain::{MidpointDistribution, MonteCarloSampler},
    AirfoilConfig, AirfoilModel,
};

fn bench_update(c: &mut Criterion) {
    let mut stratified = AirfoilModel::from_config(AirfoilConfig::cessna_172());
    c.bench_function("update_stratified_256", |b| {
        b.iter(|| {
            stratified
                .update(black_box(300.0), black_box(101_000.0), black_box(102_900.0))
                .map(|obs| obs.lift_force.mean())
        })
    });

    let mut monte_carlo = AirfoilModel::from_config(AirfoilConfig::cessna_172())
        .with_distribution(MonteCarloSampler::default());
    c.bench_function("update_monte_carlo_256", |b| {
        b.iter(|| {
            monte_carlo
                .update(black_box(300.0), black_box(101_000.0), black_box(102_900.0))
                .map(|obs| obs.lift_force.mean())
        })
    });

    let mut nominal = AirfoilModel::from_config(AirfoilConfig::cessna_172())
        .with_distribution(MidpointDistribution);
    c.bench_function("update_midpoint_256", |b| {
        b.iter(|| {
            nominal
                .update(black_box(300.0), black_box(101_000.0), black_box(102_900.0))
                .map(|obs| obs.lift_force.mean())
        })
    });
}

criterion_group!(benches, bench_update);
criterion_main!(benches);
