use boostmark::SimulationConfig;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn simulate(c: &mut Criterion) {
    let config = SimulationConfig::new().with_rows(10_000).with_columns(50);

    c.bench_function("simulate binary 10k x 50", |b| {
        let mut rng = StdRng::seed_from_u64(42);
        b.iter(|| config.simulate_with(&mut rng).unwrap())
    });

    let config = config.with_numerical(true);
    c.bench_function("simulate numerical 10k x 50", |b| {
        let mut rng = StdRng::seed_from_u64(42);
        b.iter(|| config.simulate_with(&mut rng).unwrap())
    });
}

fn split(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let table = SimulationConfig::new()
        .with_rows(10_000)
        .with_columns(50)
        .simulate_with(&mut rng)
        .unwrap();

    c.bench_function("split 10k at 0.8", |b| {
        b.iter(|| {
            let split = table.split(black_box(0.8)).unwrap();
            black_box(split.num_train())
        })
    });
}

criterion_group!(benches, simulate, split);
criterion_main!(benches);
