use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use minefield_core::{BoardGenerator, GameConfig, ShuffleGenerator};

const TIERS: &[(&str, (u8, u8), u16)] = &[
    ("default", (10, 10), 10),
    ("dense", (10, 10), 90),
    ("full", (10, 10), 100),
    ("large", (255, 255), 12000),
];

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    for &(name, size, mines) in TIERS {
        let config = GameConfig::new(size, mines).expect("benchmark tiers are valid");
        group.bench_with_input(BenchmarkId::from_parameter(name), &config, |b, &config| {
            let mut seed = 0u64;
            b.iter(|| {
                seed = seed.wrapping_add(1);
                black_box(ShuffleGenerator::new(seed).generate(black_box(config)))
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_generate);
criterion_main!(benches);
