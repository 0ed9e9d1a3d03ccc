//! Benchmarks for unique sampling and full dataset generation.
//!
//! Tests:
//! - Rejection vs shuffle sampling as the draw count approaches the population
//! - End-to-end generation and rendering at the default store volumes

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::hint::black_box;
use store_seed::{
    draw_distinct, render_to_string, Generator, RenderOptions, SamplerStrategy, VolumeConfig,
};

/// Benchmark both strategies with a growing share of the population drawn
fn bench_draw_distinct(c: &mut Criterion) {
    let mut group = c.benchmark_group("draw_distinct");

    let population = 500;

    for count in [3usize, 50, 250, 500] {
        group.throughput(Throughput::Elements(count as u64));
        for strategy in [SamplerStrategy::Rejection, SamplerStrategy::Shuffle] {
            group.bench_with_input(
                BenchmarkId::new(strategy.to_string(), format!("{}_of_{}", count, population)),
                &count,
                |b, &count| {
                    let mut rng = ChaCha8Rng::seed_from_u64(42);
                    b.iter(|| {
                        let ids = draw_distinct(&mut rng, population, count, strategy).unwrap();
                        black_box(ids.len())
                    })
                },
            );
        }
    }

    group.finish();
}

/// Benchmark generating and rendering the default volumes
fn bench_generate_default(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    group.sample_size(10);

    group.bench_function("default_volumes", |b| {
        b.iter(|| {
            let config = VolumeConfig {
                seed: Some(42),
                ..Default::default()
            };
            let data = Generator::new(config).unwrap().generate().unwrap();
            let sql = render_to_string(&data, RenderOptions::default()).unwrap();
            black_box(sql.len())
        })
    });

    group.finish();
}

criterion_group!(benches, bench_draw_distinct, bench_generate_default);
criterion_main!(benches);
