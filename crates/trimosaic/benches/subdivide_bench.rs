//! Criterion benchmarks for the subdivision engine.
//! Focus sizes: square grids with side in {32, 64, 128, 256}.
//! Results land under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};
use trimosaic::api::{split_by_ref, triangulate, Color, MosaicCfg, SampleGrid};
use trimosaic::geom::pt;

/// Smooth gradient with a little seeded noise, closer to a photo than pure noise.
fn noisy_gradient(side: u32, seed: u64) -> SampleGrid {
    let mut rng = StdRng::seed_from_u64(seed);
    SampleGrid::from_fn(side, side, |x, y| {
        let base = 255.0 * (x + y) as f64 / (2 * side) as f64;
        let n: f64 = rng.gen_range(-20.0..20.0);
        Color([base + n, 128.0 + n, 255.0 - base])
    })
}

fn bench_triangulate(c: &mut Criterion) {
    let mut group = c.benchmark_group("triangulate");
    for &side in &[32u32, 64, 128, 256] {
        for parallel in [false, true] {
            let cfg = MosaicCfg {
                parallel,
                ..MosaicCfg::default()
            };
            let id = if parallel { "parallel" } else { "serial" };
            group.bench_with_input(BenchmarkId::new(id, side), &side, |b, &side| {
                b.iter_batched(
                    || noisy_gradient(side, 42),
                    |grid| {
                        let _m = triangulate(grid, &cfg).unwrap();
                    },
                    BatchSize::LargeInput,
                )
            });
        }
    }
    group.finish();
}

fn bench_split(c: &mut Criterion) {
    let grid = noisy_gradient(256, 7);
    c.bench_function("split_256", |b| {
        b.iter(|| split_by_ref(&grid.samples, pt(0.0, 0.0), pt(256.0, 256.0), pt(256.0, 0.0)))
    });
}

criterion_group!(benches, bench_triangulate, bench_split);
criterion_main!(benches);
