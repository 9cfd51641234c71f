#![allow(missing_docs)]

use criterion::{Criterion, criterion_group, criterion_main};
use grimscale_utils::noise::{OpenSimplexNoise, PermutationTable};
use std::hint::black_box;

fn bench_sample(c: &mut Criterion) {
    let noise = OpenSimplexNoise::from_seed(0);

    c.bench_function("open_simplex_sample_line", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for i in 0..64 {
                let x = f64::from(i) * 0.37;
                acc += noise.sample(black_box(x), black_box(x * 0.51));
            }
            acc
        });
    });
}

fn bench_table_derivation(c: &mut Criterion) {
    c.bench_function("permutation_from_seed", |b| {
        b.iter(|| PermutationTable::from_seed(black_box(12345)));
    });
}

criterion_group!(benches, bench_sample, bench_table_derivation);
criterion_main!(benches);
