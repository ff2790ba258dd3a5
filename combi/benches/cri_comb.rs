use criterion::{criterion_group, criterion_main, Criterion};

use combi::comb::{combination, permutation};
use combi::factorial::factorial;

fn criterion_benchmark(c: &mut Criterion) {
    // sanity check
    assert_eq!(Some(1330), combination(21, 3).unwrap().exact());

    c.bench_function("cri_factorial_34", |b| {
        b.iter(|| factorial(34));
    });
    c.bench_function("cri_factorial_170", |b| {
        b.iter(|| factorial(170));
    });
    c.bench_function("cri_permutation_170p10", |b| {
        b.iter(|| permutation(170, 10));
    });
    c.bench_function("cri_combination_128c64", |b| {
        b.iter(|| combination(128, 64));
    });
    c.bench_function("cri_combination_170c85", |b| {
        b.iter(|| combination(170, 85));
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
