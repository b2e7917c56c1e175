//! Per-element cost of each tanh replacement, serial and rayon-parallel.
//!
//! Run with: `cargo bench --bench approximators`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tanh_approx::core::{apply_array, par_apply_inplace};
use tanh_approx::prelude::*;
use tanh_approx::utils::random_normal;

fn activations() -> Vec<Activation> {
    ActivationKind::ALL
        .iter()
        .map(|kind| kind.build().expect("default construction"))
        .collect()
}

fn bench_scalar(c: &mut Criterion) {
    let mut group = c.benchmark_group("tanh_scalar");
    let x = Array1::linspace(-8.0, 8.0, 1024);
    for act in activations() {
        group.bench_with_input(BenchmarkId::new(act.name(), 1024), &x, |b, x| {
            b.iter(|| {
                let mut acc = 0.0;
                for &v in x.iter() {
                    acc += act.apply(black_box(v));
                }
                black_box(acc)
            })
        });
    }
    group.finish();
}

fn bench_array(c: &mut Criterion) {
    let mut group = c.benchmark_group("tanh_array");
    for &n in &[1 << 10, 1 << 14, 1 << 18] {
        let x = random_normal((n,), 42).expect("normal distribution");
        for act in activations() {
            group.bench_with_input(BenchmarkId::new(format!("{}/serial", act.name()), n), &x, |b, x| {
                b.iter(|| black_box(apply_array(&act, black_box(x))))
            });

            group.bench_with_input(BenchmarkId::new(format!("{}/parallel", act.name()), n), &x, |b, x| {
                let mut y = x.clone();
                b.iter(|| {
                    y.assign(x);
                    par_apply_inplace(&act, &mut y);
                    black_box(&y);
                })
            });
        }
    }
    group.finish();
}

fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("tanh_construction");
    group.bench_function("PPA", |b| b.iter(|| black_box(Ppa::new().expect("fit"))));
    group.bench_function("HLPA", |b| b.iter(|| black_box(Hlpa::new().expect("fit"))));
    group.finish();
}

criterion_group!(benches, bench_scalar, bench_array, bench_construction);
criterion_main!(benches);
