//! Sequential vs parallel kernel forms, grouped per kernel.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use gauntlet_bench::{criterion_sizes, BENCH_SEED};
use gauntlet_kernels::monte_carlo::DEFAULT_WORKERS;
use gauntlet_kernels::reduction::DEFAULT_CHUNK;
use gauntlet_kernels::{
    count_primes, datasets, estimate_pi, heavy_loop, merge_sort, multiply, par_count_primes,
    par_estimate_pi, par_heavy_loop, par_merge_sort, par_multiply, par_sum, pipeline_flow,
    simulate, sum, TaskGraph,
};

fn bench_heavy_loop(c: &mut Criterion) {
    let mut out = datasets::zeros(criterion_sizes().simple_loop_len);
    let mut group = c.benchmark_group("heavy_loop");
    group.bench_function("sequential", |b| b.iter(|| heavy_loop(black_box(&mut out))));
    group.bench_function("parallel", |b| b.iter(|| par_heavy_loop(black_box(&mut out))));
    group.finish();
}

fn bench_sum(c: &mut Criterion) {
    let data = datasets::uniform(criterion_sizes().reduction_len, BENCH_SEED);
    let mut group = c.benchmark_group("sum");
    group.bench_function("sequential", |b| b.iter(|| black_box(sum(&data))));
    group.bench_function("parallel", |b| {
        b.iter(|| black_box(par_sum(&data, DEFAULT_CHUNK).unwrap()))
    });
    group.finish();
}

fn bench_tasks(c: &mut Criterion) {
    let graph = TaskGraph::sine_cosine(criterion_sizes().task_iterations);
    let mut group = c.benchmark_group("tasks");
    group.bench_function("sequential", |b| b.iter(|| black_box(graph.run_sequential().unwrap())));
    group.bench_function("concurrent", |b| b.iter(|| black_box(graph.run_concurrent().unwrap())));
    group.finish();
}

fn bench_monte_carlo(c: &mut Criterion) {
    let samples = criterion_sizes().monte_carlo_samples;
    let mut group = c.benchmark_group("monte_carlo_pi");
    group.bench_function("sequential", |b| {
        b.iter(|| black_box(estimate_pi(samples, BENCH_SEED).unwrap()))
    });
    group.bench_function("parallel", |b| {
        b.iter(|| black_box(par_estimate_pi(samples, DEFAULT_WORKERS, BENCH_SEED).unwrap()))
    });
    group.finish();
}

fn bench_matmul(c: &mut Criterion) {
    let a = datasets::modulo_matrix(criterion_sizes().matrix_order).unwrap();
    let mut group = c.benchmark_group("matmul");
    group.bench_function("sequential", |b| b.iter(|| black_box(multiply(&a, &a).unwrap())));
    group.bench_function("parallel", |b| b.iter(|| black_box(par_multiply(&a, &a).unwrap())));
    group.finish();
}

fn bench_nbody(c: &mut Criterion) {
    let sizes = criterion_sizes();
    let initial = datasets::grid_particles(sizes.nbody_particles).unwrap();
    let mut group = c.benchmark_group("nbody_step");
    for (label, parallel) in [("sequential", false), ("parallel", true)] {
        group.bench_function(label, |b| {
            b.iter_batched(
                || initial.clone(),
                |mut sys| {
                    simulate(&mut sys, sizes.nbody_dt, 1, parallel).unwrap();
                    sys
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_merge_sort(c: &mut Criterion) {
    let input = datasets::random_ints(criterion_sizes().sort_len, datasets::MERGE_SORT_SEED).unwrap();
    let mut group = c.benchmark_group("merge_sort");
    group.bench_function("sequential", |b| {
        b.iter_batched(|| input.clone(), |mut v| { merge_sort(&mut v); v }, BatchSize::LargeInput)
    });
    group.bench_function("parallel", |b| {
        b.iter_batched(|| input.clone(), |mut v| { par_merge_sort(&mut v); v }, BatchSize::LargeInput)
    });
    group.finish();
}

fn bench_primes(c: &mut Criterion) {
    let limit = criterion_sizes().prime_limit;
    let mut group = c.benchmark_group("count_primes");
    group.bench_function("sequential", |b| b.iter(|| black_box(count_primes(0, limit))));
    group.bench_function("parallel", |b| b.iter(|| black_box(par_count_primes(0, limit))));
    group.finish();
}

fn bench_pipeline(c: &mut Criterion) {
    let sizes = criterion_sizes();
    let items = datasets::indices(sizes.pipeline_items);
    let mut group = c.benchmark_group("pipeline");
    for (label, parallel) in [("sequential", false), ("parallel", true)] {
        group.bench_function(label, |b| {
            b.iter(|| black_box(pipeline_flow(&items, sizes.pipeline_rounds, parallel)))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_heavy_loop,
    bench_sum,
    bench_tasks,
    bench_monte_carlo,
    bench_matmul,
    bench_nbody,
    bench_merge_sort,
    bench_primes,
    bench_pipeline
);
criterion_main!(benches);
