//! Criterion micro-benchmarks for the sequential kernels.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use gauntlet_bench::{criterion_sizes, BENCH_SEED};
use gauntlet_kernels::{
    count_primes, datasets, estimate_pi, heavy_loop, merge_sort, multiply, pipeline_flow,
    simulate, stats, sum, vector_blend, vector_ops, PingPong, TaskGraph,
};

fn bench_elementwise(c: &mut Criterion) {
    let sizes = criterion_sizes();

    let mut out = datasets::zeros(sizes.simple_loop_len);
    c.bench_function("heavy_loop_10k", |b| {
        b.iter(|| {
            heavy_loop(&mut out);
            black_box(&out);
        });
    });

    let (a, v) = datasets::ramp_pair(sizes.vector_len);
    let mut out = datasets::zeros(sizes.vector_len);
    c.bench_function("vector_ops_100k", |b| {
        b.iter(|| {
            vector_ops(black_box(&a), black_box(&v), &mut out).unwrap();
            black_box(&out);
        });
    });

    let a = datasets::uniform(sizes.vector_len, BENCH_SEED);
    let v = datasets::uniform(sizes.vector_len, BENCH_SEED + 1);
    c.bench_function("vector_blend_100k", |b| {
        b.iter(|| {
            vector_blend(black_box(&a), black_box(&v), &mut out).unwrap();
            black_box(&out);
        });
    });
}

fn bench_reduction(c: &mut Criterion) {
    let data = datasets::uniform(criterion_sizes().reduction_len, BENCH_SEED);
    c.bench_function("sum_100k", |b| {
        b.iter(|| black_box(sum(black_box(&data))));
    });
    c.bench_function("stats_100k", |b| {
        b.iter(|| black_box(stats(black_box(&data))));
    });
}

fn bench_tasks(c: &mut Criterion) {
    let graph = TaskGraph::sine_cosine(criterion_sizes().task_iterations);
    c.bench_function("tasks_sequential_10k", |b| {
        b.iter(|| black_box(graph.run_sequential().unwrap()));
    });
}

fn bench_monte_carlo(c: &mut Criterion) {
    let samples = criterion_sizes().monte_carlo_samples;
    c.bench_function("estimate_pi_100k", |b| {
        b.iter(|| black_box(estimate_pi(samples, BENCH_SEED).unwrap()));
    });
}

fn bench_matmul(c: &mut Criterion) {
    let n = criterion_sizes().matrix_order;
    let a = datasets::modulo_matrix(n).unwrap();
    let m = datasets::uniform_matrix(n, BENCH_SEED).unwrap();
    c.bench_function("matmul_96", |b| {
        b.iter(|| black_box(multiply(&a, &m).unwrap()));
    });
}

fn bench_nbody(c: &mut Criterion) {
    let sizes = criterion_sizes();
    let initial = datasets::grid_particles(sizes.nbody_particles).unwrap();
    c.bench_function("nbody_step_256", |b| {
        b.iter_batched(
            || initial.clone(),
            |mut sys| {
                simulate(&mut sys, sizes.nbody_dt, 1, false).unwrap();
                sys
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_convolution(c: &mut Criterion) {
    let sizes = criterion_sizes();
    let img = datasets::sawtooth_image(sizes.image_rows, sizes.image_cols).unwrap();
    let mut buffers = PingPong::new(img).unwrap();
    c.bench_function("box_blur_256x256", |b| {
        b.iter(|| black_box(buffers.step(false).unwrap()));
    });
}

fn bench_merge_sort(c: &mut Criterion) {
    let input = datasets::random_ints(criterion_sizes().sort_len, datasets::MERGE_SORT_SEED).unwrap();
    c.bench_function("merge_sort_50k", |b| {
        b.iter_batched(
            || input.clone(),
            |mut v| {
                merge_sort(&mut v);
                v
            },
            BatchSize::LargeInput,
        );
    });
}

fn bench_primes(c: &mut Criterion) {
    let limit = criterion_sizes().prime_limit;
    c.bench_function("count_primes_50k", |b| {
        b.iter(|| black_box(count_primes(0, black_box(limit))));
    });
}

fn bench_pipeline(c: &mut Criterion) {
    let sizes = criterion_sizes();
    let items = datasets::indices(sizes.pipeline_items);
    c.bench_function("pipeline_250", |b| {
        b.iter(|| black_box(pipeline_flow(&items, sizes.pipeline_rounds, false)));
    });
}

criterion_group!(
    benches,
    bench_elementwise,
    bench_reduction,
    bench_tasks,
    bench_monte_carlo,
    bench_matmul,
    bench_nbody,
    bench_convolution,
    bench_merge_sort,
    bench_primes,
    bench_pipeline
);
criterion_main!(benches);
