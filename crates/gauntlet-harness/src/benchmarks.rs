//! The standard benchmarks.
//!
//! Each type pairs one kernel from `gauntlet-kernels` with its dataset
//! generator, a post-run check, and the report lines. Datasets are
//! generated before the clock starts and checked after it stops.

use gauntlet_core::{BenchmarkId, Image, KernelError, SampleResult, SampleValue, Verdict};
use gauntlet_kernels::elementwise::GOLDEN_RATIO;
use gauntlet_kernels::monte_carlo::entropy_seed;
use gauntlet_kernels::reduction::{DEFAULT_CHUNK, PRODUCT_SCALE};
use gauntlet_kernels::{
    count_primes, datasets, estimate_pi, heavy_loop, merge_sort, multiply, par_count_primes,
    par_estimate_pi, par_heavy_loop, par_merge_sort, par_multiply, par_sum, par_vector_ops,
    pipeline_flow, simulate, stats, sum, vector_ops, PingPong, TaskGraph,
};

use crate::benchmark::{Benchmark, RunContext};
use crate::check;
use crate::report::Report;

/// One instance of every standard benchmark, in id order.
pub fn standard_benchmarks() -> Vec<Box<dyn Benchmark>> {
    vec![
        Box::new(SimpleLoop),
        Box::new(Reduction),
        Box::new(Tasks),
        Box::new(Vector),
        Box::new(MonteCarloPi),
        Box::new(MatrixMultiplication),
        Box::new(NbodySimulation),
        Box::new(ImageConvolution),
        Box::new(MergeSort),
        Box::new(PrimeSieve),
        Box::new(Pipeline),
    ]
}

// ── 01 simple_loop ─────────────────────────────────────────────────

/// Transcendental transform of every index, summed into a checksum.
#[derive(Clone, Copy, Debug, Default)]
pub struct SimpleLoop;

impl Benchmark for SimpleLoop {
    fn id(&self) -> BenchmarkId {
        BenchmarkId::SimpleLoop
    }

    fn run(&self, ctx: &RunContext<'_>) -> Result<Report, KernelError> {
        let n = ctx.sizes().simple_loop_len;
        if n == 0 {
            return Err(KernelError::InvalidSize {
                what: "simple loop length",
                value: 0,
            });
        }
        let mut out = datasets::zeros(n);
        tracing::debug!(len = n, "generated output buffer");

        let ((), elapsed) = ctx.time(|| {
            if ctx.parallel() {
                par_heavy_loop(&mut out)
            } else {
                heavy_loop(&mut out)
            }
        });

        let checksum = sum(&out);
        let verdict = check::all([
            check::all_finite("output", &out),
            check::within("mean output", checksum / n as f64, GOLDEN_RATIO, 1e-9),
        ]);
        let result = SampleResult::new(self.id(), SampleValue::Scalar(checksum), verdict, elapsed);
        Ok(Report::new(result, format!("Checksum: {checksum:.2}"))
            .with_preamble("Starting heavy loop..."))
    }
}

// ── 02 reduction ───────────────────────────────────────────────────

/// Sum of a buffer of ones, plus its single-pass stats.
#[derive(Clone, Copy, Debug, Default)]
pub struct Reduction;

impl Benchmark for Reduction {
    fn id(&self) -> BenchmarkId {
        BenchmarkId::Reduction
    }

    fn run(&self, ctx: &RunContext<'_>) -> Result<Report, KernelError> {
        let n = ctx.sizes().reduction_len;
        let data = datasets::ones(n);
        tracing::debug!(len = n, "generated ones");

        let (total, elapsed) = if ctx.parallel() {
            ctx.time_result(|| par_sum(&data, DEFAULT_CHUNK))?
        } else {
            ctx.time(|| sum(&data))
        };

        let summary = stats(&data);
        let expected_product = (1.0 + PRODUCT_SCALE).powf(n as f64);
        let verdict = check::all([
            check::within("sum", total, n as f64, 0.0),
            check::within("product", summary.product, expected_product, 1e-8 * expected_product),
        ]);
        let result = SampleResult::new(self.id(), SampleValue::Scalar(total), verdict, elapsed);
        Ok(Report::new(result, format!("Sum: {total:.2}"))
            .with_line(format!("Max: {:.2} Min: {:.2}", summary.max, summary.min))
            .with_line(format!("Product: {:.5}", summary.product)))
    }
}

// ── 03 tasks ───────────────────────────────────────────────────────

/// Independent sine and cosine accumulations, combined after both finish.
#[derive(Clone, Copy, Debug, Default)]
pub struct Tasks;

impl Benchmark for Tasks {
    fn id(&self) -> BenchmarkId {
        BenchmarkId::Tasks
    }

    fn run(&self, ctx: &RunContext<'_>) -> Result<Report, KernelError> {
        let graph = TaskGraph::sine_cosine(ctx.sizes().task_iterations);

        let (outcome, elapsed) = ctx.time_result(|| {
            if ctx.parallel() {
                graph.run_concurrent()
            } else {
                graph.run_sequential()
            }
        })?;

        // |Σ sin i| and |Σ cos i| are each bounded by 1 / sin(1/2).
        let bound = 2.0 / 0.5f64.sin();
        let verdict = check::within("result", outcome.combined, 0.0, bound);
        let result = SampleResult::new(
            self.id(),
            SampleValue::Scalar(outcome.combined),
            verdict,
            elapsed,
        );
        Ok(Report::new(result, format!("Result: {:.2}", outcome.combined)))
    }
}

// ── 04 vector ──────────────────────────────────────────────────────

/// `a·b + (a − b)` over two ramps.
#[derive(Clone, Copy, Debug, Default)]
pub struct Vector;

impl Benchmark for Vector {
    fn id(&self) -> BenchmarkId {
        BenchmarkId::Vector
    }

    fn run(&self, ctx: &RunContext<'_>) -> Result<Report, KernelError> {
        let n = ctx.sizes().vector_len;
        let (a, b) = datasets::ramp_pair(n);
        let mut out = datasets::zeros(n);
        tracing::debug!(len = n, "generated ramps");

        let ((), elapsed) = ctx.time_result(|| {
            if ctx.parallel() {
                par_vector_ops(&a, &b, &mut out)
            } else {
                vector_ops(&a, &b, &mut out)
            }
        })?;

        let first = out.first().copied().ok_or(KernelError::InvalidSize {
            what: "vector length",
            value: 0,
        })?;
        let verdict = check::within("result[0]", first, -(n as f64), 0.0);
        let result = SampleResult::new(self.id(), SampleValue::Scalar(first), verdict, elapsed);
        Ok(Report::new(result, format!("Result[0]: {first:.2}")))
    }
}

// ── 05 monte_carlo_pi ──────────────────────────────────────────────

/// Seeded Monte Carlo estimate of pi.
#[derive(Clone, Copy, Debug, Default)]
pub struct MonteCarloPi;

impl MonteCarloPi {
    /// Six standard deviations of the estimator at `samples`, floored at
    /// 0.01.
    pub fn tolerance(samples: u64) -> f64 {
        let p = std::f64::consts::FRAC_PI_4;
        let sigma = 4.0 * (p * (1.0 - p) / samples as f64).sqrt();
        (6.0 * sigma).max(0.01)
    }
}

impl Benchmark for MonteCarloPi {
    fn id(&self) -> BenchmarkId {
        BenchmarkId::MonteCarloPi
    }

    fn run(&self, ctx: &RunContext<'_>) -> Result<Report, KernelError> {
        let samples = ctx.sizes().monte_carlo_samples;
        let workers = ctx.config().monte_carlo_workers;
        let seed = ctx.config().monte_carlo_seed.unwrap_or_else(entropy_seed);
        tracing::debug!(samples, workers, seed, "monte carlo setup");

        let (est, elapsed) = ctx.time_result(|| {
            if ctx.parallel() {
                par_estimate_pi(samples, workers, seed)
            } else {
                estimate_pi(samples, seed)
            }
        })?;

        let verdict = check::within(
            "pi estimate",
            est.estimate,
            std::f64::consts::PI,
            Self::tolerance(samples),
        );
        let result = SampleResult::new(self.id(), SampleValue::Scalar(est.estimate), verdict, elapsed);
        Ok(Report::new(result, format!("Pi Estimate: {:.5}", est.estimate))
            .with_line(format!("Seed: {seed}")))
    }
}

// ── 06 matrix_multiplication ───────────────────────────────────────

/// Square of the `i % 100` matrix.
#[derive(Clone, Copy, Debug, Default)]
pub struct MatrixMultiplication;

impl MatrixMultiplication {
    /// Exact `C[0,0]` for the `i % 100` matrix of order `n` squared.
    pub fn expected_first_cell(n: usize) -> f64 {
        let mut acc = 0.0;
        for k in 0..n {
            acc += ((k % 100) * ((k * n) % 100)) as f64;
        }
        acc
    }
}

impl Benchmark for MatrixMultiplication {
    fn id(&self) -> BenchmarkId {
        BenchmarkId::MatrixMultiplication
    }

    fn run(&self, ctx: &RunContext<'_>) -> Result<Report, KernelError> {
        let n = ctx.sizes().matrix_order;
        let a = datasets::modulo_matrix(n)?;
        let b = a.clone();
        tracing::debug!(order = n, "generated matrices");

        let (c, elapsed) = ctx.time_result(|| {
            if ctx.parallel() {
                par_multiply(&a, &b)
            } else {
                multiply(&a, &b)
            }
        })?;

        let first = c.get(0, 0);
        let verdict = check::within("C[0]", first, Self::expected_first_cell(n), 0.0);
        let result = SampleResult::new(self.id(), SampleValue::Scalar(first), verdict, elapsed);
        Ok(Report::new(result, format!("C[0] = {first:.2}"))
            .with_preamble(format!("Multiplying {n}x{n} matrices...")))
    }
}

// ── 07 nbody_simulation ────────────────────────────────────────────

/// Grid of unit masses integrated for a few steps.
#[derive(Clone, Copy, Debug, Default)]
pub struct NbodySimulation;

impl Benchmark for NbodySimulation {
    fn id(&self) -> BenchmarkId {
        BenchmarkId::NbodySimulation
    }

    fn run(&self, ctx: &RunContext<'_>) -> Result<Report, KernelError> {
        let sizes = ctx.sizes();
        let n = sizes.nbody_particles;
        let mut sys = datasets::grid_particles(n)?;
        let (px0, py0) = sys.total_momentum();
        tracing::debug!(particles = n, "generated particle grid");

        let ((), elapsed) = ctx.time_result(|| {
            simulate(&mut sys, sizes.nbody_dt, sizes.nbody_steps, ctx.parallel())
        })?;

        let (px1, py1) = sys.total_momentum();
        let energy = sys.kinetic_energy();
        let verdict = check::all([
            check::all_finite("pos_x", sys.pos_x()),
            check::all_finite("pos_y", sys.pos_y()),
            check::within("momentum x", px1, px0, 1e-6),
            check::within("momentum y", py1, py0, 1e-6),
        ]);
        let result = SampleResult::new(self.id(), SampleValue::Scalar(energy), verdict, elapsed);
        Ok(Report::new(result, format!("Kinetic energy: {energy:.5}"))
            .with_preamble(format!("Simulating {n} bodies...")))
    }
}

// ── 08 image_convolution ───────────────────────────────────────────

/// Repeated 3×3 box blur of a sawtooth image.
#[derive(Clone, Copy, Debug, Default)]
pub struct ImageConvolution;

fn borders_match(original: &Image, blurred: &Image) -> Verdict {
    for r in 0..original.rows() {
        for c in 0..original.cols() {
            if original.is_border(r, c) && original.get(r, c) != blurred.get(r, c) {
                return Verdict::Failed {
                    reason: format!("border pixel ({r},{c}) changed"),
                };
            }
        }
    }
    Verdict::Passed
}

impl Benchmark for ImageConvolution {
    fn id(&self) -> BenchmarkId {
        BenchmarkId::ImageConvolution
    }

    fn run(&self, ctx: &RunContext<'_>) -> Result<Report, KernelError> {
        let sizes = ctx.sizes();
        let (rows, cols) = (sizes.image_rows, sizes.image_cols);
        let original = datasets::sawtooth_image(rows, cols)?;
        let mut buffers = PingPong::new(original.clone())?;
        tracing::debug!(rows, cols, "generated sawtooth image");

        let (role, elapsed) =
            ctx.time_result(|| buffers.run(sizes.convolution_passes, ctx.parallel()))?;

        let out = buffers.current_image();
        let center = out.get(rows / 2, cols / 2);
        let verdict = borders_match(&original, out);
        tracing::debug!(?role, "blur finished");
        let result = SampleResult::new(self.id(), SampleValue::Scalar(center), verdict, elapsed);
        Ok(Report::new(result, format!("Center pixel: {center:.2}"))
            .with_preamble(format!("Applying convolution to {rows}x{cols} image...")))
    }
}

// ── 09 merge_sort ──────────────────────────────────────────────────

/// Seeded random integers sorted with merge sort.
#[derive(Clone, Copy, Debug, Default)]
pub struct MergeSort;

impl Benchmark for MergeSort {
    fn id(&self) -> BenchmarkId {
        BenchmarkId::MergeSort
    }

    fn run(&self, ctx: &RunContext<'_>) -> Result<Report, KernelError> {
        let n = ctx.sizes().sort_len;
        let input = datasets::random_ints(n, ctx.config().merge_sort_seed)?;
        let mut data = input.clone();
        tracing::debug!(len = n, seed = ctx.config().merge_sort_seed, "generated integers");

        let ((), elapsed) = ctx.time(|| {
            if ctx.parallel() {
                par_merge_sort(&mut data)
            } else {
                merge_sort(&mut data)
            }
        });

        let verdict = check::all([check::sorted(&data), check::permutation_of(&data, &input, n)]);
        let flag = if verdict.is_acceptable() { "YES" } else { "NO" };
        let result = SampleResult::new(self.id(), SampleValue::Count(n as u64), verdict, elapsed);
        Ok(Report::new(result, format!("Sorted: {flag}"))
            .with_preamble(format!("Sorting {n} elements with Merge Sort...")))
    }
}

// ── 10 prime_sieve ─────────────────────────────────────────────────

/// Count of primes below a limit.
#[derive(Clone, Copy, Debug, Default)]
pub struct PrimeSieve;

impl PrimeSieve {
    /// Known `π(limit − 1)` for the limits the built-in profiles use.
    pub fn known_count(limit: i64) -> Option<u64> {
        match limit {
            100 => Some(25),
            10_000 => Some(1229),
            100_000 => Some(9592),
            500_000 => Some(41_538),
            1_000_000 => Some(78_498),
            _ => None,
        }
    }
}

impl Benchmark for PrimeSieve {
    fn id(&self) -> BenchmarkId {
        BenchmarkId::PrimeSieve
    }

    fn run(&self, ctx: &RunContext<'_>) -> Result<Report, KernelError> {
        let limit = ctx.sizes().prime_limit;

        let (count, elapsed) = ctx.time(|| {
            if ctx.parallel() {
                par_count_primes(0, limit)
            } else {
                count_primes(0, limit)
            }
        });

        let verdict = match Self::known_count(limit) {
            Some(expected) => check::equals("prime count", count, expected),
            None => Verdict::Unchecked,
        };
        let result = SampleResult::new(self.id(), SampleValue::Count(count), verdict, elapsed);
        Ok(Report::new(result, format!("Found {count} primes."))
            .with_preamble(format!("Counting primes up to {limit}...")))
    }
}

// ── 11 pipeline ────────────────────────────────────────────────────

/// Item indices pushed through the read → process → write stages.
#[derive(Clone, Copy, Debug, Default)]
pub struct Pipeline;

impl Benchmark for Pipeline {
    fn id(&self) -> BenchmarkId {
        BenchmarkId::Pipeline
    }

    fn run(&self, ctx: &RunContext<'_>) -> Result<Report, KernelError> {
        let sizes = ctx.sizes();
        let (n, rounds) = (sizes.pipeline_items, sizes.pipeline_rounds);
        let items = datasets::indices(n);
        tracing::debug!(items = n, rounds, "generated pipeline items");

        let (out, elapsed) = ctx.time(|| pipeline_flow(&items, rounds, ctx.parallel()));

        // Processing moves each item by at most one half.
        let verdict = check::all([
            check::equals("items written", out.written as u64, n as u64),
            check::within("checksum", out.checksum, sum(&items), 0.5 * n as f64 + 1e-6),
        ]);
        let result =
            SampleResult::new(self.id(), SampleValue::Scalar(out.checksum), verdict, elapsed);
        Ok(Report::new(result, format!("Processed {} items.", out.written))
            .with_line(format!("Checksum: {:.2}", out.checksum))
            .with_preamble(format!("Running pipeline over {n} items...")))
    }
}
