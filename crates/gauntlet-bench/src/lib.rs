//! Benchmark profiles for the Gauntlet kernels.
//!
//! Provides pre-built [`SuiteConfig`] profiles for the criterion benches:
//!
//! - [`criterion_sizes`]: sizes small enough for criterion to take many
//!   samples of each kernel in a few seconds
//! - [`reference_config`]: the classic fixed sizes with a pinned Monte
//!   Carlo seed, so repeated bench runs draw identical samples
//! - [`profile_config`]: any sizes with the same pinned seed

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use gauntlet_harness::{ProblemSizes, SuiteConfig};

/// Monte Carlo seed used by every bench profile.
pub const BENCH_SEED: u64 = 0x6a75_6e74_6c65_7400;

/// Reduced sizes for per-kernel criterion benches.
///
/// Each kernel runs in roughly a millisecond in release builds.
pub fn criterion_sizes() -> ProblemSizes {
    ProblemSizes {
        simple_loop_len: 10_000,
        reduction_len: 100_000,
        task_iterations: 10_000,
        vector_len: 100_000,
        monte_carlo_samples: 100_000,
        matrix_order: 96,
        nbody_particles: 256,
        nbody_steps: 1,
        nbody_dt: 0.01,
        image_rows: 256,
        image_cols: 256,
        convolution_passes: 1,
        sort_len: 50_000,
        prime_limit: 50_000,
        pipeline_items: 250,
        pipeline_rounds: 500,
    }
}

/// `sizes` with the pinned seed and the given parallel switch.
pub fn profile_config(sizes: ProblemSizes, parallel: bool) -> SuiteConfig {
    SuiteConfig {
        sizes,
        monte_carlo_seed: Some(BENCH_SEED),
        parallel,
        ..SuiteConfig::default()
    }
}

/// The classic sizes with the pinned seed.
pub fn reference_config(parallel: bool) -> SuiteConfig {
    profile_config(ProblemSizes::reference(), parallel)
}
