//! Gauntlet: numeric micro-benchmark kernels for characterising runtime
//! and compiler throughput.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Gauntlet sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use gauntlet::prelude::*;
//!
//! // Run one benchmark at the reduced smoke sizes.
//! let suite = Suite::standard(SuiteConfig::smoke()).unwrap();
//! let report = suite.run(BenchmarkId::PrimeSieve, &SystemClock::new()).unwrap();
//! assert_eq!(report.lines()[0], "Found 1229 primes.");
//!
//! // Or call a kernel directly.
//! let a = gauntlet::kernels::datasets::modulo_matrix(4).unwrap();
//! let c = multiply(&a, &a).unwrap();
//! assert_eq!(c.order(), 4);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `gauntlet-core` | ids, buffers, particle system, errors, `Clock` |
//! | [`kernels`] | `gauntlet-kernels` | kernels and dataset generators |
//! | [`harness`] | `gauntlet-harness` | config, timing, checks, reports, suite |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types (`gauntlet-core`).
///
/// Owned buffers ([`types::Matrix`], [`types::Image`],
/// [`types::ParticleSystem`]), [`types::KernelError`] and the
/// [`types::Clock`] trait.
pub use gauntlet_core as types;

/// Kernels and dataset generators (`gauntlet-kernels`).
pub use gauntlet_kernels as kernels;

/// Timing harness and benchmark registry (`gauntlet-harness`).
///
/// [`harness::Suite`] runs [`harness::Benchmark`]s and renders
/// [`harness::Report`]s.
pub use gauntlet_harness as harness;

/// Common imports for typical Gauntlet usage.
///
/// ```rust
/// use gauntlet::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use gauntlet_core::{
        BenchmarkId, Clock, Image, KernelError, Matrix, ParticleSystem, SampleResult,
        SampleValue, SystemClock, Verdict,
    };

    // Kernels
    pub use gauntlet_kernels::{
        box_blur, count_primes, estimate_pi, heavy_loop, merge_sort, multiply, pipeline_flow,
        simulate, stats, sum, vector_ops, PingPong, Role, TaskGraph,
    };

    // Harness
    pub use gauntlet_harness::{
        Benchmark, ConfigError, HarnessError, ProblemSizes, Report, RunContext, Suite,
        SuiteConfig,
    };
}
