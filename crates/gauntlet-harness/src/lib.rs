//! Timing harness for the Gauntlet kernel suite.
//!
//! The harness is thin glue around the kernels: it validates a
//! [`SuiteConfig`], generates each benchmark's dataset, times the kernel
//! call on an injected [`Clock`](gauntlet_core::Clock), runs a correctness
//! check and renders a plain-text [`Report`].
//!
//! Progress is logged through `tracing`: one `info` event per finished
//! benchmark inside a `benchmark` span, `debug` events for dataset
//! generation. The harness never installs a subscriber.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod benchmark;
pub mod benchmarks;
pub mod check;
pub mod config;
pub mod error;
pub mod report;
pub mod suite;
pub mod timing;

pub use benchmark::{Benchmark, RunContext};
pub use benchmarks::standard_benchmarks;
pub use config::{ConfigError, ProblemSizes, SuiteConfig};
pub use error::HarnessError;
pub use report::Report;
pub use suite::Suite;
