//! Numeric kernels for the Gauntlet benchmark suite.
//!
//! Each module implements one workload shape. Kernels take explicitly
//! owned buffers by reference and never allocate hidden global state.
//! Where a kernel is safe to parallelise it has a `par_*` twin built on
//! rayon; unless documented otherwise the parallel form is bit-identical
//! to the sequential one.
//!
//! | Module | Workload |
//! |--------|----------|
//! | [`elementwise`] | transcendental transform, binary vector ops |
//! | [`reduction`] | left-to-right sum, single-pass stats |
//! | [`tasks`] | independent scalar tasks, joined then combined |
//! | [`monte_carlo`] | seeded Monte Carlo pi |
//! | [`matmul`] | dense N×N product |
//! | [`nbody`] | two-phase gravitational step |
//! | [`convolution`] | 3×3 box blur with ping-pong buffers |
//! | [`merge_sort`] | stable top-down merge sort |
//! | [`primes`] | 6k±1 trial-division prime counting |
//! | [`pipeline`] | read → process → write stages over independent items |
//! | [`datasets`] | input generators for all of the above |

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod convolution;
pub mod datasets;
pub mod elementwise;
pub mod matmul;
pub mod merge_sort;
pub mod monte_carlo;
pub mod nbody;
pub mod pipeline;
pub mod primes;
pub mod reduction;
pub mod tasks;

pub use convolution::{box_blur, par_box_blur, PingPong, Role};
pub use elementwise::{
    heavy_loop, par_heavy_loop, par_vector_blend, par_vector_ops, vector_blend, vector_ops,
};
pub use matmul::{multiply, par_multiply};
pub use merge_sort::{is_sorted, merge_sort, par_merge_sort};
pub use monte_carlo::{estimate_pi, par_estimate_pi, PiEstimate};
pub use nbody::{apply_forces, compute_forces, par_compute_forces, simulate, ForceSet};
pub use pipeline::{pipeline_flow, PipelineOutput};
pub use primes::{count_primes, is_prime, par_count_primes};
pub use reduction::{par_sum, stats, sum, Stats};
pub use tasks::{TaskGraph, TaskKind, TaskOutcome};
