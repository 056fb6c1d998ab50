//! Test utilities and reference implementations for Gauntlet development.
//!
//! Provides a [`ManualClock`] for exact elapsed-time assertions, naive
//! reference kernels to check optimised ones against, and float
//! comparison helpers.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use gauntlet_core::{Clock, Matrix};

/// A [`Clock`] that only moves when told to.
///
/// Optionally advances by a fixed step on every `now()` call, so a
/// harness that reads the clock twice around a kernel observes exactly
/// one step of elapsed time.
pub struct ManualClock {
    nanos: AtomicU64,
    auto_step_nanos: u64,
}

impl ManualClock {
    /// A clock frozen at zero.
    pub fn new() -> Self {
        Self {
            nanos: AtomicU64::new(0),
            auto_step_nanos: 0,
        }
    }

    /// A clock that advances by `step` after every read.
    pub fn stepping(step: Duration) -> Self {
        Self {
            nanos: AtomicU64::new(0),
            auto_step_nanos: saturating_nanos(step),
        }
    }

    /// Move the clock forward.
    pub fn advance(&self, by: Duration) {
        self.nanos.fetch_add(saturating_nanos(by), Ordering::SeqCst);
    }
}

/// Whole nanoseconds in `d`, saturating at `u64::MAX` (about 584 years).
fn saturating_nanos(d: Duration) -> u64 {
    u64::try_from(d.as_nanos()).unwrap_or(u64::MAX)
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        let t = self.nanos.fetch_add(self.auto_step_nanos, Ordering::SeqCst);
        Duration::from_nanos(t)
    }
}

/// Textbook triple loop over nested indexing, no slicing tricks.
pub fn reference_matmul(a: &Matrix, b: &Matrix) -> Matrix {
    let n = a.order();
    let mut c = vec![0.0; n * n];
    for (i, row) in c.chunks_mut(n).enumerate() {
        for (j, cell) in row.iter_mut().enumerate() {
            let mut acc = 0.0;
            for k in 0..n {
                acc += a.get(i, k) * b.get(k, j);
            }
            *cell = acc;
        }
    }
    Matrix::from_vec(n, c).expect("reference output has n*n cells")
}

/// Trial division by every integer up to `n - 1`.
pub fn naive_is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }
    (2..n).take_while(|d| d * d <= n).all(|d| n % d != 0)
}

/// Relative comparison with an absolute floor for values near zero.
pub fn rel_close(a: f64, b: f64, rel: f64) -> bool {
    let scale = a.abs().max(b.abs()).max(1.0);
    (a - b).abs() <= rel * scale
}

/// Assert two slices agree element-wise within `rel` (see [`rel_close`]).
pub fn assert_slices_close(actual: &[f64], expected: &[f64], rel: f64) {
    assert_eq!(actual.len(), expected.len(), "length mismatch");
    for (i, (&a, &e)) in actual.iter().zip(expected).enumerate() {
        assert!(
            rel_close(a, e, rel),
            "element {i}: got {a}, expected {e} (rel tol {rel})"
        );
    }
}
