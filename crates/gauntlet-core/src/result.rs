//! Per-run results: the scalar a kernel produced, its correctness verdict
//! and the elapsed time.

use std::fmt;
use std::time::Duration;

use crate::id::BenchmarkId;

/// The scalar output of one kernel invocation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SampleValue {
    /// A floating-point result (sum, estimate, checksum).
    Scalar(f64),
    /// An exact integer count (primes found, elements sorted).
    Count(u64),
}

impl SampleValue {
    /// The value as `f64`, converting counts.
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Scalar(v) => v,
            Self::Count(c) => c as f64,
        }
    }
}

impl fmt::Display for SampleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(v) => write!(f, "{v:.2}"),
            Self::Count(c) => write!(f, "{c}"),
        }
    }
}

/// Outcome of a benchmark's correctness check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// The check ran and accepted the result.
    Passed,
    /// The check ran and rejected the result.
    Failed {
        /// Why the result was rejected.
        reason: String,
    },
    /// The benchmark has no correctness check.
    Unchecked,
}

impl Verdict {
    /// `true` unless the check ran and failed.
    pub fn is_acceptable(&self) -> bool {
        !matches!(self, Self::Failed { .. })
    }
}

/// Immutable record of one benchmark run.
#[derive(Clone, Debug, PartialEq)]
pub struct SampleResult {
    id: BenchmarkId,
    value: SampleValue,
    verdict: Verdict,
    elapsed: Duration,
}

impl SampleResult {
    /// Record a completed run.
    pub fn new(id: BenchmarkId, value: SampleValue, verdict: Verdict, elapsed: Duration) -> Self {
        Self {
            id,
            value,
            verdict,
            elapsed,
        }
    }

    /// Which benchmark produced this result.
    pub fn id(&self) -> BenchmarkId {
        self.id
    }

    /// The kernel's scalar output.
    pub fn value(&self) -> SampleValue {
        self.value
    }

    /// The correctness verdict.
    pub fn verdict(&self) -> &Verdict {
        &self.verdict
    }

    /// Time spent inside the kernel (dataset generation excluded).
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Elapsed time in seconds.
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}
