//! The [`Benchmark`] trait and its [`RunContext`].

use std::time::Duration;

use gauntlet_core::{BenchmarkId, Clock, KernelError};

use crate::config::{ProblemSizes, SuiteConfig};
use crate::report::Report;
use crate::timing;

/// Everything a benchmark may read while it runs.
///
/// Borrowed from the [`Suite`](crate::Suite) for the duration of one run.
pub struct RunContext<'a> {
    config: &'a SuiteConfig,
    clock: &'a dyn Clock,
}

impl<'a> RunContext<'a> {
    /// Bundle a config with a clock.
    ///
    /// The config is not re-validated here. [`Suite`](crate::Suite)
    /// validates on construction; a benchmark handed a zero size directly
    /// returns [`KernelError::InvalidSize`].
    pub fn new(config: &'a SuiteConfig, clock: &'a dyn Clock) -> Self {
        Self { config, clock }
    }

    /// The suite configuration.
    pub fn config(&self) -> &SuiteConfig {
        self.config
    }

    /// Shorthand for `config().sizes`.
    pub fn sizes(&self) -> &ProblemSizes {
        &self.config.sizes
    }

    /// Whether to use the parallel kernel forms.
    pub fn parallel(&self) -> bool {
        self.config.parallel
    }

    /// Time `f` on this run's clock.
    pub fn time<T>(&self, f: impl FnOnce() -> T) -> (T, Duration) {
        timing::measure(self.clock, f)
    }

    /// Time a fallible kernel on this run's clock.
    pub fn time_result<T>(
        &self,
        f: impl FnOnce() -> Result<T, KernelError>,
    ) -> Result<(T, Duration), KernelError> {
        timing::measure_result(self.clock, f)
    }
}

/// One self-contained benchmark: generate, time the kernel, check, report.
///
/// # Contract
///
/// - `run()` allocates its own inputs and drops them before returning;
///   nothing is shared between runs or between benchmarks.
/// - Only the kernel call is timed, through [`RunContext::time`].
/// - A failed correctness check is reported through the returned
///   [`Report`]'s verdict, not as an error.
///
/// This trait is object-safe; the suite stores benchmarks as
/// `Box<dyn Benchmark>`.
pub trait Benchmark: Send + Sync {
    /// Stable identifier.
    fn id(&self) -> BenchmarkId;

    /// Run once and report.
    fn run(&self, ctx: &RunContext<'_>) -> Result<Report, KernelError>;
}
