//! Benchmark registry and runner.

use gauntlet_core::{BenchmarkId, Clock, Verdict};
use indexmap::IndexMap;

use crate::benchmark::{Benchmark, RunContext};
use crate::benchmarks::standard_benchmarks;
use crate::config::SuiteConfig;
use crate::error::HarnessError;
use crate::report::Report;

/// An ordered set of benchmarks sharing one validated configuration.
///
/// Benchmarks run in registration order. Each run is independent: a
/// failure in one does not stop or affect the others.
pub struct Suite {
    config: SuiteConfig,
    benchmarks: IndexMap<BenchmarkId, Box<dyn Benchmark>>,
}

impl Suite {
    /// An empty suite. Fails if `config` does not validate.
    pub fn new(config: SuiteConfig) -> Result<Self, HarnessError> {
        config.validate()?;
        Ok(Self {
            config,
            benchmarks: IndexMap::new(),
        })
    }

    /// A suite with every standard benchmark registered in id order.
    pub fn standard(config: SuiteConfig) -> Result<Self, HarnessError> {
        let mut suite = Self::new(config)?;
        for b in standard_benchmarks() {
            suite.register(b);
        }
        Ok(suite)
    }

    /// Add a benchmark, replacing (and returning) any previous one with
    /// the same id. A replacement keeps the original position.
    pub fn register(&mut self, benchmark: Box<dyn Benchmark>) -> Option<Box<dyn Benchmark>> {
        self.benchmarks.insert(benchmark.id(), benchmark)
    }

    /// The configuration every run uses.
    pub fn config(&self) -> &SuiteConfig {
        &self.config
    }

    /// Registered ids, in run order.
    pub fn ids(&self) -> impl Iterator<Item = BenchmarkId> + '_ {
        self.benchmarks.keys().copied()
    }

    /// Number of registered benchmarks.
    pub fn len(&self) -> usize {
        self.benchmarks.len()
    }

    /// `true` if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.benchmarks.is_empty()
    }

    /// Run one benchmark.
    ///
    /// A kernel error becomes [`HarnessError::Kernel`]; a rejected
    /// correctness check becomes [`HarnessError::CheckFailed`].
    pub fn run(&self, id: BenchmarkId, clock: &dyn Clock) -> Result<Report, HarnessError> {
        let benchmark = self
            .benchmarks
            .get(&id)
            .ok_or(HarnessError::NotRegistered { benchmark: id })?;

        let span = tracing::info_span!("benchmark", benchmark = %id);
        let _guard = span.enter();

        let ctx = RunContext::new(&self.config, clock);
        let report = benchmark.run(&ctx).map_err(|source| {
            tracing::warn!(benchmark = %id, error = %source, "kernel failed");
            HarnessError::Kernel {
                benchmark: id,
                source,
            }
        })?;

        let passed = report.verdict().is_acceptable();
        tracing::info!(
            benchmark = %id,
            elapsed_s = report.result().elapsed_secs(),
            passed,
            "benchmark finished"
        );
        match report.verdict() {
            Verdict::Failed { reason } => Err(HarnessError::CheckFailed {
                benchmark: id,
                reason: reason.clone(),
            }),
            Verdict::Passed | Verdict::Unchecked => Ok(report),
        }
    }

    /// Run every registered benchmark in order, collecting each outcome.
    pub fn run_all(&self, clock: &dyn Clock) -> Vec<Result<Report, HarnessError>> {
        self.ids().map(|id| self.run(id, clock)).collect()
    }
}
