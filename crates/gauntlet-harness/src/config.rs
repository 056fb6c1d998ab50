//! Problem sizes, suite configuration, and validation.
//!
//! [`ProblemSizes`] fixes the input size of every benchmark. The
//! [`reference`](ProblemSizes::reference) profile reproduces the classic
//! workload sizes; [`smoke`](ProblemSizes::smoke) shrinks them so the
//! whole suite runs in well under a second for tests and CI.
//! [`SuiteConfig`] adds seeds, the Monte Carlo worker count and the
//! parallel switch. Both are validated before any dataset is generated.

use std::error::Error;
use std::fmt;

use gauntlet_kernels::datasets::MERGE_SORT_SEED;
use gauntlet_kernels::monte_carlo::DEFAULT_WORKERS;
use gauntlet_kernels::pipeline::PROCESS_ROUNDS;

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`SuiteConfig::validate()`].
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// A size that must be at least one is zero.
    ZeroSize {
        /// Which size field.
        field: &'static str,
    },
    /// A size is too large for the kernel's index type.
    SizeTooLarge {
        /// Which size field.
        field: &'static str,
        /// The configured value.
        value: u64,
        /// The largest accepted value.
        max: u64,
    },
    /// The n-body timestep is NaN, infinite, zero, or negative.
    InvalidTimestep {
        /// The invalid value.
        value: f64,
    },
    /// Monte Carlo worker count is zero.
    ZeroWorkers,
    /// More Monte Carlo workers than samples.
    WorkersExceedSamples {
        /// Configured workers.
        workers: usize,
        /// Configured samples.
        samples: u64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroSize { field } => write!(f, "{field} must be at least 1"),
            Self::SizeTooLarge { field, value, max } => {
                write!(f, "{field} {value} exceeds maximum of {max}")
            }
            Self::InvalidTimestep { value } => {
                write!(f, "nbody_dt must be finite and positive, got {value}")
            }
            Self::ZeroWorkers => write!(f, "monte_carlo_workers must be at least 1"),
            Self::WorkersExceedSamples { workers, samples } => write!(
                f,
                "monte_carlo_workers ({workers}) exceeds monte_carlo_samples ({samples})"
            ),
        }
    }
}

impl Error for ConfigError {}

// ── ProblemSizes ───────────────────────────────────────────────────

/// Input size of every benchmark.
#[derive(Clone, Debug, PartialEq)]
pub struct ProblemSizes {
    /// Elements transformed by `simple_loop`.
    pub simple_loop_len: usize,
    /// Elements summed by `reduction`.
    pub reduction_len: usize,
    /// Terms accumulated by each `tasks` task.
    pub task_iterations: u64,
    /// Elements combined by `vector`.
    pub vector_len: usize,
    /// Points drawn by `monte_carlo_pi`.
    pub monte_carlo_samples: u64,
    /// Order of the `matrix_multiplication` operands.
    pub matrix_order: usize,
    /// Bodies in `nbody_simulation`.
    pub nbody_particles: usize,
    /// Steps taken by `nbody_simulation`.
    pub nbody_steps: usize,
    /// Timestep of `nbody_simulation`.
    pub nbody_dt: f64,
    /// Image height for `image_convolution`.
    pub image_rows: usize,
    /// Image width for `image_convolution`.
    pub image_cols: usize,
    /// Blur passes in `image_convolution`.
    pub convolution_passes: usize,
    /// Integers sorted by `merge_sort`.
    pub sort_len: usize,
    /// Exclusive upper bound searched by `prime_sieve`.
    pub prime_limit: i64,
    /// Items fed through `pipeline`.
    pub pipeline_items: usize,
    /// Recurrence rounds per item in the `pipeline` process stage.
    pub pipeline_rounds: usize,
}

impl ProblemSizes {
    /// The classic fixed sizes.
    pub fn reference() -> Self {
        Self {
            simple_loop_len: 100_000,
            reduction_len: 1_000_000,
            task_iterations: 100_000,
            vector_len: 1_000_000,
            monte_carlo_samples: 10_000_000,
            matrix_order: 500,
            nbody_particles: 2000,
            nbody_steps: 5,
            nbody_dt: 0.01,
            image_rows: 2000,
            image_cols: 2000,
            convolution_passes: 5,
            sort_len: 500_000,
            prime_limit: 500_000,
            pipeline_items: 1000,
            pipeline_rounds: PROCESS_ROUNDS,
        }
    }

    /// Reduced sizes that keep every code path but finish quickly.
    pub fn smoke() -> Self {
        Self {
            simple_loop_len: 1000,
            reduction_len: 10_000,
            task_iterations: 1000,
            vector_len: 10_000,
            monte_carlo_samples: 100_000,
            matrix_order: 24,
            nbody_particles: 64,
            nbody_steps: 2,
            nbody_dt: 0.01,
            image_rows: 40,
            image_cols: 30,
            convolution_passes: 3,
            sort_len: 5000,
            prime_limit: 10_000,
            pipeline_items: 100,
            pipeline_rounds: PROCESS_ROUNDS,
        }
    }

    /// Check every size.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let nonzero: [(&'static str, u64); 15] = [
            ("simple_loop_len", self.simple_loop_len as u64),
            ("reduction_len", self.reduction_len as u64),
            ("task_iterations", self.task_iterations),
            ("vector_len", self.vector_len as u64),
            ("monte_carlo_samples", self.monte_carlo_samples),
            ("matrix_order", self.matrix_order as u64),
            ("nbody_particles", self.nbody_particles as u64),
            ("nbody_steps", self.nbody_steps as u64),
            ("image_rows", self.image_rows as u64),
            ("image_cols", self.image_cols as u64),
            ("convolution_passes", self.convolution_passes as u64),
            ("sort_len", self.sort_len as u64),
            ("prime_limit", self.prime_limit.max(0) as u64),
            ("pipeline_items", self.pipeline_items as u64),
            ("pipeline_rounds", self.pipeline_rounds as u64),
        ];
        for (field, value) in nonzero {
            if value == 0 {
                return Err(ConfigError::ZeroSize { field });
            }
        }
        if self.sort_len > i32::MAX as usize {
            return Err(ConfigError::SizeTooLarge {
                field: "sort_len",
                value: self.sort_len as u64,
                max: i32::MAX as u64,
            });
        }
        if !self.nbody_dt.is_finite() || self.nbody_dt <= 0.0 {
            return Err(ConfigError::InvalidTimestep {
                value: self.nbody_dt,
            });
        }
        Ok(())
    }
}

impl Default for ProblemSizes {
    fn default() -> Self {
        Self::reference()
    }
}

// ── SuiteConfig ────────────────────────────────────────────────────

/// Everything a suite run needs besides the clock.
#[derive(Clone, Debug, PartialEq)]
pub struct SuiteConfig {
    /// Benchmark input sizes.
    pub sizes: ProblemSizes,
    /// Seed for the `merge_sort` input. Default: 42.
    pub merge_sort_seed: u64,
    /// Seed for `monte_carlo_pi`. `None` draws a fresh seed per run and
    /// reports it.
    pub monte_carlo_seed: Option<u64>,
    /// Independent sampling streams for `monte_carlo_pi`. Default: 10.
    pub monte_carlo_workers: usize,
    /// Use the `par_*` kernel forms.
    pub parallel: bool,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            sizes: ProblemSizes::reference(),
            merge_sort_seed: MERGE_SORT_SEED,
            monte_carlo_seed: None,
            monte_carlo_workers: DEFAULT_WORKERS,
            parallel: false,
        }
    }
}

impl SuiteConfig {
    /// Default settings over the [`smoke`](ProblemSizes::smoke) sizes with
    /// a fixed Monte Carlo seed.
    pub fn smoke() -> Self {
        Self {
            sizes: ProblemSizes::smoke(),
            monte_carlo_seed: Some(7),
            ..Self::default()
        }
    }

    /// Validate sizes and worker settings.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.sizes.validate()?;
        if self.monte_carlo_workers == 0 {
            return Err(ConfigError::ZeroWorkers);
        }
        if self.monte_carlo_workers as u64 > self.sizes.monte_carlo_samples {
            return Err(ConfigError::WorkersExceedSamples {
                workers: self.monte_carlo_workers,
                samples: self.sizes.monte_carlo_samples,
            });
        }
        Ok(())
    }
}
