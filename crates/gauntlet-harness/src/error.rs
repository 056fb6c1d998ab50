//! Harness error type.

use std::error::Error;
use std::fmt;

use gauntlet_core::{BenchmarkId, KernelError};

use crate::config::ConfigError;

/// Why a suite run or a single benchmark did not produce a report.
#[derive(Clone, Debug, PartialEq)]
pub enum HarnessError {
    /// The suite configuration was rejected before anything ran.
    Config(ConfigError),
    /// A kernel or dataset generator failed.
    Kernel {
        /// The benchmark that was running.
        benchmark: BenchmarkId,
        /// The underlying failure.
        source: KernelError,
    },
    /// The kernel ran but its correctness check rejected the output.
    CheckFailed {
        /// The benchmark that was running.
        benchmark: BenchmarkId,
        /// The check's explanation.
        reason: String,
    },
    /// No benchmark is registered under this id.
    NotRegistered {
        /// The requested id.
        benchmark: BenchmarkId,
    },
}

impl HarnessError {
    /// The benchmark the error belongs to, if any.
    pub fn benchmark(&self) -> Option<BenchmarkId> {
        match self {
            Self::Config(_) => None,
            Self::Kernel { benchmark, .. }
            | Self::CheckFailed { benchmark, .. }
            | Self::NotRegistered { benchmark } => Some(*benchmark),
        }
    }
}

impl fmt::Display for HarnessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Kernel { benchmark, source } => write!(f, "{benchmark}: {source}"),
            Self::CheckFailed { benchmark, reason } => {
                write!(f, "{benchmark}: check failed: {reason}")
            }
            Self::NotRegistered { benchmark } => write!(f, "{benchmark}: not registered"),
        }
    }
}

impl Error for HarnessError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Kernel { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<ConfigError> for HarnessError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kernel_error_is_chained() {
        let e = HarnessError::Kernel {
            benchmark: BenchmarkId::MatrixMultiplication,
            source: KernelError::InvalidSize {
                what: "matrix order",
                value: 0,
            },
        };
        assert_eq!(
            e.to_string(),
            "06_matrix_multiplication: invalid matrix order: 0"
        );
        assert!(e.source().is_some());
        assert_eq!(e.benchmark(), Some(BenchmarkId::MatrixMultiplication));
    }

    #[test]
    fn config_error_converts() {
        let e: HarnessError = ConfigError::ZeroWorkers.into();
        assert!(matches!(e, HarnessError::Config(ConfigError::ZeroWorkers)));
        assert_eq!(e.benchmark(), None);
    }

    #[test]
    fn check_failure_display() {
        let e = HarnessError::CheckFailed {
            benchmark: BenchmarkId::MergeSort,
            reason: "out of order at index 3".into(),
        };
        assert_eq!(
            e.to_string(),
            "09_merge_sort: check failed: out of order at index 3"
        );
        assert!(e.source().is_none());
    }
}
