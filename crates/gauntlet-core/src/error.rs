//! Error types for kernel execution.
//!
//! Kernels run on internally generated inputs, so the taxonomy is narrow:
//! precondition violations on problem sizes and shapes, and failures of
//! concurrently executed tasks. Arithmetic edge cases are prevented
//! structurally inside the kernels and never surface here.

use std::error::Error;
use std::fmt;

/// Errors returned by kernels and dataset constructors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KernelError {
    /// A problem size is zero or otherwise outside the kernel's domain.
    InvalidSize {
        /// What the size describes (e.g. `"matrix order"`).
        what: &'static str,
        /// The rejected value.
        value: usize,
    },
    /// Buffers that must agree in length do not.
    ShapeMismatch {
        /// What was being checked (e.g. `"particle mass buffer"`).
        what: &'static str,
        /// The required length.
        expected: usize,
        /// The length actually supplied.
        actual: usize,
    },
    /// A buffer element violates the kernel's domain (e.g. a non-positive
    /// particle mass).
    InvalidValue {
        /// What the buffer describes.
        what: &'static str,
        /// Index of the first offending element.
        index: usize,
    },
    /// A concurrently executed task did not produce a result.
    TaskFailed {
        /// Name of the failing task.
        name: String,
        /// Human-readable description of the failure.
        reason: String,
    },
}

impl fmt::Display for KernelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { what, value } => write!(f, "invalid {what}: {value}"),
            Self::ShapeMismatch {
                what,
                expected,
                actual,
            } => {
                write!(f, "{what} has length {actual}, expected {expected}")
            }
            Self::InvalidValue { what, index } => {
                write!(f, "invalid value in {what} at index {index}")
            }
            Self::TaskFailed { name, reason } => write!(f, "task '{name}' failed: {reason}"),
        }
    }
}

impl Error for KernelError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let e = KernelError::InvalidSize {
            what: "matrix order",
            value: 0,
        };
        assert_eq!(e.to_string(), "invalid matrix order: 0");

        let e = KernelError::ShapeMismatch {
            what: "vector rhs",
            expected: 4,
            actual: 3,
        };
        assert_eq!(e.to_string(), "vector rhs has length 3, expected 4");

        let e = KernelError::TaskFailed {
            name: "sine".into(),
            reason: "worker panicked".into(),
        };
        assert_eq!(e.to_string(), "task 'sine' failed: worker panicked");
    }
}
