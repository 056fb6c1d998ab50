//! Strongly-typed benchmark identifiers.

use std::fmt;

/// Identifies one benchmark in the suite.
///
/// Numbering follows the historical program order (`01_simple_loop` ..
/// `10_prime_sieve`), with `11_pipeline` appended. The numeric id is
/// stable and used for report ordering; [`name`](BenchmarkId::name) is
/// the snake_case label.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BenchmarkId {
    /// Elementwise transcendental transform with an inner fixed-point loop.
    SimpleLoop,
    /// Left-to-right sum over a buffer of ones.
    Reduction,
    /// Independent scalar accumulation tasks, joined then combined.
    Tasks,
    /// Elementwise binary operation over two buffers.
    Vector,
    /// Monte Carlo estimate of pi.
    MonteCarloPi,
    /// Dense N×N matrix multiplication.
    MatrixMultiplication,
    /// Pairwise gravitational n-body integration.
    NbodySimulation,
    /// 3×3 box blur with ping-pong buffers.
    ImageConvolution,
    /// Stable top-down merge sort.
    MergeSort,
    /// Trial-division prime counting.
    PrimeSieve,
    /// Read → process → write stages over independent items.
    Pipeline,
}

impl BenchmarkId {
    /// Every benchmark, in report order.
    pub const ALL: [BenchmarkId; 11] = [
        Self::SimpleLoop,
        Self::Reduction,
        Self::Tasks,
        Self::Vector,
        Self::MonteCarloPi,
        Self::MatrixMultiplication,
        Self::NbodySimulation,
        Self::ImageConvolution,
        Self::MergeSort,
        Self::PrimeSieve,
        Self::Pipeline,
    ];

    /// Stable numeric id (1-based).
    pub fn number(self) -> u8 {
        match self {
            Self::SimpleLoop => 1,
            Self::Reduction => 2,
            Self::Tasks => 3,
            Self::Vector => 4,
            Self::MonteCarloPi => 5,
            Self::MatrixMultiplication => 6,
            Self::NbodySimulation => 7,
            Self::ImageConvolution => 8,
            Self::MergeSort => 9,
            Self::PrimeSieve => 10,
            Self::Pipeline => 11,
        }
    }

    /// snake_case label used in logs and reports.
    pub fn name(self) -> &'static str {
        match self {
            Self::SimpleLoop => "simple_loop",
            Self::Reduction => "reduction",
            Self::Tasks => "tasks",
            Self::Vector => "vector",
            Self::MonteCarloPi => "monte_carlo_pi",
            Self::MatrixMultiplication => "matrix_multiplication",
            Self::NbodySimulation => "nbody_simulation",
            Self::ImageConvolution => "image_convolution",
            Self::MergeSort => "merge_sort",
            Self::PrimeSieve => "prime_sieve",
            Self::Pipeline => "pipeline",
        }
    }

    /// Look up a benchmark by its snake_case label.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.name() == name)
    }
}

impl fmt::Display for BenchmarkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}_{}", self.number(), self.name())
    }
}
