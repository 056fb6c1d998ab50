//! Reductions over a numeric buffer.
//!
//! Floating-point addition is not associative, so the sequential kernels
//! accumulate strictly left to right. [`par_sum`] uses a fixed chunked
//! combine: deterministic for a given chunk length, but its bit pattern
//! generally differs from [`sum`] and must be compared with a tolerance.

use gauntlet_core::KernelError;
use rayon::prelude::*;

/// Default chunk length for [`par_sum`].
pub const DEFAULT_CHUNK: usize = 1 << 14;

/// Left-to-right sum. Empty input yields `0.0`.
pub fn sum(data: &[f64]) -> f64 {
    let mut total = 0.0;
    for &x in data {
        total += x;
    }
    total
}

/// Summary of a buffer computed in one left-to-right pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stats {
    /// Left-to-right sum.
    pub total: f64,
    /// Largest element (`0.0` for empty input).
    pub max: f64,
    /// Smallest element (`0.0` for empty input).
    pub min: f64,
    /// Running product of `1 + x·1e-6` over every element (`1.0` for
    /// empty input).
    pub product: f64,
    /// Number of elements.
    pub count: usize,
}

/// Scale of each element's contribution to [`Stats::product`].
pub const PRODUCT_SCALE: f64 = 1e-6;

/// Total, max, min and the scaled product in a single pass.
///
/// Empty input yields zeros and a product of one.
pub fn stats(data: &[f64]) -> Stats {
    let Some((&first, rest)) = data.split_first() else {
        return Stats {
            total: 0.0,
            max: 0.0,
            min: 0.0,
            product: 1.0,
            count: 0,
        };
    };
    let mut total = first;
    let mut max = first;
    let mut min = first;
    let mut product = 1.0 + first * PRODUCT_SCALE;
    for &x in rest {
        total += x;
        if x > max {
            max = x;
        }
        if x < min {
            min = x;
        }
        product *= 1.0 + x * PRODUCT_SCALE;
    }
    Stats {
        total,
        max,
        min,
        product,
        count: data.len(),
    }
}

/// Chunked parallel sum: each chunk is summed left to right, then the
/// partials are summed in chunk order.
///
/// Returns `Err(KernelError::InvalidSize)` if `chunk_len == 0`.
pub fn par_sum(data: &[f64], chunk_len: usize) -> Result<f64, KernelError> {
    if chunk_len == 0 {
        return Err(KernelError::InvalidSize {
            what: "reduction chunk length",
            value: 0,
        });
    }
    let partials: Vec<f64> = data.par_chunks(chunk_len).map(sum).collect();
    Ok(sum(&partials))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datasets;
    use gauntlet_test_utils::rel_close;
    use proptest::prelude::*;

    #[test]
    fn empty_is_identity() {
        assert_eq!(sum(&[]), 0.0);
        let s = stats(&[]);
        assert_eq!((s.total, s.max, s.min, s.count), (0.0, 0.0, 0.0, 0));
        assert_eq!(s.product, 1.0);
        assert_eq!(par_sum(&[], 8).unwrap(), 0.0);
    }

    #[test]
    fn ones_sum_exactly() {
        let data = datasets::ones(1_000_000);
        assert_eq!(sum(&data), 1_000_000.0);
        assert_eq!(par_sum(&data, DEFAULT_CHUNK).unwrap(), 1_000_000.0);
    }

    #[test]
    fn left_to_right_order_is_observable() {
        // (1e16 + 1) + 1 loses both ones; a reordered sum would keep them.
        let data = [1e16, 1.0, 1.0];
        assert_eq!(sum(&data), 1e16);
    }

    #[test]
    fn stats_single_pass() {
        let s = stats(&[3.0, -1.0, 7.5, 2.0]);
        assert_eq!(s.total, 11.5);
        assert_eq!(s.max, 7.5);
        assert_eq!(s.min, -1.0);
        assert_eq!(s.count, 4);
        let expected = [3.0, -1.0, 7.5, 2.0]
            .iter()
            .fold(1.0, |p, &x| p * (1.0 + x * PRODUCT_SCALE));
        assert_eq!(s.product, expected);
    }

    #[test]
    fn product_of_a_million_ones_approaches_e() {
        let s = stats(&datasets::ones(1_000_000));
        // (1 + 1e-6)^1e6 = e·(1 − 5e-7 + ...)
        assert!((s.product - std::f64::consts::E).abs() < 2e-6, "{}", s.product);
        assert!(rel_close(s.product, (1.0 + PRODUCT_SCALE).powi(1_000_000), 1e-8));
    }

    #[test]
    fn zero_chunk_rejected() {
        assert!(matches!(
            par_sum(&[1.0], 0),
            Err(KernelError::InvalidSize { .. })
        ));
    }

    proptest! {
        #[test]
        fn par_sum_close_to_sequential(seed in any::<u64>(), n in 0usize..5000, chunk in 1usize..700) {
            let data = datasets::uniform(n, seed);
            let seq = sum(&data);
            let par = par_sum(&data, chunk).unwrap();
            prop_assert!(rel_close(seq, par, 1e-12), "seq={} par={}", seq, par);
        }

        #[test]
        fn par_sum_deterministic(seed in any::<u64>(), chunk in 1usize..300) {
            let data = datasets::uniform(2000, seed);
            let a = par_sum(&data, chunk).unwrap();
            let b = par_sum(&data, chunk).unwrap();
            prop_assert_eq!(a.to_bits(), b.to_bits());
        }
    }
}
