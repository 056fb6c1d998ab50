//! Elementwise kernels: no cross-index dependency, so the parallel forms
//! partition the output into disjoint chunks and produce bit-identical
//! results.

use gauntlet_core::KernelError;
use rayon::prelude::*;

/// Step between successive sample points of the transform.
pub const SAMPLE_STEP: f64 = 0.01;

/// Iterations of the inner `sqrt(|v| + 1)` fixed-point loop.
pub const INNER_ITERATIONS: usize = 100;

/// Fixed point of `v = sqrt(v + 1)`; every transformed element converges here.
pub const GOLDEN_RATIO: f64 = 1.618_033_988_749_895;

/// Elements per rayon work item.
const CHUNK: usize = 4096;

/// The per-element transform: `f^100(sin(x)·cos(x))`, `x = i·0.01`.
#[inline]
pub fn transform(i: usize) -> f64 {
    let x = i as f64 * SAMPLE_STEP;
    let mut v = x.sin() * x.cos();
    for _ in 0..INNER_ITERATIONS {
        // abs before sqrt keeps the argument >= 1
        v = (v.abs() + 1.0).sqrt();
    }
    v
}

/// Fill `out[i]` with [`transform(i)`](transform) for every index.
pub fn heavy_loop(out: &mut [f64]) {
    for (i, v) in out.iter_mut().enumerate() {
        *v = transform(i);
    }
}

/// Parallel [`heavy_loop`].
pub fn par_heavy_loop(out: &mut [f64]) {
    out.par_chunks_mut(CHUNK)
        .enumerate()
        .for_each(|(chunk_idx, chunk)| {
            let base = chunk_idx * CHUNK;
            for (k, v) in chunk.iter_mut().enumerate() {
                *v = transform(base + k);
            }
        });
}

fn check_lengths(a: &[f64], b: &[f64], out: &[f64]) -> Result<(), KernelError> {
    if b.len() != a.len() {
        return Err(KernelError::ShapeMismatch {
            what: "vector rhs",
            expected: a.len(),
            actual: b.len(),
        });
    }
    if out.len() != a.len() {
        return Err(KernelError::ShapeMismatch {
            what: "vector output",
            expected: a.len(),
            actual: out.len(),
        });
    }
    Ok(())
}

/// `out[i] = a[i]·b[i] + (a[i] − b[i])`.
pub fn vector_ops(a: &[f64], b: &[f64], out: &mut [f64]) -> Result<(), KernelError> {
    check_lengths(a, b, out)?;
    for i in 0..a.len() {
        out[i] = a[i] * b[i] + (a[i] - b[i]);
    }
    Ok(())
}

/// Parallel [`vector_ops`].
pub fn par_vector_ops(a: &[f64], b: &[f64], out: &mut [f64]) -> Result<(), KernelError> {
    check_lengths(a, b, out)?;
    out.par_iter_mut()
        .zip(a.par_iter().zip(b.par_iter()))
        .for_each(|(o, (&x, &y))| *o = x * y + (x - y));
    Ok(())
}

/// `out[i] = a[i]·b[i] + a[i] / (b[i] + 1)`.
///
/// Meant for inputs in `[0, 1)`, where the divisor is at least one.
pub fn vector_blend(a: &[f64], b: &[f64], out: &mut [f64]) -> Result<(), KernelError> {
    check_lengths(a, b, out)?;
    for i in 0..a.len() {
        out[i] = a[i] * b[i] + a[i] / (b[i] + 1.0);
    }
    Ok(())
}

/// Parallel [`vector_blend`].
pub fn par_vector_blend(a: &[f64], b: &[f64], out: &mut [f64]) -> Result<(), KernelError> {
    check_lengths(a, b, out)?;
    out.par_iter_mut()
        .zip(a.par_iter().zip(b.par_iter()))
        .for_each(|(o, (&x, &y))| *o = x * y + x / (y + 1.0));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datasets;
    use gauntlet_core::f64_hash;

    #[test]
    fn transform_converges_to_golden_ratio() {
        let mut out = vec![0.0; 1000];
        heavy_loop(&mut out);
        for (i, &v) in out.iter().enumerate() {
            assert!(
                (v - GOLDEN_RATIO).abs() < 1e-12,
                "element {i} = {v} did not converge"
            );
        }
    }

    #[test]
    fn empty_buffer_is_noop() {
        let mut out: Vec<f64> = vec![];
        heavy_loop(&mut out);
        par_heavy_loop(&mut out);
        assert!(vector_ops(&[], &[], &mut out).is_ok());
    }

    #[test]
    fn parallel_heavy_loop_bit_identical() {
        let n = CHUNK * 3 + 17;
        let mut seq = vec![0.0; n];
        let mut par = vec![0.0; n];
        heavy_loop(&mut seq);
        par_heavy_loop(&mut par);
        assert_eq!(f64_hash(&seq), f64_hash(&par));
    }

    #[test]
    fn vector_ops_on_ramp() {
        let n = 1000;
        let (a, b) = datasets::ramp_pair(n);
        let mut out = vec![0.0; n];
        vector_ops(&a, &b, &mut out).unwrap();
        assert_eq!(out[0], -(n as f64));
        // a=1, b=999: 999 + (1 - 999)
        assert_eq!(out[1], 1.0);

        let mut par = vec![0.0; n];
        par_vector_ops(&a, &b, &mut par).unwrap();
        assert_eq!(out, par);
    }

    #[test]
    fn vector_blend_on_uniform_inputs() {
        let a = datasets::uniform(5000, 1);
        let b = datasets::uniform(5000, 2);
        let mut seq = vec![0.0; a.len()];
        let mut par = vec![0.0; a.len()];
        vector_blend(&a, &b, &mut seq).unwrap();
        par_vector_blend(&a, &b, &mut par).unwrap();
        assert_eq!(f64_hash(&seq), f64_hash(&par));
        // a·b < 1 and a / (b + 1) < 1
        assert!(seq.iter().all(|&v| (0.0..2.0).contains(&v)));
        assert_eq!(seq[0], a[0] * b[0] + a[0] / (b[0] + 1.0));
    }

    #[test]
    fn vector_blend_known_values() {
        let mut out = vec![0.0; 2];
        vector_blend(&[0.5, 1.0], &[1.0, 0.0], &mut out).unwrap();
        assert_eq!(out, vec![0.75, 1.0]);
        assert!(vector_blend(&[1.0; 2], &[1.0; 3], &mut out).is_err());
    }

    #[test]
    fn vector_ops_rejects_mismatch() {
        let mut out = vec![0.0; 3];
        let err = vector_ops(&[1.0; 3], &[1.0; 2], &mut out).unwrap_err();
        assert_eq!(
            err,
            KernelError::ShapeMismatch {
                what: "vector rhs",
                expected: 3,
                actual: 2
            }
        );
        let mut short = vec![0.0; 1];
        assert!(par_vector_ops(&[1.0; 3], &[1.0; 3], &mut short).is_err());
    }
}
