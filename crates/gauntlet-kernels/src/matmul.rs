//! Dense N×N matrix multiplication, canonical i-j-k order.
//!
//! Each output cell accumulates its N products in ascending `k`, so the
//! row-parallel form computes every cell exactly as the sequential one.

use gauntlet_core::{KernelError, Matrix};
use rayon::prelude::*;

fn check_orders(a: &Matrix, b: &Matrix) -> Result<usize, KernelError> {
    if a.order() != b.order() {
        return Err(KernelError::ShapeMismatch {
            what: "matrix rhs order",
            expected: a.order(),
            actual: b.order(),
        });
    }
    Ok(a.order())
}

/// `out_row[j] = Σ_k a_row[k] · b[k, j]`.
#[inline]
fn multiply_row(a_row: &[f64], b: &[f64], n: usize, out_row: &mut [f64]) {
    for j in 0..n {
        let mut sum = 0.0;
        for k in 0..n {
            sum += a_row[k] * b[k * n + j];
        }
        out_row[j] = sum;
    }
}

/// Compute `C = A · B` into a freshly allocated matrix.
pub fn multiply(a: &Matrix, b: &Matrix) -> Result<Matrix, KernelError> {
    let n = check_orders(a, b)?;
    let mut c = Matrix::zeros(n)?;
    multiply_into(a, b, &mut c)?;
    Ok(c)
}

/// Compute `C = A · B` into `c`, overwriting it.
pub fn multiply_into(a: &Matrix, b: &Matrix, c: &mut Matrix) -> Result<(), KernelError> {
    let n = check_orders(a, b)?;
    if c.order() != n {
        return Err(KernelError::ShapeMismatch {
            what: "matrix output order",
            expected: n,
            actual: c.order(),
        });
    }
    let b = b.as_slice();
    for (i, out_row) in c.as_mut_slice().chunks_mut(n).enumerate() {
        multiply_row(a.row(i), b, n, out_row);
    }
    Ok(())
}

/// Row-parallel [`multiply`].
pub fn par_multiply(a: &Matrix, b: &Matrix) -> Result<Matrix, KernelError> {
    let n = check_orders(a, b)?;
    let mut c = Matrix::zeros(n)?;
    let b = b.as_slice();
    c.as_mut_slice()
        .par_chunks_mut(n)
        .enumerate()
        .for_each(|(i, out_row)| multiply_row(a.row(i), b, n, out_row));
    Ok(c)
}
