//! Owned row-major numeric buffers: [`Matrix`] and [`Image`].
//!
//! Both types wrap a single heap-allocated `Vec<f64>` whose length is
//! fixed at construction. The shape invariant (`data.len() == n * n` for a
//! matrix, `rows * cols` for an image) is checked once in the constructors
//! and cannot be broken afterwards because the backing vector is never
//! exposed mutably as a `Vec`, only as a slice.

use crate::error::KernelError;

fn checked_area(what: &'static str, a: usize, b: usize) -> Result<usize, KernelError> {
    if a == 0 || b == 0 {
        return Err(KernelError::InvalidSize {
            what,
            value: a.min(b),
        });
    }
    a.checked_mul(b)
        .ok_or(KernelError::InvalidSize { what, value: a.max(b) })
}

// ── Matrix ──────────────────────────────────────────────────────

/// A dense N×N matrix stored row-major.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix {
    n: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// Allocate a zero-filled N×N matrix.
    ///
    /// Returns `Err(KernelError::InvalidSize)` if `n == 0` or `n * n`
    /// overflows.
    pub fn zeros(n: usize) -> Result<Self, KernelError> {
        let len = checked_area("matrix order", n, n)?;
        Ok(Self {
            n,
            data: vec![0.0; len],
        })
    }

    /// Wrap an existing row-major buffer.
    ///
    /// Returns `Err(KernelError::ShapeMismatch)` if `data.len() != n * n`.
    pub fn from_vec(n: usize, data: Vec<f64>) -> Result<Self, KernelError> {
        let len = checked_area("matrix order", n, n)?;
        if data.len() != len {
            return Err(KernelError::ShapeMismatch {
                what: "matrix buffer",
                expected: len,
                actual: data.len(),
            });
        }
        Ok(Self { n, data })
    }

    /// Build a matrix by evaluating `f(row, col)` for every cell.
    pub fn from_fn(n: usize, mut f: impl FnMut(usize, usize) -> f64) -> Result<Self, KernelError> {
        let mut m = Self::zeros(n)?;
        for i in 0..n {
            for j in 0..n {
                m.data[i * n + j] = f(i, j);
            }
        }
        Ok(m)
    }

    /// Matrix order N.
    pub fn order(&self) -> usize {
        self.n
    }

    /// Element at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        assert!(row < self.n && col < self.n, "index ({row}, {col}) out of range");
        self.data[row * self.n + col]
    }

    /// One row as a slice.
    pub fn row(&self, row: usize) -> &[f64] {
        &self.data[row * self.n..(row + 1) * self.n]
    }

    /// Flat row-major view.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Flat row-major mutable view.
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Consume the matrix and return its backing buffer.
    pub fn into_vec(self) -> Vec<f64> {
        self.data
    }
}

// ── Image ───────────────────────────────────────────────────────

/// A single-channel `rows × cols` image stored row-major.
#[derive(Clone, Debug, PartialEq)]
pub struct Image {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Image {
    /// Allocate a zero-filled image.
    ///
    /// Returns `Err(KernelError::InvalidSize)` if either dimension is zero.
    pub fn zeros(rows: usize, cols: usize) -> Result<Self, KernelError> {
        let len = checked_area("image dimension", rows, cols)?;
        Ok(Self {
            rows,
            cols,
            data: vec![0.0; len],
        })
    }

    /// Wrap an existing row-major buffer.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self, KernelError> {
        let len = checked_area("image dimension", rows, cols)?;
        if data.len() != len {
            return Err(KernelError::ShapeMismatch {
                what: "image buffer",
                expected: len,
                actual: data.len(),
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// Build an image from its flat index: `f(r * cols + c)`.
    pub fn from_index_fn(
        rows: usize,
        cols: usize,
        f: impl FnMut(usize) -> f64,
    ) -> Result<Self, KernelError> {
        let len = checked_area("image dimension", rows, cols)?;
        Ok(Self {
            rows,
            cols,
            data: (0..len).map(f).collect(),
        })
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `true` if `other` has the same dimensions.
    pub fn same_shape(&self, other: &Image) -> bool {
        self.rows == other.rows && self.cols == other.cols
    }

    /// Pixel at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.cols + col]
    }

    /// `true` if `(row, col)` lies on the outermost ring of pixels.
    pub fn is_border(&self, row: usize, col: usize) -> bool {
        row == 0 || col == 0 || row + 1 == self.rows || col + 1 == self.cols
    }

    /// Flat row-major view.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Flat row-major mutable view.
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn zero_order_matrix_rejected() {
        assert_eq!(
            Matrix::zeros(0),
            Err(KernelError::InvalidSize {
                what: "matrix order",
                value: 0
            })
        );
    }

    #[test]
    fn from_vec_checks_length() {
        let err = Matrix::from_vec(3, vec![0.0; 8]).unwrap_err();
        assert_eq!(
            err,
            KernelError::ShapeMismatch {
                what: "matrix buffer",
                expected: 9,
                actual: 8
            }
        );
        assert!(Matrix::from_vec(3, vec![0.0; 9]).is_ok());
    }

    #[test]
    fn matrix_row_slices() {
        let m = Matrix::from_fn(3, |i, j| (i * 10 + j) as f64).unwrap();
        assert_eq!(m.row(1), &[10.0, 11.0, 12.0]);
        assert_eq!(m.get(2, 0), 20.0);
    }

    #[test]
    fn image_border_classification() {
        let img = Image::zeros(4, 5).unwrap();
        assert!(img.is_border(0, 2));
        assert!(img.is_border(3, 2));
        assert!(img.is_border(2, 0));
        assert!(img.is_border(2, 4));
        assert!(!img.is_border(1, 1));
        assert!(!img.is_border(2, 3));
    }

    #[test]
    fn image_rejects_empty_dimension() {
        assert!(Image::zeros(0, 10).is_err());
        assert!(Image::zeros(10, 0).is_err());
        assert!(Image::from_vec(2, 2, vec![1.0; 3]).is_err());
    }

    proptest! {
        #[test]
        fn from_fn_places_every_cell(n in 1usize..12) {
            let m = Matrix::from_fn(n, |i, j| (i * n + j) as f64).unwrap();
            prop_assert_eq!(m.as_slice().len(), n * n);
            for (idx, &v) in m.as_slice().iter().enumerate() {
                prop_assert_eq!(v, idx as f64);
            }
        }

        #[test]
        fn image_index_fn_matches_get(rows in 1usize..10, cols in 1usize..10) {
            let img = Image::from_index_fn(rows, cols, |i| i as f64).unwrap();
            for r in 0..rows {
                for c in 0..cols {
                    prop_assert_eq!(img.get(r, c), (r * cols + c) as f64);
                }
            }
        }
    }
}
