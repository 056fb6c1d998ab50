//! Deterministic input generators.
//!
//! Fixed-pattern generators reproduce the classic benchmark inputs
//! (`i % 100` matrices, `i % 255` images, a particle grid). Random
//! generators take an explicit seed and draw from ChaCha8, so the same
//! seed always yields the same data on every platform.

use gauntlet_core::{Image, KernelError, Matrix, ParticleSystem};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seed for the merge-sort input.
pub const MERGE_SORT_SEED: u64 = 42;

/// Modulus of the matrix fill pattern.
pub const MATRIX_MODULUS: usize = 100;

/// Modulus of the image fill pattern.
pub const IMAGE_MODULUS: usize = 255;

/// Coordinate extent of the particle grid and random particles.
pub const PARTICLE_EXTENT: usize = 100;

/// `n` zeros.
pub fn zeros(n: usize) -> Vec<f64> {
    vec![0.0; n]
}

/// `n` ones.
pub fn ones(n: usize) -> Vec<f64> {
    vec![1.0; n]
}

/// `a[i] = i`, `b[i] = n - i`.
pub fn ramp_pair(n: usize) -> (Vec<f64>, Vec<f64>) {
    let a = (0..n).map(|i| i as f64).collect();
    let b = (0..n).map(|i| (n - i) as f64).collect();
    (a, b)
}

/// `0, 1, …, n − 1` as floats.
pub fn indices(n: usize) -> Vec<f64> {
    (0..n).map(|i| i as f64).collect()
}

/// `n` samples uniform in `[0, 1)`.
pub fn uniform(n: usize, seed: u64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n).map(|_| rng.random()).collect()
}

/// N×N matrix with `m[i] = i % 100` over the flat row-major index.
pub fn modulo_matrix(n: usize) -> Result<Matrix, KernelError> {
    Matrix::from_fn(n, |i, j| ((i * n + j) % MATRIX_MODULUS) as f64)
}

/// N×N matrix with entries uniform in `[0, 1)`.
pub fn uniform_matrix(n: usize, seed: u64) -> Result<Matrix, KernelError> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    Matrix::from_fn(n, |_, _| rng.random())
}

/// Particles at `(i % 100, 2i % 100)`, unit mass, at rest.
pub fn grid_particles(n: usize) -> Result<ParticleSystem, KernelError> {
    let pos_x = (0..n).map(|i| (i % PARTICLE_EXTENT) as f64).collect();
    let pos_y = (0..n).map(|i| ((2 * i) % PARTICLE_EXTENT) as f64).collect();
    ParticleSystem::at_rest(pos_x, pos_y, vec![1.0; n])
}

/// Particles uniform in `[0, 100)²`, masses in `(0, 1]`, at rest.
pub fn random_particles(n: usize, seed: u64) -> Result<ParticleSystem, KernelError> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let extent = PARTICLE_EXTENT as f64;
    let mut pos_x = Vec::with_capacity(n);
    let mut pos_y = Vec::with_capacity(n);
    let mut mass = Vec::with_capacity(n);
    for _ in 0..n {
        pos_x.push(rng.random::<f64>() * extent);
        pos_y.push(rng.random::<f64>() * extent);
        mass.push(1.0 - rng.random::<f64>());
    }
    ParticleSystem::at_rest(pos_x, pos_y, mass)
}

/// Image with `p[i] = i % 255` over the flat row-major index.
pub fn sawtooth_image(rows: usize, cols: usize) -> Result<Image, KernelError> {
    Image::from_index_fn(rows, cols, |i| (i % IMAGE_MODULUS) as f64)
}

/// Image with every pixel set to `value`.
pub fn constant_image(rows: usize, cols: usize, value: f64) -> Result<Image, KernelError> {
    Image::from_index_fn(rows, cols, |_| value)
}

/// `n` integers uniform in `[0, n)`.
///
/// Returns `Err(KernelError::InvalidSize)` if `n` exceeds `i32::MAX`.
pub fn random_ints(n: usize, seed: u64) -> Result<Vec<i32>, KernelError> {
    let bound = i32::try_from(n).map_err(|_| KernelError::InvalidSize {
        what: "integer sequence length",
        value: n,
    })?;
    if bound == 0 {
        return Ok(Vec::new());
    }
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    Ok((0..n).map(|_| rng.random_range(0..bound)).collect())
}
