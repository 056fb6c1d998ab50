//! Monte Carlo estimate of pi.
//!
//! Points are drawn uniformly from `[0,1)²` and the fraction falling in
//! the unit quarter-disc approximates `pi/4`. Randomness comes from a
//! seeded ChaCha8 generator. The parallel form gives every worker its own
//! ChaCha stream (same seed, distinct stream id), so workers share no
//! mutable state and their sequences do not overlap.

use gauntlet_core::KernelError;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;

/// Default number of sampling workers.
pub const DEFAULT_WORKERS: usize = 10;

/// Result of a Monte Carlo run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PiEstimate {
    /// Points that landed inside the quarter-disc.
    pub inside: u64,
    /// Points drawn in total.
    pub samples: u64,
    /// `4 · inside / samples`.
    pub estimate: f64,
}

impl PiEstimate {
    fn new(inside: u64, samples: u64) -> Self {
        Self {
            inside,
            samples,
            estimate: 4.0 * inside as f64 / samples as f64,
        }
    }
}

/// The generator for `worker` under `seed`.
///
/// Worker 0 is the stream used by the sequential estimator.
pub fn worker_rng(seed: u64, worker: usize) -> ChaCha8Rng {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    rng.set_stream(worker as u64);
    rng
}

/// A fresh seed from the OS-seeded thread generator.
pub fn entropy_seed() -> u64 {
    rand::rng().random()
}

/// Draw `samples` points from `rng` and count those with `x² + y² ≤ 1`.
pub fn count_inside<R: Rng>(rng: &mut R, samples: u64) -> u64 {
    let mut count = 0;
    for _ in 0..samples {
        let x: f64 = rng.random();
        let y: f64 = rng.random();
        if x * x + y * y <= 1.0 {
            count += 1;
        }
    }
    count
}

fn check_samples(total_samples: u64) -> Result<(), KernelError> {
    if total_samples == 0 {
        return Err(KernelError::InvalidSize {
            what: "monte carlo sample count",
            value: 0,
        });
    }
    Ok(())
}

/// Single-stream estimate.
pub fn estimate_pi(total_samples: u64, seed: u64) -> Result<PiEstimate, KernelError> {
    check_samples(total_samples)?;
    let inside = count_inside(&mut worker_rng(seed, 0), total_samples);
    Ok(PiEstimate::new(inside, total_samples))
}

/// Split `total_samples` across `workers` independent streams.
///
/// Each worker draws `total_samples / workers` points; the last worker
/// also draws the remainder, so exactly `total_samples` points are used.
/// With `workers == 1` the result equals [`estimate_pi`].
pub fn par_estimate_pi(
    total_samples: u64,
    workers: usize,
    seed: u64,
) -> Result<PiEstimate, KernelError> {
    check_samples(total_samples)?;
    if workers == 0 {
        return Err(KernelError::InvalidSize {
            what: "monte carlo worker count",
            value: 0,
        });
    }
    let per_worker = total_samples / workers as u64;
    let remainder = total_samples % workers as u64;
    tracing::debug!(workers, per_worker, remainder, "partitioned monte carlo sampling");

    let inside: u64 = (0..workers)
        .into_par_iter()
        .map(|w| {
            let share = if w + 1 == workers {
                per_worker + remainder
            } else {
                per_worker
            };
            count_inside(&mut worker_rng(seed, w), share)
        })
        .sum();
    Ok(PiEstimate::new(inside, total_samples))
}
