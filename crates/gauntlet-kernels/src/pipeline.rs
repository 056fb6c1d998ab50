//! Three-stage read → process → write pipeline.
//!
//! Each stage consumes the previous stage's output buffer whole, so the
//! stages run strictly in order. Only the process stage does real work:
//! every item is pushed through [`PROCESS_ROUNDS`] rounds of
//! `v = sin(v)·cos(v) + x`. Items are independent, so [`par_process_stage`]
//! maps them on rayon and is bit-identical to [`process_stage`].

use rayon::prelude::*;

/// Default rounds of the per-item recurrence.
pub const PROCESS_ROUNDS: usize = 500;

/// What the write stage reports.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PipelineOutput {
    /// Items written.
    pub written: usize,
    /// Left-to-right sum of the written values.
    pub checksum: f64,
}

/// Copy the input into an owned stage buffer.
pub fn read_stage(items: &[f64]) -> Vec<f64> {
    items.to_vec()
}

/// `rounds` iterations of `v = sin(v)·cos(v) + x`, starting from `v = x`.
///
/// `sin(v)·cos(v)` lies in `[-½, ½]`, so after at least one round the
/// result is within `½` of `x`.
#[inline]
pub fn process_item(x: f64, rounds: usize) -> f64 {
    let mut v = x;
    for _ in 0..rounds {
        v = v.sin() * v.cos() + x;
    }
    v
}

/// [`process_item`] over every item, in order.
pub fn process_stage(items: Vec<f64>, rounds: usize) -> Vec<f64> {
    items.into_iter().map(|x| process_item(x, rounds)).collect()
}

/// Parallel [`process_stage`]. Output order matches input order.
pub fn par_process_stage(items: Vec<f64>, rounds: usize) -> Vec<f64> {
    items
        .into_par_iter()
        .map(|x| process_item(x, rounds))
        .collect()
}

/// Drain the processed buffer and report what was written.
pub fn write_stage(results: Vec<f64>) -> PipelineOutput {
    let mut checksum = 0.0;
    for &v in &results {
        checksum += v;
    }
    PipelineOutput {
        written: results.len(),
        checksum,
    }
}

/// Run all three stages.
pub fn pipeline_flow(items: &[f64], rounds: usize, parallel: bool) -> PipelineOutput {
    let raw = read_stage(items);
    let processed = if parallel {
        par_process_stage(raw, rounds)
    } else {
        process_stage(raw, rounds)
    };
    write_stage(processed)
}
