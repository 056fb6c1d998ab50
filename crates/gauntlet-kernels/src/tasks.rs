//! Independent scalar-accumulation tasks.
//!
//! A [`TaskGraph`] holds tasks with no data dependency between them. It
//! can run them one after another or on one scoped thread each; either
//! way the partial results are combined only after every task finishes,
//! by summing in registration order. The combined value is therefore
//! bit-identical between the two modes and independent of which thread
//! finishes first.

use std::thread;

use crossbeam_channel::bounded;
use gauntlet_core::KernelError;
use smallvec::{smallvec, SmallVec};

/// Every `TANGENT_SKIP`-th term of [`tangent_sum`] is skipped.
pub const TANGENT_SKIP: u64 = 100;

/// `Σ_{i<n} sin(i)`.
pub fn sine_sum(n: u64) -> f64 {
    let mut res = 0.0;
    for i in 0..n {
        res += (i as f64).sin();
    }
    res
}

/// `Σ_{i<n} cos(i)`.
pub fn cosine_sum(n: u64) -> f64 {
    let mut res = 0.0;
    for i in 0..n {
        res += (i as f64).cos();
    }
    res
}

/// `Σ_{i<n} tan(i)`, skipping every index divisible by [`TANGENT_SKIP`].
pub fn tangent_sum(n: u64) -> f64 {
    let mut res = 0.0;
    for i in 0..n {
        if i % TANGENT_SKIP != 0 {
            res += (i as f64).tan();
        }
    }
    res
}

/// Which accumulation loop a task runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TaskKind {
    /// [`sine_sum`].
    Sine,
    /// [`cosine_sum`].
    Cosine,
    /// [`tangent_sum`].
    Tangent,
}

impl TaskKind {
    /// Short label for logs and errors.
    pub fn name(self) -> &'static str {
        match self {
            Self::Sine => "sine",
            Self::Cosine => "cosine",
            Self::Tangent => "tangent",
        }
    }

    /// Run the loop for `iterations` terms.
    pub fn run(self, iterations: u64) -> f64 {
        match self {
            Self::Sine => sine_sum(iterations),
            Self::Cosine => cosine_sum(iterations),
            Self::Tangent => tangent_sum(iterations),
        }
    }
}

/// Partial results and their combination.
#[derive(Clone, Debug, PartialEq)]
pub struct TaskOutcome {
    /// One partial per task, in registration order.
    pub partials: SmallVec<[f64; 4]>,
    /// Sum of `partials`, left to right.
    pub combined: f64,
}

impl TaskOutcome {
    fn from_partials(partials: SmallVec<[f64; 4]>) -> Self {
        let mut combined = 0.0;
        for &p in &partials {
            combined += p;
        }
        Self { partials, combined }
    }
}

/// A set of mutually independent tasks.
#[derive(Clone, Debug, Default)]
pub struct TaskGraph {
    tasks: SmallVec<[(TaskKind, u64); 4]>,
}

impl TaskGraph {
    /// An empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// The two-task graph `sine + cosine` with `iterations` terms each.
    pub fn sine_cosine(iterations: u64) -> Self {
        Self::new()
            .with_task(TaskKind::Sine, iterations)
            .with_task(TaskKind::Cosine, iterations)
    }

    /// Append a task.
    pub fn with_task(mut self, kind: TaskKind, iterations: u64) -> Self {
        self.tasks.push((kind, iterations));
        self
    }

    /// Number of registered tasks.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// `true` if no task is registered.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    fn ensure_non_empty(&self) -> Result<(), KernelError> {
        if self.tasks.is_empty() {
            return Err(KernelError::InvalidSize {
                what: "task count",
                value: 0,
            });
        }
        Ok(())
    }

    /// Run every task on the calling thread, in order.
    pub fn run_sequential(&self) -> Result<TaskOutcome, KernelError> {
        self.ensure_non_empty()?;
        let partials = self
            .tasks
            .iter()
            .map(|&(kind, iterations)| kind.run(iterations))
            .collect();
        Ok(TaskOutcome::from_partials(partials))
    }

    /// Run every task on its own scoped thread, join all, then combine.
    ///
    /// Results travel back over a channel in completion order and are
    /// slotted by task index before combining.
    ///
    /// Returns `Err(KernelError::TaskFailed)` if a task thread panics.
    pub fn run_concurrent(&self) -> Result<TaskOutcome, KernelError> {
        self.ensure_non_empty()?;
        let (tx, rx) = bounded::<(usize, f64)>(self.tasks.len());

        let mut failures: SmallVec<[(usize, String); 4]> = SmallVec::new();
        thread::scope(|s| {
            let handles: SmallVec<[_; 4]> = self
                .tasks
                .iter()
                .enumerate()
                .map(|(idx, &(kind, iterations))| {
                    let tx = tx.clone();
                    s.spawn(move || {
                        let value = kind.run(iterations);
                        // The receiver outlives the scope; send cannot fail.
                        let _ = tx.send((idx, value));
                    })
                })
                .collect();
            for (idx, handle) in handles.into_iter().enumerate() {
                if handle.join().is_err() {
                    failures.push((idx, "worker thread panicked".to_string()));
                }
            }
        });
        drop(tx);

        if let Some((idx, reason)) = failures.into_iter().next() {
            return Err(KernelError::TaskFailed {
                name: self.tasks[idx].0.name().to_string(),
                reason,
            });
        }

        let mut slots: SmallVec<[Option<f64>; 4]> = smallvec![None; self.tasks.len()];
        for (idx, value) in rx.try_iter() {
            tracing::trace!(task = self.tasks[idx].0.name(), value, "task finished");
            slots[idx] = Some(value);
        }

        let mut partials = SmallVec::with_capacity(slots.len());
        for (idx, slot) in slots.into_iter().enumerate() {
            match slot {
                Some(v) => partials.push(v),
                None => {
                    return Err(KernelError::TaskFailed {
                        name: self.tasks[idx].0.name().to_string(),
                        reason: "no result received".to_string(),
                    })
                }
            }
        }
        Ok(TaskOutcome::from_partials(partials))
    }
}
