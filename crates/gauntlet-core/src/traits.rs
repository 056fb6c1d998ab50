//! Core abstraction traits.

use std::time::{Duration, Instant};

/// A monotonic time source.
///
/// The timing harness never reads the system clock directly; it asks a
/// `Clock` for the current offset from an arbitrary origin and subtracts.
/// Tests inject a manual clock to make elapsed times exact.
pub trait Clock: Send + Sync {
    /// Time elapsed since this clock's origin. Must never decrease.
    fn now(&self) -> Duration;
}

/// [`Clock`] backed by [`std::time::Instant`].
#[derive(Clone, Copy, Debug)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    /// Create a clock whose origin is the moment of construction.
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}
