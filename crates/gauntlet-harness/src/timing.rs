//! Elapsed-time capture around a single kernel invocation.

use std::time::Duration;

use gauntlet_core::Clock;

/// Run `f` once and return its output with the time it took on `clock`.
///
/// Only the closure is timed; anything the caller does before or after
/// (dataset generation, checks) is excluded.
pub fn measure<T>(clock: &dyn Clock, f: impl FnOnce() -> T) -> (T, Duration) {
    let start = clock.now();
    let out = f();
    let end = clock.now();
    (out, end.saturating_sub(start))
}

/// Like [`measure`] for fallible kernels; the error propagates untimed.
pub fn measure_result<T, E>(
    clock: &dyn Clock,
    f: impl FnOnce() -> Result<T, E>,
) -> Result<(T, Duration), E> {
    let (out, elapsed) = measure(clock, f);
    Ok((out?, elapsed))
}
