//! Post-run correctness checks.
//!
//! Each check inspects a kernel's output after timing has stopped and
//! returns a [`Verdict`]. Checks never panic on bad output; they describe
//! the first violation they find.

use gauntlet_core::Verdict;

/// Every adjacent pair is non-decreasing.
pub fn sorted<T: Ord + std::fmt::Debug>(data: &[T]) -> Verdict {
    match data.windows(2).position(|w| w[0] > w[1]) {
        None => Verdict::Passed,
        Some(i) => Verdict::Failed {
            reason: format!(
                "out of order at index {}: {:?} > {:?}",
                i,
                data[i],
                data[i + 1]
            ),
        },
    }
}

/// `actual` holds exactly the values of `expected`, in any order.
///
/// Both inputs are counted over the value range `[0, bound)`; values
/// outside it fail the check.
pub fn permutation_of(actual: &[i32], expected: &[i32], bound: usize) -> Verdict {
    if actual.len() != expected.len() {
        return Verdict::Failed {
            reason: format!(
                "length {} differs from input length {}",
                actual.len(),
                expected.len()
            ),
        };
    }
    let mut counts = vec![0i64; bound];
    for (&a, &e) in actual.iter().zip(expected) {
        match (usize::try_from(a), usize::try_from(e)) {
            (Ok(a), Ok(e)) if a < bound && e < bound => {
                counts[a] += 1;
                counts[e] -= 1;
            }
            _ => {
                return Verdict::Failed {
                    reason: format!("value outside [0, {bound})"),
                }
            }
        }
    }
    match counts.iter().position(|&c| c != 0) {
        None => Verdict::Passed,
        Some(v) => Verdict::Failed {
            reason: format!("value {v} occurs {} extra time(s)", counts[v]),
        },
    }
}

/// `|actual − expected| ≤ tolerance`.
pub fn within(what: &str, actual: f64, expected: f64, tolerance: f64) -> Verdict {
    if (actual - expected).abs() <= tolerance {
        Verdict::Passed
    } else {
        Verdict::Failed {
            reason: format!("{what} {actual} not within {tolerance} of {expected}"),
        }
    }
}

/// Exact equality for integer results.
pub fn equals(what: &str, actual: u64, expected: u64) -> Verdict {
    if actual == expected {
        Verdict::Passed
    } else {
        Verdict::Failed {
            reason: format!("{what} is {actual}, expected {expected}"),
        }
    }
}

/// Every value is finite.
pub fn all_finite(what: &str, data: &[f64]) -> Verdict {
    match data.iter().position(|v| !v.is_finite()) {
        None => Verdict::Passed,
        Some(i) => Verdict::Failed {
            reason: format!("{what} is {} at index {i}", data[i]),
        },
    }
}

/// The first failing verdict, or `Passed` if all pass.
pub fn all(verdicts: impl IntoIterator<Item = Verdict>) -> Verdict {
    for v in verdicts {
        if !v.is_acceptable() {
            return v;
        }
    }
    Verdict::Passed
}
