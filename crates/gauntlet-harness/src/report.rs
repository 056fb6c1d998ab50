//! Plain-text benchmark reports.
//!
//! A report is an optional preamble line, one or more value lines, and a
//! closing `Elapsed: X.XXs` line:
//!
//! ```text
//! Counting primes up to 500000...
//! Found 41538 primes.
//! Elapsed: 0.12s
//! ```

use std::fmt;

use gauntlet_core::{BenchmarkId, SampleResult, Verdict};

/// The printable outcome of one benchmark run.
#[derive(Clone, Debug, PartialEq)]
pub struct Report {
    preamble: Option<String>,
    lines: Vec<String>,
    result: SampleResult,
}

impl Report {
    /// A report with a single value line.
    pub fn new(result: SampleResult, line: impl Into<String>) -> Self {
        Self {
            preamble: None,
            lines: vec![line.into()],
            result,
        }
    }

    /// Add the line printed before the kernel starts.
    pub fn with_preamble(mut self, preamble: impl Into<String>) -> Self {
        self.preamble = Some(preamble.into());
        self
    }

    /// Append another value line.
    pub fn with_line(mut self, line: impl Into<String>) -> Self {
        self.lines.push(line.into());
        self
    }

    /// Which benchmark this reports on.
    pub fn id(&self) -> BenchmarkId {
        self.result.id()
    }

    /// The underlying result.
    pub fn result(&self) -> &SampleResult {
        &self.result
    }

    /// The correctness verdict.
    pub fn verdict(&self) -> &Verdict {
        self.result.verdict()
    }

    /// The value lines, without preamble or elapsed line.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(p) = &self.preamble {
            writeln!(f, "{p}")?;
        }
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        write!(f, "Elapsed: {:.2}s", self.result.elapsed_secs())
    }
}
