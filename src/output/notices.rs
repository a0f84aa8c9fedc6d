// Notice channel for per-function remarks
//
// Scores are pushed to a sink handle threaded through the analysis pass
// rather than a global diagnostics engine. Emission is one-way: a sink that
// drops or fails to deliver a notice does so under its own policy, and
// nothing is reported back to the pass.

use crate::parser::SourceLocation;
use std::fmt;

/// Notice severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Remark,
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Remark => write!(f, "remark"),
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// A single notice tied to a source location
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub location: SourceLocation,
    pub severity: Severity,
    pub message: String,
}

impl Notice {
    /// Build the remark carrying a function's complexity score
    pub fn complexity(location: SourceLocation, score: usize) -> Self {
        Self {
            location,
            severity: Severity::Remark,
            message: format!("Cyclomatic Complexity: {}", score),
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}: {}: {}",
            self.location.path.display(),
            self.location.line,
            self.severity,
            self.message
        )
    }
}

/// Destination for emitted notices
pub trait NoticeSink {
    /// Deliver a notice. Fire-and-forget; delivery failures stay in the sink.
    fn emit(&mut self, notice: Notice);
}

/// Sink that prints notices to stderr, one per line
#[derive(Debug, Default)]
pub struct ConsoleSink;

impl ConsoleSink {
    pub fn new() -> Self {
        Self
    }
}

impl NoticeSink for ConsoleSink {
    fn emit(&mut self, notice: Notice) {
        eprintln!("{}", notice);
    }
}

/// Sink that discards every notice
#[derive(Debug, Default)]
pub struct NullSink;

impl NullSink {
    pub fn new() -> Self {
        Self
    }
}

impl NoticeSink for NullSink {
    fn emit(&mut self, _notice: Notice) {}
}
