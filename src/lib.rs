//! Cyclo - Per-function cyclomatic complexity for C and C++
//!
//! Parses translation units with tree-sitter, scores each defined function as
//! `1 + decision points`, emits per-function remarks, and persists a plain
//! text report artifact.

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod parser;

// Re-export main types
pub use analysis::{classify, AnalysisResult, Analyzer, ComplexityRecord, ComplexityReport, ScoreScope};
pub use config::Config;
pub use error::{Error, Result};
pub use output::{parse_artifact, persist, ConsoleSink, Notice, NoticeSink, NullSink, Severity};
pub use parser::{ClikeParser, Dialect, FunctionDecl, ParsedUnit, SourceLocation, Stmt, StmtKind};
