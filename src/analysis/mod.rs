// Analysis pipeline: discovery, per-unit scoring passes, report merging

pub mod classify;
pub mod complexity;
pub mod report;

pub use classify::{classify, ScoreScope};
pub use report::{ComplexityRecord, ComplexityReport};

use crate::config::{AnalysisConfig, Config};
use crate::error::{Error, Result};
use crate::output::{Notice, NoticeSink};
use crate::parser::{ClikeParser, Dialect, ParsedUnit};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Result of analyzing one or more translation units
#[derive(Debug, Default)]
pub struct AnalysisResult {
    /// Merged complexity report for the pass
    pub report: ComplexityReport,
    /// Units successfully parsed
    pub units: usize,
    /// Functions scored and recorded
    pub scored: usize,
    /// Declarations excluded by location
    pub excluded: usize,
    /// Declarations skipped for having no body
    pub skipped: usize,
    /// Files that failed to parse (path -> error message)
    pub parse_errors: HashMap<PathBuf, String>,
}

impl AnalysisResult {
    /// One-line human summary
    pub fn summary(&self) -> String {
        format!(
            "Scored {} functions across {} units ({} excluded, {} without bodies)",
            self.scored, self.units, self.excluded, self.skipped
        )
    }
}

/// Outcome of one unit's scoring pass, before any side effects
#[derive(Debug, Default)]
struct UnitOutcome {
    report: ComplexityReport,
    notices: Vec<Notice>,
    scored: usize,
    excluded: usize,
    skipped: usize,
}

/// Score every function declaration in a parsed unit, in visitation order.
/// Pure with respect to the outside world: notices are queued, not emitted.
fn score_unit(unit: &ParsedUnit, settings: &AnalysisConfig) -> UnitOutcome {
    let mut outcome = UnitOutcome::default();

    for decl in &unit.functions {
        if !classify(&decl.location, settings).is_scored() {
            outcome.excluded += 1;
            continue;
        }

        match &decl.body {
            Some(body) => {
                let value = complexity::score(body);
                outcome.report.record(decl.name.as_str(), value);
                outcome
                    .notices
                    .push(Notice::complexity(decl.location.clone(), value));
                outcome.scored += 1;
            }
            None => {
                log::debug!(
                    "{}: declaration of {} has no body, not scored",
                    unit.path.display(),
                    decl.name
                );
                outcome.skipped += 1;
            }
        }
    }

    outcome
}

/// Orchestrates discovery, parsing, scoring, and emission
pub struct Analyzer {
    config: Config,
    parser: ClikeParser,
    verbose: bool,
}

impl Analyzer {
    /// Create a new analyzer with the given configuration
    pub fn new(config: Config) -> Result<Self> {
        let parser = ClikeParser::new()?;

        Ok(Self {
            config,
            parser,
            verbose: false,
        })
    }

    /// Create analyzer with verbose output
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Analyze the unit(s) at `root` sequentially, emitting notices to `sink`
    /// as each unit completes
    pub fn analyze(&mut self, root: &Path, sink: &mut dyn NoticeSink) -> Result<AnalysisResult> {
        let files = self.discover_files(root)?;
        let mut result = AnalysisResult::default();

        let progress = if self.verbose {
            let pb = ProgressBar::new(files.len() as u64);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                    .unwrap()
                    .progress_chars("#>-"),
            );
            Some(pb)
        } else {
            None
        };

        for path in &files {
            if let Some(ref pb) = progress {
                let msg = path
                    .file_name()
                    .unwrap_or_default()
                    .to_string_lossy()
                    .to_string();
                pb.set_message(msg);
                pb.inc(1);
            }

            match self.parser.parse_file(path) {
                Ok(unit) => {
                    let outcome = score_unit(&unit, &self.config.analysis);
                    self.absorb(outcome, &mut result, sink);
                    result.units += 1;
                }
                Err(e) => {
                    result.parse_errors.insert(path.clone(), e.to_string());
                }
            }
        }

        if let Some(pb) = progress {
            pb.finish_with_message("Analysis complete");
        }

        Ok(result)
    }

    /// Analyze units in parallel. Each worker scores into an isolated partial
    /// report; merging and notice emission happen here, sequentially, in
    /// discovery order.
    pub fn analyze_parallel(
        &self,
        root: &Path,
        sink: &mut dyn NoticeSink,
    ) -> Result<AnalysisResult> {
        let files = self.discover_files(root)?;
        let settings = &self.config.analysis;

        let outcomes: Vec<(PathBuf, Result<UnitOutcome>)> = files
            .par_iter()
            .map_init(ClikeParser::new, |parser, path| {
                let outcome = match parser {
                    Ok(parser) => parser
                        .parse_file(path)
                        .map(|unit| score_unit(&unit, settings)),
                    Err(e) => Err(Error::parser(format!("worker init failed: {}", e))),
                };
                (path.clone(), outcome)
            })
            .collect();

        let mut result = AnalysisResult::default();
        for (path, outcome) in outcomes {
            match outcome {
                Ok(outcome) => {
                    self.absorb(outcome, &mut result, sink);
                    result.units += 1;
                }
                Err(e) => {
                    result.parse_errors.insert(path, e.to_string());
                }
            }
        }

        Ok(result)
    }

    /// Merge a unit outcome into the pass result and flush its notices
    fn absorb(&self, outcome: UnitOutcome, result: &mut AnalysisResult, sink: &mut dyn NoticeSink) {
        result.scored += outcome.scored;
        result.excluded += outcome.excluded;
        result.skipped += outcome.skipped;
        result.report.merge(outcome.report);

        if self.config.output.notices {
            for notice in outcome.notices {
                sink.emit(notice);
            }
        }
    }

    /// Discover the source files to analyze under `root`
    pub fn discover_files(&self, root: &Path) -> Result<Vec<PathBuf>> {
        if !root.exists() {
            return Err(Error::PathNotFound(root.to_path_buf()));
        }

        if root.is_file() {
            return Ok(vec![root.to_path_buf()]);
        }

        let includes = compile_patterns(&self.config.analysis.include)?;
        let excludes = compile_patterns(&self.config.analysis.exclude)?;

        let mut files = Vec::new();
        for entry in WalkDir::new(root)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if path.is_dir() {
                continue;
            }

            // Only parseable source files are candidates
            if Dialect::from_path(path).is_none() {
                continue;
            }

            let relative = path.strip_prefix(root).unwrap_or(path);
            if !includes.iter().any(|p| p.matches_path(relative)) {
                continue;
            }
            if excludes.iter().any(|p| p.matches_path(relative)) {
                continue;
            }

            files.push(path.to_path_buf());
        }

        files.sort();

        if files.is_empty() {
            return Err(Error::analysis("No C/C++ source files found"));
        }

        Ok(files)
    }

    /// Number of source files that would be analyzed
    pub fn file_count(&self, root: &Path) -> Result<usize> {
        self.discover_files(root).map(|f| f.len())
    }
}

fn compile_patterns(patterns: &[String]) -> Result<Vec<glob::Pattern>> {
    patterns
        .iter()
        .map(|p| glob::Pattern::new(p).map_err(Error::from))
        .collect()
}
