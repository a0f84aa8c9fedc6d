//! CLI module for Cyclo

mod args;

pub use args::{Args, Command};

use crate::analysis::Analyzer;
use crate::config::{Config, OutputFormat};
use crate::error::Result;
use crate::output::{persist, ConsoleSink};
use std::path::Path;
use std::process::ExitCode;

/// Run the CLI application
pub fn run() -> ExitCode {
    let args = Args::parse_args();

    match execute(args) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn execute(args: Args) -> Result<()> {
    match args.command {
        Command::Analyze {
            path,
            output,
            exclude,
            include,
            config,
            format,
            parallel,
            no_notices,
            verbose,
        } => {
            // Load config file if it exists
            let mut cfg = if let Some(config_path) = &config {
                Config::load_or_default(config_path)
            } else {
                let default_path = Path::new("cyclo.toml");
                Config::load_or_default(default_path)
            };

            // Merge CLI arguments (CLI takes precedence)
            cfg.merge_cli(
                Some(output.clone()),
                exclude,
                Some(format.clone()),
                no_notices,
            );

            // Handle include patterns
            if !include.is_empty() {
                cfg.analysis.include = include;
            }

            if verbose {
                println!("Analyzing: {}", path.display());
                println!("Output: {}", cfg.output.path.display());
                println!("Format: {:?}", cfg.output.format);
                println!("Notices: {}", cfg.output.notices);
                println!("Include: {:?}", cfg.analysis.include);
                println!("Exclude: {:?}", cfg.analysis.exclude);
            }

            if !path.exists() {
                return Err(crate::error::Error::PathNotFound(path));
            }

            let mut analyzer = Analyzer::new(cfg.clone())?.with_verbose(verbose);
            let mut sink = ConsoleSink::new();

            println!("Discovering translation units...");
            let count = analyzer.file_count(&path)?;
            println!("Found {} source files", count);

            let analysis = if parallel {
                analyzer.analyze_parallel(&path, &mut sink)?
            } else {
                analyzer.analyze(&path, &mut sink)?
            };

            println!("{}", analysis.summary());

            if !analysis.parse_errors.is_empty() {
                println!("\nParse errors ({}):", analysis.parse_errors.len());
                for (path, err) in analysis.parse_errors.iter().take(5) {
                    println!("  {}: {}", path.display(), err);
                }
                if analysis.parse_errors.len() > 5 {
                    println!("  ... and {} more", analysis.parse_errors.len() - 5);
                }
            }

            // Scoring and emission are already done; a failed write is
            // reported but never unwinds the pass.
            match write_report(&analysis.report, &cfg) {
                Ok(_) => {
                    println!("Report written to: {}", cfg.output.path.display());
                }
                Err(e) => {
                    log::warn!("persistence failed: {}", e);
                    eprintln!("Warning: {}", e);
                }
            }

            Ok(())
        }

        Command::Show { path } => {
            let report = crate::output::parse_artifact(&path)?;
            for record in report.sorted_entries() {
                println!("{}: {}", record.name, record.score);
            }
            Ok(())
        }

        Command::Version => {
            println!("cyclo {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

/// Persist the report in the configured format
fn write_report(report: &crate::analysis::ComplexityReport, cfg: &Config) -> Result<()> {
    match cfg.output.format {
        OutputFormat::Text => persist(report, &cfg.output.path),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&report.sorted_entries())?;
            std::fs::write(&cfg.output.path, json)
                .map_err(|e| crate::error::Error::persist(&cfg.output.path, e))?;
            Ok(())
        }
    }
}
