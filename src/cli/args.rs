//! CLI argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Per-function cyclomatic complexity for C and C++ codebases
#[derive(Parser, Debug)]
#[command(name = "cyclo")]
#[command(about = "Per-function cyclomatic complexity for C and C++ codebases")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

impl Args {
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Analyze a file or directory and write the complexity report
    Analyze {
        /// Path to a source file or directory of translation units
        path: PathBuf,

        /// Destination path for the report artifact
        #[arg(short, long, default_value = "results.cy")]
        output: PathBuf,

        /// Glob patterns to exclude (can be repeated)
        #[arg(long)]
        exclude: Vec<String>,

        /// Glob patterns to include (can be repeated)
        #[arg(long)]
        include: Vec<String>,

        /// Config file path
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Report format (text, json)
        #[arg(long, default_value = "text")]
        format: String,

        /// Score translation units in parallel
        #[arg(long)]
        parallel: bool,

        /// Suppress per-function remarks
        #[arg(long)]
        no_notices: bool,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Print a previously written report artifact
    Show {
        /// Path to the report artifact
        path: PathBuf,
    },

    /// Show version information
    Version,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_defaults() {
        let args = Args::try_parse_from(["cyclo", "analyze", "./src"]).unwrap();
        match args.command {
            Command::Analyze {
                path,
                output,
                format,
                parallel,
                no_notices,
                ..
            } => {
                assert_eq!(path, PathBuf::from("./src"));
                assert_eq!(output, PathBuf::from("results.cy"));
                assert_eq!(format, "text");
                assert!(!parallel);
                assert!(!no_notices);
            }
            _ => panic!("Expected Analyze command"),
        }
    }

    #[test]
    fn test_analyze_with_options() {
        let args = Args::try_parse_from([
            "cyclo",
            "analyze",
            "./project",
            "--output",
            "/tmp/out.cy",
            "--exclude",
            "vendor/**",
            "--include",
            "src/**/*.c",
            "--config",
            "custom.toml",
            "--format",
            "json",
            "--parallel",
            "--no-notices",
            "--verbose",
        ])
        .unwrap();

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
                assert_eq!(path, PathBuf::from("./project"));
                assert_eq!(output, PathBuf::from("/tmp/out.cy"));
                assert_eq!(exclude, vec!["vendor/**".to_string()]);
                assert_eq!(include, vec!["src/**/*.c".to_string()]);
                assert_eq!(config, Some(PathBuf::from("custom.toml")));
                assert_eq!(format, "json");
                assert!(parallel);
                assert!(no_notices);
                assert!(verbose);
            }
            _ => panic!("Expected Analyze command"),
        }
    }

    #[test]
    fn test_show_command() {
        let args = Args::try_parse_from(["cyclo", "show", "results.cy"]).unwrap();
        match args.command {
            Command::Show { path } => {
                assert_eq!(path, PathBuf::from("results.cy"));
            }
            _ => panic!("Expected Show command"),
        }
    }

    #[test]
    fn test_version_command() {
        let args = Args::try_parse_from(["cyclo", "version"]).unwrap();
        assert!(matches!(args.command, Command::Version));
    }
}
