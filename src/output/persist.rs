// Report persistence
//
// Writes the pass report to a plain-text artifact, one line per function:
//
//     Function: <name>, Cyclomatic Complexity: <score>
//
// The line format is an external contract parsed by CI scripts; changing it
// is a breaking change. Lines are sorted by function name so artifacts are
// diffable; ordering is this module's responsibility, not the report's. The
// destination is overwritten whole. Concurrent passes writing the same path
// race and the last writer wins.

use crate::analysis::report::ComplexityReport;
use crate::error::{Error, Result};
use std::io::Write;
use std::path::Path;

const LINE_PREFIX: &str = "Function: ";
const LINE_SEPARATOR: &str = ", Cyclomatic Complexity: ";

/// Default artifact file name
pub const DEFAULT_ARTIFACT: &str = "results.cy";

/// Write the full report to `path`, replacing any prior content
pub fn persist(report: &ComplexityReport, path: &Path) -> Result<()> {
    let mut file = std::fs::File::create(path).map_err(|e| Error::persist(path, e))?;

    for record in report.sorted_entries() {
        writeln!(
            file,
            "{}{}{}{}",
            LINE_PREFIX, record.name, LINE_SEPARATOR, record.score
        )
        .map_err(|e| Error::persist(path, e))?;
    }

    Ok(())
}

/// Re-read a persisted artifact into a report
pub fn parse_artifact(path: &Path) -> Result<ComplexityReport> {
    let contents = std::fs::read_to_string(path)?;
    let mut report = ComplexityReport::new();

    for (idx, line) in contents.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let entry = parse_line(line).ok_or_else(|| {
            Error::artifact(path, format!("line {} is not a report entry", idx + 1))
        })?;
        report.record(entry.0, entry.1);
    }

    Ok(report)
}

fn parse_line(line: &str) -> Option<(String, usize)> {
    let rest = line.strip_prefix(LINE_PREFIX)?;
    let (name, score) = rest.rsplit_once(LINE_SEPARATOR)?;
    let score: usize = score.trim().parse().ok()?;
    Some((name.to_string(), score))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_persist_line_format() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(DEFAULT_ARTIFACT);

        let mut report = ComplexityReport::new();
        report.record("foo", 4);
        report.record("bar", 1);

        persist(&report, &path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Function: bar, Cyclomatic Complexity: 1",
                "Function: foo, Cyclomatic Complexity: 4",
            ]
        );
    }

    #[test]
    fn test_persist_empty_report() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("empty.cy");

        persist(&ComplexityReport::new(), &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn test_persist_overwrites_prior_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(DEFAULT_ARTIFACT);
        std::fs::write(&path, "stale content\nfrom an earlier pass\n").unwrap();

        let mut report = ComplexityReport::new();
        report.record("only", 2);
        persist(&report, &path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "Function: only, Cyclomatic Complexity: 2\n");
    }

    #[test]
    fn test_persist_unwritable_destination() {
        let result = persist(
            &ComplexityReport::new(),
            Path::new("/nonexistent/dir/results.cy"),
        );
        match result {
            Err(Error::Persist { path, .. }) => {
                assert!(path.to_string_lossy().contains("results.cy"));
            }
            other => panic!("expected persist error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(DEFAULT_ARTIFACT);

        let mut report = ComplexityReport::new();
        report.record("foo", 4);
        report.record("bar", 1);
        report.record("deeply_nested", 12);

        persist(&report, &path).unwrap();
        let recovered = parse_artifact(&path).unwrap();

        assert_eq!(recovered.len(), report.len());
        for (name, score) in report.entries() {
            assert_eq!(recovered.get(name), Some(score));
        }
    }

    #[test]
    fn test_parse_artifact_rejects_garbage() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.cy");
        std::fs::write(&path, "Function: ok, Cyclomatic Complexity: 2\nnot a line\n").unwrap();

        let result = parse_artifact(&path);
        assert!(matches!(result, Err(Error::Artifact { .. })));
    }

    #[test]
    fn test_parse_line_with_comma_in_name() {
        // Operator names can contain the separator's comma; the split comes
        // from the right so the name survives intact.
        let line = "Function: op<a, b>, Cyclomatic Complexity: 3";
        let (name, score) = parse_line(line).unwrap();
        assert_eq!(name, "op<a, b>");
        assert_eq!(score, 3);
    }

    #[test]
    fn test_parse_artifact_missing_file() {
        let result = parse_artifact(Path::new("/nonexistent/results.cy"));
        assert!(result.is_err());
    }
}
