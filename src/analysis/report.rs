// Per-pass complexity report
//
// Accumulates function-name to score entries during one traversal pass. A
// second record under the same name overwrites the first; entries are keyed
// by name only, not signature, so overloads collapse to the last one visited.
// The map imposes no ordering; consumers needing deterministic output sort by
// name themselves.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One scored function
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ComplexityRecord {
    pub name: String,
    pub score: usize,
}

/// Accumulating table of function name to complexity score
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ComplexityReport {
    entries: HashMap<String, usize>,
}

impl ComplexityReport {
    /// Create an empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the entry for `name`
    pub fn record(&mut self, name: impl Into<String>, score: usize) {
        debug_assert!(score >= 1, "scores always include the base path");
        self.entries.insert(name.into(), score);
    }

    /// Look up a score by name
    pub fn get(&self, name: &str) -> Option<usize> {
        self.entries.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in no particular order
    pub fn entries(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(name, &score)| (name.as_str(), score))
    }

    /// Snapshot of entries sorted by function name
    pub fn sorted_entries(&self) -> Vec<ComplexityRecord> {
        let mut records: Vec<ComplexityRecord> = self
            .entries
            .iter()
            .map(|(name, &score)| ComplexityRecord {
                name: name.clone(),
                score,
            })
            .collect();
        records.sort_by(|a, b| a.name.cmp(&b.name));
        records
    }

    /// Fold a partial report into this one. Collisions keep the incoming
    /// entry, matching the overwrite policy of sequential recording.
    pub fn merge(&mut self, other: ComplexityReport) {
        for (name, score) in other.entries {
            self.entries.insert(name, score);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_report_is_empty() {
        let report = ComplexityReport::new();
        assert!(report.is_empty());
        assert_eq!(report.len(), 0);
    }

    #[test]
    fn test_record_and_get() {
        let mut report = ComplexityReport::new();
        report.record("foo", 4);
        report.record("bar", 1);

        assert_eq!(report.len(), 2);
        assert_eq!(report.get("foo"), Some(4));
        assert_eq!(report.get("bar"), Some(1));
        assert_eq!(report.get("baz"), None);
    }

    #[test]
    fn test_record_overwrites_same_name() {
        let mut report = ComplexityReport::new();
        report.record("qux", 2);
        report.record("qux", 5);

        assert_eq!(report.len(), 1);
        assert_eq!(report.get("qux"), Some(5));
    }

    #[test]
    fn test_entries_restartable() {
        let mut report = ComplexityReport::new();
        report.record("a", 1);
        report.record("b", 2);

        assert_eq!(report.entries().count(), 2);
        // A second pass over the same report sees the same entries.
        assert_eq!(report.entries().count(), 2);
    }

    #[test]
    fn test_sorted_entries_by_name() {
        let mut report = ComplexityReport::new();
        report.record("zeta", 3);
        report.record("alpha", 7);
        report.record("mid", 1);

        let sorted = report.sorted_entries();
        let names: Vec<&str> = sorted.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["alpha", "mid", "zeta"]);
    }

    #[test]
    fn test_merge_overwrites_on_collision() {
        let mut left = ComplexityReport::new();
        left.record("shared", 2);
        left.record("only_left", 1);

        let mut right = ComplexityReport::new();
        right.record("shared", 5);
        right.record("only_right", 3);

        left.merge(right);

        assert_eq!(left.len(), 3);
        assert_eq!(left.get("shared"), Some(5));
        assert_eq!(left.get("only_left"), Some(1));
        assert_eq!(left.get("only_right"), Some(3));
    }

    #[test]
    fn test_serialization_round_trip() {
        let mut report = ComplexityReport::new();
        report.record("foo", 4);

        let json = serde_json::to_string(&report).expect("serialize");
        let parsed: ComplexityReport = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed.get("foo"), Some(4));
    }
}
