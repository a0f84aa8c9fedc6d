// Declaration scoping
//
// Decides which function declarations are in scope for scoring. Header and
// system declarations are excluded so scores reflect the implementation file
// being analyzed, not everything it pulls in.

use crate::config::AnalysisConfig;
use crate::parser::SourceLocation;

/// Scoring scope for a declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreScope {
    /// Declared in an implementation file; eligible for scoring
    Implementation,
    /// Declared in a header or system location; never scored
    Excluded,
}

impl ScoreScope {
    pub fn is_scored(&self) -> bool {
        matches!(self, ScoreScope::Implementation)
    }
}

/// Classify a declaration location. Pure function of location metadata.
pub fn classify(location: &SourceLocation, settings: &AnalysisConfig) -> ScoreScope {
    if location.is_system {
        return ScoreScope::Excluded;
    }

    if settings
        .system_prefixes
        .iter()
        .any(|prefix| location.path.starts_with(prefix))
    {
        return ScoreScope::Excluded;
    }

    if let Some(name) = location.file_name() {
        if settings
            .header_suffixes
            .iter()
            .any(|suffix| name.ends_with(suffix.as_str()))
        {
            return ScoreScope::Excluded;
        }
    }

    ScoreScope::Implementation
}
