use std::fmt::{self, Display, Formatter};

use serde::Serialize;

/// Outcome of checking one expectation against the config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchResult {
    /// Expectation text, verbatim.
    pub expectation: String,
    /// Literal prefix that was searched for.
    pub prefix: String,
    pub matched: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WarningKind {
    /// The derived match prefix is empty, so the expectation matches any line.
    EmptyMatchPrefix,
}

impl Display for WarningKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            WarningKind::EmptyMatchPrefix => write!(f, "empty_match_prefix"),
        }
    }
}

/// Data-quality issue attached to a single expectation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpectationWarning {
    pub kind: WarningKind,
    pub expectation: String,
}

/// Partition of one section's expectations.
///
/// Every expectation lands in exactly one of `matched` / `unmatched`, in
/// declared order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SectionResult {
    pub section: String,
    pub matched: Vec<String>,
    pub unmatched: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<ExpectationWarning>,
}

impl SectionResult {
    pub fn total(&self) -> usize {
        self.matched.len() + self.unmatched.len()
    }

    pub fn is_satisfied(&self) -> bool {
        self.unmatched.is_empty()
    }
}

/// Full result of one validation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    /// Per-section results in template order.
    pub sections: Vec<SectionResult>,
    /// Unified diffs of every section with unmatched expectations, concatenated.
    pub diff: String,
}

impl ValidationReport {
    pub fn section(&self, name: &str) -> Option<&SectionResult> {
        self.sections.iter().find(|s| s.section == name)
    }

    pub fn matched_count(&self) -> usize {
        self.sections.iter().map(|s| s.matched.len()).sum()
    }

    pub fn unmatched_count(&self) -> usize {
        self.sections.iter().map(|s| s.unmatched.len()).sum()
    }

    pub fn warnings(&self) -> impl Iterator<Item = (&str, &ExpectationWarning)> {
        self.sections
            .iter()
            .flat_map(|s| s.warnings.iter().map(move |w| (s.section.as_str(), w)))
    }

    pub fn has_unmatched(&self) -> bool {
        self.sections.iter().any(|s| !s.unmatched.is_empty())
    }
}
