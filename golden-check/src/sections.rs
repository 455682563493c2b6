use golden_core::{match_prefix, Expectations};
use serde::Serialize;

/// One expectation with the prefix it is matched on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrefixEntry {
    pub expectation: String,
    pub prefix: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionInventory {
    pub section: String,
    pub entries: Vec<PrefixEntry>,
}

/// Template overview used to review a golden standard before running it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateInventory {
    pub source: String,
    pub wildcard: String,
    pub sections: Vec<SectionInventory>,
}

impl TemplateInventory {
    pub fn expectation_count(&self) -> usize {
        self.sections.iter().map(|s| s.entries.len()).sum()
    }

    pub fn empty_prefix_count(&self) -> usize {
        self.sections
            .iter()
            .flat_map(|s| &s.entries)
            .filter(|e| e.prefix.is_empty())
            .count()
    }
}

pub fn build_inventory(
    expectations: &Expectations,
    wildcard: &str,
    source: String,
) -> TemplateInventory {
    let sections = expectations
        .sections()
        .iter()
        .map(|section| SectionInventory {
            section: section.name.clone(),
            entries: section
                .expectations
                .iter()
                .map(|expectation| PrefixEntry {
                    expectation: expectation.clone(),
                    prefix: match_prefix(expectation, wildcard).to_string(),
                })
                .collect(),
        })
        .collect();

    TemplateInventory {
        source,
        wildcard: wildcard.to_string(),
        sections,
    }
}
