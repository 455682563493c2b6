use crate::unified::section_heading;
use crate::validate::result::{SectionResult, ValidationReport};

/// Matched expectations grouped by section; sections with none are skipped.
pub fn format_matched(report: &ValidationReport) -> String {
    format_partition(report, |s| &s.matched)
}

/// Unmatched expectations grouped by section; sections with none are skipped.
pub fn format_unmatched(report: &ValidationReport) -> String {
    format_partition(report, |s| &s.unmatched)
}

/// Per-section "expected but not found" listing.
pub fn format_differences(report: &ValidationReport) -> String {
    let mut out = String::new();
    for section in report.sections.iter().filter(|s| !s.unmatched.is_empty()) {
        out.push('\n');
        out.push_str(&section_heading(&section.section));
        out.push('\n');
        out.push_str("Expected but not found:\n");
        for line in &section.unmatched {
            out.push_str(line);
            out.push('\n');
        }
        out.push('\n');
    }
    out
}

/// Format a one-line summary of report counts.
pub fn format_summary(report: &ValidationReport) -> String {
    let expectations: usize = report.sections.iter().map(SectionResult::total).sum();
    format!(
        "sections={} expectations={expectations} matched={} unmatched={} warnings={}",
        report.sections.len(),
        report.matched_count(),
        report.unmatched_count(),
        report.warnings().count()
    )
}

fn format_partition<F>(report: &ValidationReport, pick: F) -> String
where
    F: Fn(&SectionResult) -> &[String],
{
    let mut out = String::new();
    for section in &report.sections {
        let lines = pick(section);
        if lines.is_empty() {
            continue;
        }
        out.push('\n');
        out.push_str(&section_heading(&section.section));
        out.push('\n');
        for line in lines {
            out.push_str(line);
            out.push('\n');
        }
    }
    out
}
