use colored::Colorize;
use golden_core::{format_summary, ValidationReport};

use crate::sections::TemplateInventory;

/// Render a unified diff for terminal output.
pub fn render_diff(diff: &str) -> String {
    let mut out = Vec::new();

    for line in diff.lines() {
        let colored = if line.starts_with("+++") || line.starts_with("---") {
            line.bold().to_string()
        } else if line.starts_with("@@") {
            line.cyan().to_string()
        } else if line.starts_with('+') {
            line.green().to_string()
        } else if line.starts_with('-') {
            line.red().to_string()
        } else {
            line.to_string()
        };
        out.push(colored);
    }

    out.join("\n")
}

/// Render summary counts for terminal output.
pub fn render_summary(report: &ValidationReport) -> String {
    format_summary(report).cyan().to_string()
}

/// Render one status line per section.
pub fn render_section_results(report: &ValidationReport) -> String {
    let mut out = Vec::new();
    for section in &report.sections {
        let status = if section.is_satisfied() {
            "PASS".green().to_string()
        } else {
            "FAIL".red().to_string()
        };
        out.push(format!(
            "{status} {}: matched={} unmatched={}",
            section.section,
            section.matched.len(),
            section.unmatched.len()
        ));
    }
    out.join("\n")
}

/// Render warning lines, one per flagged expectation.
pub fn render_warnings(report: &ValidationReport) -> Vec<String> {
    report
        .warnings()
        .map(|(section, warning)| {
            format!(
                "warning: section '{section}': expectation '{}' has an empty match prefix and matches every line ({})",
                warning.expectation, warning.kind
            )
        })
        .collect()
}

/// Render the template inventory.
pub fn render_inventory(inv: &TemplateInventory) -> String {
    let mut out = Vec::new();
    out.push(format!(
        "sections={} expectations={} empty_prefixes={}",
        inv.sections.len(),
        inv.expectation_count(),
        inv.empty_prefix_count()
    ));
    for section in &inv.sections {
        out.push(String::new());
        out.push(format!("{} ({})", section.section.bold(), section.entries.len()));
        for entry in &section.entries {
            if entry.prefix.is_empty() {
                out.push(format!(
                    "  {} {}",
                    "!".yellow(),
                    format!("{} -> <empty prefix>", entry.expectation).yellow()
                ));
            } else {
                out.push(format!("  - {} -> {}", entry.expectation, entry.prefix));
            }
        }
    }
    out.join("\n")
}

#[cfg(test)]
mod tests {
    use super::render_diff;

    #[test]
    fn render_diff_keeps_line_text() {
        colored::control::set_override(false);
        let diff = "--- expected\n+++ actual\n@@ -1,2 +1,2 @@\n-ntp server {{ip}}\n+hostname r1\n";
        assert_eq!(
            render_diff(diff),
            "--- expected\n+++ actual\n@@ -1,2 +1,2 @@\n-ntp server {{ip}}\n+hostname r1"
        );
    }
}
