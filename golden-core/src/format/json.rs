use crate::validate::result::ValidationReport;

/// Format a validation report as JSON.
pub fn format_json(report: &ValidationReport) -> String {
    serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
}
