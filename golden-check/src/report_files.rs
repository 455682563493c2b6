use std::fs;
use std::path::{Path, PathBuf};

use golden_core::{format_differences, format_matched, format_unmatched, ValidationReport};
use thiserror::Error;

use crate::html::render_html;

/// Output locations for one run, all prefixed with the report name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPaths {
    pub failures: PathBuf,
    pub successes: PathBuf,
    pub differences: PathBuf,
    pub html: PathBuf,
}

impl ReportPaths {
    pub fn new(out_dir: &Path, report_name: &str) -> Self {
        Self {
            failures: out_dir.join(format!("{report_name}-validation_failures.txt")),
            successes: out_dir.join(format!("{report_name}-validation_successes.txt")),
            differences: out_dir.join(format!("{report_name}-validation_differences.txt")),
            html: out_dir.join(format!("{report_name}-color_diff.html")),
        }
    }
}

/// A fully rendered report file that has not been written yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportFile {
    pub path: PathBuf,
    pub contents: String,
}

#[derive(Debug, Error)]
pub enum ReportWriteError {
    #[error("failed to create report directory {path}: {source}")]
    CreateDir {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to write report {path}: {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },
}

/// Render every report file for `report` in memory.
///
/// The HTML page is only produced when `html` is set and the run has a diff.
pub fn render_report_files(
    report: &ValidationReport,
    report_name: &str,
    config_name: &str,
    paths: &ReportPaths,
    html: bool,
) -> Vec<ReportFile> {
    let mut files = vec![
        ReportFile {
            path: paths.failures.clone(),
            contents: format!(
                "Validation Report for {report_name} - Lines from {config_name} that did NOT match Golden_Standard\n{}",
                format_unmatched(report)
            ),
        },
        ReportFile {
            path: paths.successes.clone(),
            contents: format!(
                "Validation Report {report_name} - Lines from {config_name} that MATCHED Golden_Standard\n{}",
                format_matched(report)
            ),
        },
        ReportFile {
            path: paths.differences.clone(),
            contents: format!(
                "Validation Report for {report_name} - \n Differences between expected  and actual configuration ({config_name})\n{}",
                format_differences(report)
            ),
        },
    ];

    if html && !report.diff.is_empty() {
        files.push(ReportFile {
            path: paths.html.clone(),
            contents: render_html(&format!("Validation diff for {report_name}"), &report.diff),
        });
    }

    files
}

/// Write rendered report files, creating the output directory if needed.
pub fn write_report_files(files: &[ReportFile]) -> Result<(), ReportWriteError> {
    for file in files {
        if let Some(parent) = file.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| ReportWriteError::CreateDir {
                path: parent.display().to_string(),
                source,
            })?;
        }
        fs::write(&file.path, &file.contents).map_err(|source| ReportWriteError::Write {
            path: file.path.display().to_string(),
            source,
        })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use golden_core::{validate, Expectations};
    use pretty_assertions::assert_eq;

    use super::{render_report_files, ReportPaths};

    fn sample_report() -> golden_core::ValidationReport {
        let exp: Expectations = vec![
            ("System", vec!["hostname {{x}}"]),
            ("NTP", vec!["ntp server {{ip}}"]),
        ]
        .into_iter()
        .collect();
        validate(&exp, &["hostname r1"])
    }

    #[test]
    fn paths_carry_report_name() {
        let paths = ReportPaths::new(Path::new("out"), "site-a");
        assert_eq!(paths.failures, Path::new("out/site-a-validation_failures.txt"));
        assert_eq!(paths.html, Path::new("out/site-a-color_diff.html"));
    }

    #[test]
    fn failures_file_lists_unmatched_by_section() {
        let report = sample_report();
        let paths = ReportPaths::new(Path::new("out"), "site-a");
        let files = render_report_files(&report, "site-a", "r1.cfg", &paths, false);

        assert_eq!(files.len(), 3);
        assert_eq!(
            files[0].contents,
            "Validation Report for site-a - Lines from r1.cfg that did NOT match Golden_Standard\n\
             \n## Section: NTP\nntp server {{ip}}\n"
        );
        assert_eq!(
            files[1].contents,
            "Validation Report site-a - Lines from r1.cfg that MATCHED Golden_Standard\n\
             \n## Section: System\nhostname {{x}}\n"
        );
        assert!(files[2]
            .contents
            .ends_with("## Section: NTP\nExpected but not found:\nntp server {{ip}}\n\n"));
    }

    #[test]
    fn html_only_when_requested_and_diff_present() {
        let report = sample_report();
        let paths = ReportPaths::new(Path::new("out"), "site-a");
        let files = render_report_files(&report, "site-a", "r1.cfg", &paths, true);
        assert_eq!(files.len(), 4);
        assert!(files[3].contents.contains("<span class=\"del\">-ntp server {{ip}}</span>"));

        let clean: Expectations = vec![("System", vec!["hostname {{x}}"])].into_iter().collect();
        let clean_report = validate(&clean, &["hostname r1"]);
        let files = render_report_files(&clean_report, "site-a", "r1.cfg", &paths, true);
        assert_eq!(files.len(), 3);
    }
}
