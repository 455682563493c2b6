use crate::config::{normalize, ConfigLines};
use crate::expectations::{Expectations, Section};
use crate::index::LineIndex;
use crate::template::{match_prefix, DEFAULT_WILDCARD};
use crate::unified::section_diff;
use crate::validate::result::{
    ExpectationWarning, MatchResult, SectionResult, ValidationReport, WarningKind,
};

/// Configures validation behavior.
#[derive(Debug, Clone)]
pub struct ValidateOptions {
    /// Token that starts the ignored part of an expectation.
    pub wildcard: String,
    /// Unchanged lines shown around each diff hunk.
    pub diff_context: usize,
}

impl Default for ValidateOptions {
    fn default() -> Self {
        Self {
            wildcard: DEFAULT_WILDCARD.to_string(),
            diff_context: 3,
        }
    }
}

/// Validate raw config lines against the golden standard with default options.
pub fn validate<S: AsRef<str>>(expectations: &Expectations, raw_lines: &[S]) -> ValidationReport {
    validate_with_options(expectations, raw_lines, &ValidateOptions::default())
}

/// Validate raw config lines against the golden standard with custom options.
pub fn validate_with_options<S: AsRef<str>>(
    expectations: &Expectations,
    raw_lines: &[S],
    opts: &ValidateOptions,
) -> ValidationReport {
    let lines = normalize(raw_lines);
    validate_lines(expectations, &lines, opts)
}

/// Validate already-normalized config lines.
pub fn validate_lines(
    expectations: &Expectations,
    lines: &ConfigLines,
    opts: &ValidateOptions,
) -> ValidationReport {
    let index = LineIndex::from(lines);
    let mut report = ValidationReport::default();

    for section in expectations.sections() {
        let result = validate_section(section, &index, opts);
        if !result.unmatched.is_empty() {
            report.diff.push_str(&section_diff(
                &result.section,
                &result.unmatched,
                lines,
                opts.diff_context,
            ));
        }
        report.sections.push(result);
    }

    report
}

/// Partition one section's expectations into matched and unmatched.
pub fn validate_section(
    section: &Section,
    index: &LineIndex<'_>,
    opts: &ValidateOptions,
) -> SectionResult {
    let mut out = SectionResult {
        section: section.name.clone(),
        ..SectionResult::default()
    };

    for expectation in &section.expectations {
        let result = classify(expectation, index, &opts.wildcard);
        if result.prefix.is_empty() {
            out.warnings.push(ExpectationWarning {
                kind: WarningKind::EmptyMatchPrefix,
                expectation: expectation.clone(),
            });
        }
        if result.matched {
            out.matched.push(result.expectation);
        } else {
            out.unmatched.push(result.expectation);
        }
    }

    out
}

/// Check a single expectation.
///
/// The anchored prefix lookup decides the candidates; a candidate then only
/// has to contain the prefix.
pub fn classify(expectation: &str, index: &LineIndex<'_>, wildcard: &str) -> MatchResult {
    let prefix = match_prefix(expectation, wildcard);
    let matched = index
        .find_prefixed(prefix)
        .iter()
        .any(|line| line.contains(prefix));

    MatchResult {
        expectation: expectation.to_string(),
        prefix: prefix.to_string(),
        matched,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{classify, validate, validate_with_options, ValidateOptions};
    use crate::config::normalize;
    use crate::expectations::Expectations;
    use crate::index::LineIndex;
    use crate::validate::result::WarningKind;

    fn expectations(sections: Vec<(&str, Vec<&str>)>) -> Expectations {
        sections.into_iter().collect()
    }

    fn is_subsequence(part: &[String], whole: &[&str]) -> bool {
        let mut rest = whole.iter();
        part.iter().all(|item| rest.any(|candidate| *candidate == item.as_str()))
    }

    #[test]
    fn wildcard_expectation_matches_line_start() {
        let exp = expectations(vec![("Interfaces", vec!["interface {{name}}"])]);
        let report = validate(&exp, &["interface GigabitEthernet0/1"]);
        let section = report.section("Interfaces").expect("section");
        assert_eq!(section.matched, vec!["interface {{name}}".to_string()]);
        assert!(section.unmatched.is_empty());
    }

    #[test]
    fn prefix_mid_line_is_not_a_match() {
        let exp = expectations(vec![("Interfaces", vec!["interface {{name}}"])]);
        let report = validate(&exp, &["no interface"]);
        let section = report.section("Interfaces").expect("section");
        assert!(section.matched.is_empty());
        assert_eq!(section.unmatched, vec!["interface {{name}}".to_string()]);
    }

    #[test]
    fn hostname_scenario_matches_with_empty_diff() {
        let exp = expectations(vec![("Section A", vec!["hostname {{x}}"])]);
        let report = validate(&exp, &["hostname router1"]);
        let section = report.section("Section A").expect("section");
        assert_eq!(section.matched, vec!["hostname {{x}}".to_string()]);
        assert!(section.unmatched.is_empty());
        assert_eq!(report.diff, "");
    }

    #[test]
    fn ntp_scenario_is_unmatched_with_diff() {
        let exp = expectations(vec![("Section A", vec!["ntp server {{ip}}"])]);
        let report = validate(&exp, &["hostname router1"]);
        let section = report.section("Section A").expect("section");
        assert!(section.matched.is_empty());
        assert_eq!(section.unmatched, vec!["ntp server {{ip}}".to_string()]);
        assert!(report.diff.contains("-ntp server {{ip}}"));
        assert!(report.diff.contains("+hostname router1"));
        assert!(report.diff.contains("## Section: Section A"));
    }

    #[test]
    fn exact_line_without_wildcard_matches() {
        let exp = expectations(vec![("Services", vec!["service password-encryption"])]);
        let report = validate(&exp, &["  service password-encryption  "]);
        assert_eq!(report.matched_count(), 1);
        assert_eq!(report.unmatched_count(), 0);
    }

    #[test]
    fn literal_prefix_of_line_matches_and_absent_prefix_does_not() {
        let lines = normalize(["logging host 10.1.1.1", "snmp-server community x RO"]);
        let index = LineIndex::from(&lines);
        assert!(classify("logging ho", &index, "{{").matched);
        assert!(!classify("aaa new-model", &index, "{{").matched);
    }

    #[test]
    fn sections_do_not_interfere() {
        let exp = expectations(vec![
            ("System", vec!["hostname {{x}}"]),
            ("Identity", vec!["hostname {{y}}"]),
        ]);
        let report = validate(&exp, &["hostname core1"]);
        assert_eq!(report.section("System").map(|s| s.matched.len()), Some(1));
        assert_eq!(report.section("Identity").map(|s| s.matched.len()), Some(1));
        assert!(!report.has_unmatched());
    }

    #[test]
    fn partition_covers_every_expectation_in_order() {
        let declared = [
            "hostname {{x}}",
            "ntp server {{ip}}",
            "ip domain-name corp.example",
            "logging host {{ip}}",
            "hostname {{x}}",
        ];
        let exp = expectations(vec![("Mixed", declared.to_vec())]);
        let report = validate(&exp, &["hostname r1", "logging host 10.0.0.5"]);
        let section = report.section("Mixed").expect("section");

        assert_eq!(section.total(), declared.len());
        assert_eq!(
            section.matched,
            vec!["hostname {{x}}", "logging host {{ip}}", "hostname {{x}}"]
        );
        assert_eq!(
            section.unmatched,
            vec!["ntp server {{ip}}", "ip domain-name corp.example"]
        );

        assert!(is_subsequence(&section.matched, &declared));
        assert!(is_subsequence(&section.unmatched, &declared));
    }

    #[test]
    fn empty_config_leaves_everything_unmatched() {
        let exp = expectations(vec![("A", vec!["hostname {{x}}", "ntp server {{ip}}"])]);
        let report = validate::<&str>(&exp, &[]);
        assert_eq!(report.unmatched_count(), 2);
        assert!(report.diff.contains("-hostname {{x}}"));
    }

    #[test]
    fn empty_prefix_is_flagged_but_still_classified() {
        let exp = expectations(vec![("Bad", vec!["{{anything}}", "hostname {{x}}"])]);
        let report = validate(&exp, &["hostname r1"]);
        let section = report.section("Bad").expect("section");
        assert_eq!(section.matched.len(), 2);
        assert_eq!(section.warnings.len(), 1);
        assert_eq!(section.warnings[0].kind, WarningKind::EmptyMatchPrefix);
        assert_eq!(section.warnings[0].expectation, "{{anything}}");
    }

    #[test]
    fn repeated_runs_are_identical() {
        let exp = expectations(vec![
            ("A", vec!["hostname {{x}}", "ntp server {{ip}}"]),
            ("B", vec!["logging buffered 16384"]),
        ]);
        let config = ["hostname r1", "", "logging buffered 4096"];
        assert_eq!(validate(&exp, &config), validate(&exp, &config));
    }

    #[test]
    fn diffs_follow_section_order() {
        let exp = expectations(vec![
            ("First", vec!["ntp server {{ip}}"]),
            ("Second", vec!["aaa new-model"]),
        ]);
        let report = validate(&exp, &["hostname r1"]);
        let first = report.diff.find("## Section: First").expect("first");
        let second = report.diff.find("## Section: Second").expect("second");
        assert!(first < second);
    }

    #[test]
    fn custom_wildcard_is_honored() {
        let exp = expectations(vec![("A", vec!["snmp-server location <site>"])]);
        let opts = ValidateOptions {
            wildcard: "<".to_string(),
            ..ValidateOptions::default()
        };
        let report = validate_with_options(&exp, &["snmp-server location DC1"], &opts);
        assert_eq!(report.matched_count(), 1);
    }
}
