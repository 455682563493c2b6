//! Unified diff of unmatched expectations against the whole config.

use similar::TextDiff;

use crate::config::ConfigLines;

/// Heading line used for a section in diffs and text reports.
pub fn section_heading(section: &str) -> String {
    format!("## Section: {section}")
}

/// Build the unified diff for one section.
///
/// The "expected" side holds the section heading, the unmatched
/// expectations and a blank separator; the "actual" side holds the same
/// heading, every normalized config line and a blank separator. Returns an
/// empty string when both sides are identical.
pub fn section_diff(
    section: &str,
    unmatched: &[String],
    config: &ConfigLines,
    context_radius: usize,
) -> String {
    let heading = section_heading(section);
    let expected = block(&heading, unmatched.iter().map(String::as_str));
    let actual = block(&heading, config.iter().map(String::as_str));

    let diff = TextDiff::from_lines(&expected, &actual);
    diff.unified_diff()
        .context_radius(context_radius)
        .header("expected", "actual")
        .to_string()
}

fn block<'a>(heading: &str, lines: impl Iterator<Item = &'a str>) -> String {
    let mut out = String::new();
    out.push_str(heading);
    out.push('\n');
    for line in lines {
        out.push_str(line);
        out.push('\n');
    }
    out.push('\n');
    out
}
