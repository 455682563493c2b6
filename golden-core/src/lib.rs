//! Golden-standard compliance checking for line-oriented device configurations.
//!
//! A golden standard is an ordered set of sections, each listing expectation
//! templates such as `ntp server {{ip}}`. Everything before the wildcard is a
//! literal prefix that must start at least one normalized config line.

pub mod config;
pub mod expectations;
pub mod format;
pub mod index;
pub mod template;
pub mod unified;
pub mod validate;

pub use config::{normalize, normalize_text, read_config_file, ConfigLines, ConfigReadError};
pub use expectations::{
    expectations_from_yaml, load_expectations, parse_toml, parse_yaml, ExpectationError,
    Expectations, Section, TemplateFormat,
};
pub use format::{
    format_differences, format_json, format_matched, format_summary, format_unmatched,
};
pub use index::LineIndex;
pub use template::{match_prefix, DEFAULT_WILDCARD};
pub use unified::{section_diff, section_heading};
pub use validate::{
    validate, validate_lines, validate_with_options, ExpectationWarning, MatchResult,
    SectionResult, ValidateOptions, ValidationReport, WarningKind,
};
