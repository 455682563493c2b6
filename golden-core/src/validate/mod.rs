//! Golden-standard validation.

pub mod engine;
pub mod result;

pub use engine::{
    classify, validate, validate_lines, validate_section, validate_with_options, ValidateOptions,
};
pub use result::{
    ExpectationWarning, MatchResult, SectionResult, ValidationReport, WarningKind,
};
