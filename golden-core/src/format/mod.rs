//! Validation report formatters.

pub mod json;
pub mod text;

pub use json::format_json;
pub use text::{format_differences, format_matched, format_summary, format_unmatched};
