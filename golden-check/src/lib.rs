//! Reporting and rendering for golden-standard configuration checks.
//!
//! The matching itself lives in `golden-core`; this crate turns a
//! [`golden_core::ValidationReport`] into terminal output, report files and an
//! HTML diff page.
//!
//! - [`report`]: colored terminal rendering
//! - [`report_files`]: failure/success/difference report files named after a
//!   caller-supplied report name
//! - [`html`]: standalone HTML diff page
//! - [`sections`]: template inventory with derived match prefixes

pub mod html;
pub mod report;
pub mod report_files;
pub mod sections;
