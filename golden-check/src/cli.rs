use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "golden-check")]
#[command(about = "Check device configurations against a golden-standard template")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Validate one config file and write matched/unmatched/difference reports.
    Validate(ValidateArgs),
    /// List template sections with the prefix each expectation is matched on.
    Sections(SectionsArgs),
}

#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// Device configuration file to check.
    pub config: PathBuf,
    /// Golden-standard template (YAML or TOML).
    #[arg(long, default_value = "golden_standard.yaml")]
    pub template: PathBuf,
    #[arg(long, value_enum, default_value_t = TemplateFormatArg::Auto)]
    pub template_format: TemplateFormatArg,
    /// Prefix for report file names. Defaults to the config file stem.
    #[arg(long)]
    pub report_name: Option<String>,
    /// Directory receiving report files.
    #[arg(long, default_value = ".")]
    pub out_dir: PathBuf,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
    /// Do not write report files.
    #[arg(long)]
    pub no_files: bool,
    /// Also write a colorized HTML diff page.
    #[arg(long)]
    pub html: bool,
    /// Exit with failure when any expectation is unmatched.
    #[arg(long)]
    pub strict: bool,
    /// Token that starts the ignored part of an expectation.
    #[arg(long, default_value = golden_core::DEFAULT_WILDCARD)]
    pub wildcard: String,
    #[arg(short, long)]
    pub verbose: bool,
    /// Print only the summary line.
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Parser, Debug)]
pub struct SectionsArgs {
    /// Golden-standard template (YAML or TOML).
    pub template: PathBuf,
    #[arg(long, value_enum, default_value_t = TemplateFormatArg::Auto)]
    pub template_format: TemplateFormatArg,
    #[arg(long, default_value = golden_core::DEFAULT_WILDCARD)]
    pub wildcard: String,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Clone, Copy, Debug, ValueEnum, PartialEq, Eq)]
pub enum TemplateFormatArg {
    Auto,
    Yaml,
    Toml,
}
