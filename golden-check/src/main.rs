use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use golden_core::{load_expectations, Expectations, TemplateFormat};

mod cli;
mod path_guard;
mod sections_cmd;
mod validate_cmd;

use cli::{Cli, Command, TemplateFormatArg};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Validate(args) => validate_cmd::run_validate(args),
        Command::Sections(args) => sections_cmd::run_sections(args),
    }
}

fn resolve_format(path: &Path, arg: TemplateFormatArg) -> TemplateFormat {
    match arg {
        TemplateFormatArg::Auto => TemplateFormat::from_path(path),
        TemplateFormatArg::Yaml => TemplateFormat::Yaml,
        TemplateFormatArg::Toml => TemplateFormat::Toml,
    }
}

fn load_template(path: &Path, arg: TemplateFormatArg) -> Result<(Expectations, TemplateFormat)> {
    let format = resolve_format(path, arg);
    let expectations = load_expectations(path, format)
        .with_context(|| format!("failed to load golden standard {}", path.display()))?;
    Ok((expectations, format))
}

fn format_name(format: TemplateFormat) -> &'static str {
    match format {
        TemplateFormat::Yaml => "yaml",
        TemplateFormat::Toml => "toml",
    }
}
