use std::path::Path;

use anyhow::{bail, Context, Result};
use colored::Colorize;
use golden_check::report::{render_diff, render_section_results, render_summary, render_warnings};
use golden_check::report_files::{render_report_files, write_report_files, ReportPaths};
use golden_core::{format_json, read_config_file, validate_lines, ValidateOptions};

use crate::cli::{OutputFormat, ValidateArgs};
use crate::path_guard;

pub fn run_validate(args: ValidateArgs) -> Result<()> {
    let (expectations, template_format) =
        crate::load_template(&args.template, args.template_format)?;
    let lines = read_config_file(&args.config)
        .with_context(|| format!("failed to read config {}", args.config.display()))?;

    let report_name = args
        .report_name
        .clone()
        .unwrap_or_else(|| default_report_name(&args.config));
    let opts = ValidateOptions {
        wildcard: args.wildcard.clone(),
        ..ValidateOptions::default()
    };

    let verbose_text = args.verbose && !args.quiet && matches!(args.format, OutputFormat::Text);
    if verbose_text {
        println!(
            "Using template: {} ({})",
            args.template.display(),
            crate::format_name(template_format)
        );
        println!("Using wildcard: {}", opts.wildcard);
        println!("Report name: {report_name}");
        println!("Config lines: {}", lines.len());
    }

    let report = validate_lines(&expectations, &lines, &opts);
    for warning in render_warnings(&report) {
        eprintln!("{warning}");
    }

    let mut written = Vec::new();
    if !args.no_files {
        let paths = ReportPaths::new(&args.out_dir, &report_name);
        let config_name = args.config.display().to_string();
        let files = render_report_files(&report, &report_name, &config_name, &paths, args.html);
        let outputs: Vec<&Path> = files.iter().map(|f| f.path.as_path()).collect();
        path_guard::ensure_outputs_distinct(
            &outputs,
            &[args.config.as_path(), args.template.as_path()],
        )?;
        write_report_files(&files)?;
        written = files.into_iter().map(|f| f.path).collect();
    }

    if args.quiet {
        println!("{}", render_summary(&report));
    } else {
        match args.format {
            OutputFormat::Text => {
                if !report.diff.is_empty() {
                    println!("{}", "Visual Diff Report:".bold().cyan());
                    println!("{}", render_diff(&report.diff));
                    println!();
                }
                println!("{}", render_section_results(&report));
                println!("{}", render_summary(&report));
                if !written.is_empty() {
                    let names: Vec<String> = written
                        .iter()
                        .map(|p| format!("'{}'", p.display()))
                        .collect();
                    println!("Validation completed. Reports saved as {}.", names.join(", "));
                }
            }
            OutputFormat::Json => println!("{}", format_json(&report)),
        }
    }

    if args.strict && report.has_unmatched() {
        bail!(
            "strict mode failed: {} unmatched expectations",
            report.unmatched_count()
        );
    }
    Ok(())
}

fn default_report_name(config: &Path) -> String {
    config
        .file_stem()
        .and_then(|stem| stem.to_str())
        .filter(|stem| !stem.is_empty())
        .unwrap_or("report")
        .to_string()
}
