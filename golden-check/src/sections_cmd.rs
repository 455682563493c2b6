use anyhow::Result;
use golden_check::report::render_inventory;
use golden_check::sections::build_inventory;

use crate::cli::{OutputFormat, SectionsArgs};

pub fn run_sections(args: SectionsArgs) -> Result<()> {
    let (expectations, format) = crate::load_template(&args.template, args.template_format)?;
    let source = format!(
        "file:{} ({})",
        args.template.display(),
        crate::format_name(format)
    );
    let inventory = build_inventory(&expectations, &args.wildcard, source);

    match args.format {
        OutputFormat::Text => println!("{}", render_inventory(&inventory)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&inventory)?),
    }

    for section in &inventory.sections {
        for entry in section.entries.iter().filter(|e| e.prefix.is_empty()) {
            eprintln!(
                "warning: section '{}': expectation '{}' has an empty match prefix",
                section.section, entry.expectation
            );
        }
    }
    Ok(())
}
