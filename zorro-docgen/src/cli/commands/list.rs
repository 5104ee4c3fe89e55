//! `list` command handler.
//!
//! Displays the catalog grouped by category (human) or as a JSON array.

use std::io::{self, Write};

use zorro_docgen_core::catalog::{self, ComponentRecord, Schematics};

use crate::cli::args::{ListArgs, OutputFormat};
use crate::error::DocGenError;

/// List catalog components.
///
/// # Errors
///
/// Returns a JSON error if output serialization fails, or an I/O error if
/// stdout is closed.
pub fn run(args: &ListArgs) -> Result<(), DocGenError> {
    let records = catalog::filter(&args.category);
    tracing::debug!(categories = ?args.category, selected = records.len(), "listing components");
    let mut out = io::stdout().lock();

    match args.format {
        OutputFormat::Json => {
            let entries = records
                .iter()
                .map(json_entry)
                .collect::<Result<Vec<_>, _>>()?;
            writeln!(out, "{}", serde_json::to_string_pretty(&entries)?)?;
        }
        OutputFormat::Human => {
            if records.is_empty() {
                writeln!(out, "No components match the given filters.")?;
                return Ok(());
            }

            writeln!(out, "ng-zorro-antd components ({} listed)\n", records.len())?;
            for (category, group) in catalog::by_category(&records) {
                writeln!(out, "  {}", category.label())?;
                for record in group {
                    writeln!(out, "    {}", human_row(record))?;
                }
                writeln!(out)?;
            }

            writeln!(out, "Generate pages: zorro-docgen generate [OUTPUT_DIR]")?;
            writeln!(out, "Preview a page: zorro-docgen show <name>")?;
        }
    }

    Ok(())
}

fn json_entry(record: &ComponentRecord) -> Result<serde_json::Value, serde_json::Error> {
    let mut value = serde_json::to_value(record)?;
    if let Some(obj) = value.as_object_mut() {
        obj.insert("file_name".into(), record.file_name().into());
        obj.insert("docs_url".into(), record.docs_url().into());
    }
    Ok(value)
}

fn human_row(record: &ComponentRecord) -> String {
    let mut tags = Vec::new();
    if record.is_service() {
        tags.push("service");
    }
    match record.schematics {
        Schematics::Tree => tags.push("schematics: tree"),
        Schematics::Form => tags.push("schematics: form"),
        Schematics::None => {}
    }

    let row = format!(
        "{:02}  {:<14}{:<24}{}",
        record.index, record.name, record.module, record.path
    );
    if tags.is_empty() {
        row
    } else {
        format!("{row}  [{}]", tags.join(", "))
    }
}
