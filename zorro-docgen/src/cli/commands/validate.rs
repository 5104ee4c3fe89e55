//! `validate` command handler.
//!
//! Runs catalog validation without generating anything.

use std::io::{self, Write};

use zorro_docgen_core::catalog;
use zorro_docgen_core::error::CatalogError;
use zorro_docgen_core::validate::validate_catalog;

use crate::cli::args::{OutputFormat, ValidateArgs};
use crate::error::DocGenError;

/// Execute `validate`.
///
/// # Errors
///
/// Returns `DocGenError::Catalog` if any issue is found.
pub fn run(args: &ValidateArgs) -> Result<(), DocGenError> {
    let records = catalog::builtin();
    let issues = validate_catalog(records);
    tracing::debug!(components = records.len(), issues = issues.len(), "catalog validated");
    let mut out = io::stdout().lock();

    match args.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "components": records.len(),
                "valid": issues.is_empty(),
                "issues": issues,
            });
            writeln!(out, "{}", serde_json::to_string_pretty(&output)?)?;
        }
        OutputFormat::Human => {
            for issue in &issues {
                eprintln!("{issue}");
            }
            if issues.is_empty() {
                writeln!(out, "Catalog OK: {} components", records.len())?;
            } else {
                eprintln!("\n{} issue(s) found", issues.len());
            }
        }
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(CatalogError::Invalid { issues }.into())
    }
}
