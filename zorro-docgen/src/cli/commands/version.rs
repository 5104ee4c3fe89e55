//! `version` command handler.
//!
//! Prints the tool version and catalog size in human or JSON format.

use std::io::{self, Write};

use zorro_docgen_core::catalog;

use crate::cli::args::{OutputFormat, VersionArgs};
use crate::error::DocGenError;

/// Print version information.
///
/// # Errors
///
/// Returns an I/O error if stdout is closed.
pub fn run(args: &VersionArgs) -> Result<(), DocGenError> {
    let name = env!("CARGO_PKG_NAME");
    let version = env!("CARGO_PKG_VERSION");
    let mut out = io::stdout().lock();

    match args.format {
        OutputFormat::Human => {
            writeln!(out, "{name} {version}")?;
        }
        OutputFormat::Json => {
            let info = serde_json::json!({
                "name": name,
                "version": version,
                "components": catalog::builtin().len(),
            });
            writeln!(out, "{info}")?;
        }
    }

    Ok(())
}
