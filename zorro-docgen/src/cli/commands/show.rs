//! `show` command handler.
//!
//! Prints the rendered page for one component to stdout, suitable for
//! piping or previewing before a run.

use std::fmt::Write as _;
use std::io::{self, Write as _};

use zorro_docgen_core::catalog;
use zorro_docgen_docs::markdown::page::render_page;

use crate::cli::args::ShowArgs;
use crate::error::DocGenError;

/// Display the page for a single component.
///
/// # Errors
///
/// Returns a usage error if the component name is not in the catalog, or an
/// I/O error if stdout is closed.
pub fn run(args: &ShowArgs) -> Result<(), DocGenError> {
    let record = catalog::find(&args.name).ok_or_else(|| unknown_component(&args.name))?;
    tracing::debug!(component = record.name, file = %record.file_name(), "rendering page");

    let mut out = io::stdout().lock();
    out.write_all(render_page(record).as_bytes())?;
    Ok(())
}

fn unknown_component(name: &str) -> DocGenError {
    let mut message = format!("Unknown component '{name}'");

    if let Some(suggestion) = catalog::suggest(name) {
        let _ = write!(message, "\n\nDid you mean '{suggestion}'?");
    }

    message.push_str("\n\nUse 'zorro-docgen list' to see all components.");
    DocGenError::Usage(message)
}
