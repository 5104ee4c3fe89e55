//! `generate` command handler.
//!
//! Writes one page per selected catalog record and prints a status line per
//! record plus a final summary.

use std::io::{self, Write};

use zorro_docgen_core::catalog;
use zorro_docgen_docs::writer::{self, FileOutcome, FileStatus, GenerateOptions, GenerateReport};

use crate::cli::args::{GenerateArgs, OutputFormat};
use crate::error::DocGenError;

/// Execute `generate`.
///
/// # Errors
///
/// Returns an error if the catalog is invalid, the output directory cannot
/// be created, a page cannot be written, or stdout is closed. Pages already
/// on disk are skipped, never overwritten.
pub fn run(args: &GenerateArgs, quiet: bool) -> Result<(), DocGenError> {
    let records = catalog::filter(&args.category);
    let options = GenerateOptions {
        dry_run: args.dry_run,
    };
    let human = args.format == OutputFormat::Human && !quiet;

    tracing::debug!(
        output_dir = %args.output.display(),
        categories = ?args.category,
        selected = records.len(),
        dry_run = args.dry_run,
        "starting generate"
    );

    // Pages keep being written after stdout goes away; the first print
    // failure is reported once the run is over.
    let mut out = io::stdout().lock();
    let mut print_error: Option<io::Error> = if human {
        writeln!(out, "Generating component docs into {}", args.output.display()).err()
    } else {
        None
    };

    let report = writer::generate_records(&records, &args.output, &options, |outcome| {
        if human
            && print_error.is_none()
            && let Err(e) = writeln!(out, "{}", status_line(outcome))
        {
            print_error = Some(e);
        }
    })?;
    if let Some(e) = print_error {
        return Err(e.into());
    }

    match args.format {
        OutputFormat::Json => {
            writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
        }
        OutputFormat::Human => {
            if !quiet {
                writeln!(out)?;
                writeln!(out, "{}", summary_line(&report))?;
            }
        }
    }

    Ok(())
}

/// One status line for a record outcome.
#[must_use]
pub fn status_line(outcome: &FileOutcome) -> String {
    match outcome.status {
        FileStatus::Created => format!("  created       {}", outcome.file_name),
        FileStatus::Skipped => format!("  skipped       {} (already exists)", outcome.file_name),
        FileStatus::WouldCreate => format!("  would create  {}", outcome.file_name),
    }
}

/// Final summary line.
#[must_use]
pub fn summary_line(report: &GenerateReport) -> String {
    if report.dry_run {
        format!(
            "Dry run: {} would be created, {} skipped",
            report.would_create(),
            report.skipped()
        )
    } else {
        format!(
            "Done: {} created, {} skipped",
            report.written(),
            report.skipped()
        )
    }
}
