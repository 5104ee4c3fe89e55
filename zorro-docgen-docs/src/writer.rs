//! Skip-on-exists page writer.
//!
//! Walks the catalog in order, renders each record and writes it to
//! `{index:02}-{name}.md` under the output directory. A page that already
//! exists is never touched, so hand edits survive regeneration and an
//! interrupted run can simply be repeated.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use zorro_docgen_core::catalog::{self, ComponentRecord};
use zorro_docgen_core::validate;

use crate::error::DocsError;
use crate::markdown::page::render_page;

/// What happened to one target file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FileStatus {
    /// The page was written.
    Created,
    /// A file with that name already existed.
    Skipped,
    /// Dry run: the page would have been written.
    WouldCreate,
}

/// Per-record result of a generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileOutcome {
    /// Component name.
    pub component: &'static str,
    /// Target file name.
    pub file_name: String,
    /// Full target path.
    pub path: PathBuf,
    /// Outcome.
    pub status: FileStatus,
    /// Bytes written (or that would be written in a dry run).
    pub bytes: usize,
}

/// Options for a generation run.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenerateOptions {
    /// Render and report without touching the filesystem.
    pub dry_run: bool,
}

/// Summary of a generation run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GenerateReport {
    /// Directory pages were written to.
    pub output_dir: PathBuf,
    /// Whether this was a dry run.
    pub dry_run: bool,
    /// One entry per record, in catalog order.
    pub files: Vec<FileOutcome>,
}

impl GenerateReport {
    /// Number of pages written.
    #[must_use]
    pub fn written(&self) -> usize {
        self.count(FileStatus::Created)
    }

    /// Number of pages skipped because they already existed.
    #[must_use]
    pub fn skipped(&self) -> usize {
        self.count(FileStatus::Skipped)
    }

    /// Number of pages a dry run would have written.
    #[must_use]
    pub fn would_create(&self) -> usize {
        self.count(FileStatus::WouldCreate)
    }

    /// Total bytes written to disk.
    #[must_use]
    pub fn bytes_written(&self) -> usize {
        self.files
            .iter()
            .filter(|f| f.status == FileStatus::Created)
            .map(|f| f.bytes)
            .sum()
    }

    fn count(&self, status: FileStatus) -> usize {
        self.files.iter().filter(|f| f.status == status).count()
    }
}

/// Generate pages for the built-in catalog into `output_dir`.
///
/// Returns the number of files written.
///
/// # Errors
///
/// Returns `DocsError` if the output directory cannot be created or a page
/// cannot be written.
pub fn generate(output_dir: &Path) -> Result<usize, DocsError> {
    let report = generate_records(
        catalog::builtin(),
        output_dir,
        &GenerateOptions::default(),
        |_| {},
    )?;
    Ok(report.written())
}

/// Generate pages for `records` into `output_dir`.
///
/// The records are validated first; a catalog with colliding indexes or
/// file names aborts before anything is written. `observer` is called once
/// per record, in order, as soon as its outcome is known.
///
/// # Errors
///
/// Returns `DocsError::Catalog` for an invalid catalog, and
/// `DocsError::CreateDir` / `DocsError::Write` on I/O failure. The run
/// stops at the first I/O failure.
pub fn generate_records<F>(
    records: &[ComponentRecord],
    output_dir: &Path,
    options: &GenerateOptions,
    mut observer: F,
) -> Result<GenerateReport, DocsError>
where
    F: FnMut(&FileOutcome),
{
    validate::ensure_valid(records)?;

    if !options.dry_run {
        fs::create_dir_all(output_dir).map_err(|source| DocsError::CreateDir {
            path: output_dir.to_path_buf(),
            source,
        })?;
    }

    tracing::debug!(
        output_dir = %output_dir.display(),
        records = records.len(),
        dry_run = options.dry_run,
        "generating component pages"
    );

    let mut report = GenerateReport {
        output_dir: output_dir.to_path_buf(),
        dry_run: options.dry_run,
        files: Vec::with_capacity(records.len()),
    };

    for record in records {
        let outcome = write_record(record, output_dir, options)?;
        observer(&outcome);
        report.files.push(outcome);
    }

    tracing::info!(
        written = report.written(),
        skipped = report.skipped(),
        bytes = report.bytes_written(),
        "component page generation finished"
    );

    Ok(report)
}

fn write_record(
    record: &ComponentRecord,
    output_dir: &Path,
    options: &GenerateOptions,
) -> Result<FileOutcome, DocsError> {
    let file_name = record.file_name();
    let path = output_dir.join(&file_name);
    let outcome = |status, bytes| FileOutcome {
        component: record.name,
        file_name: file_name.clone(),
        path: path.clone(),
        status,
        bytes,
    };

    if options.dry_run {
        let exists = path.try_exists().map_err(|source| DocsError::Write {
            path: path.clone(),
            source,
        })?;
        if exists {
            return Ok(outcome(FileStatus::Skipped, 0));
        }
        return Ok(outcome(FileStatus::WouldCreate, render_page(record).len()));
    }

    // create_new makes the existence check and the creation one step.
    let file = match OpenOptions::new().write(true).create_new(true).open(&path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            tracing::debug!(file = %file_name, "page already exists, skipping");
            return Ok(outcome(FileStatus::Skipped, 0));
        }
        Err(source) => {
            return Err(DocsError::Write {
                path: path.clone(),
                source,
            });
        }
    };

    let body = render_page(record);
    fill_new_file(file, &path, body.as_bytes())?;

    tracing::info!(file = %file_name, bytes = body.len(), "page written");
    Ok(outcome(FileStatus::Created, body.len()))
}

/// Writes `body` into a file this run just created. On failure the file is
/// removed again so a truncated page is never mistaken for an existing one.
fn fill_new_file<W: Write>(mut out: W, path: &Path, body: &[u8]) -> Result<(), DocsError> {
    let Err(source) = out.write_all(body).and_then(|()| out.flush()) else {
        return Ok(());
    };
    drop(out);

    if let Err(e) = fs::remove_file(path) {
        tracing::warn!(path = %path.display(), error = %e, "could not remove partially written page");
    }
    Err(DocsError::Write {
        path: path.to_path_buf(),
        source,
    })
}
