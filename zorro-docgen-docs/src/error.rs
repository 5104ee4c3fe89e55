//! Error types for `zorro-docgen` page generation.

use std::path::PathBuf;

use thiserror::Error;
use zorro_docgen_core::error::CatalogError;

/// Errors that can occur while generating component pages.
///
/// Any of these aborts the run; an already-existing target file is not an
/// error and never produces one.
#[derive(Debug, Error)]
pub enum DocsError {
    /// The catalog failed validation before anything was written.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// The output directory could not be created.
    #[error("failed to create output directory {}: {source}", path.display())]
    CreateDir {
        /// Directory that was being created.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// A page could not be written.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        /// File that was being written.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}
