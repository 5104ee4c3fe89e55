//! Error types for `zorro-docgen`
//!
//! Aggregates the catalog and page-generation errors and maps each to a
//! process exit code.

use thiserror::Error;
use zorro_docgen_core::error::CatalogError;
use zorro_docgen_docs::error::DocsError;

// ============================================================================
// Exit Codes
// ============================================================================

/// Exit codes for `zorro-docgen` CLI operations.
///
/// These codes follow Unix conventions.
pub struct ExitCode;

impl ExitCode {
    /// Successful execution
    pub const SUCCESS: i32 = 0;

    /// General error
    pub const ERROR: i32 = 1;

    /// Catalog validation error (duplicate index, colliding file names)
    pub const CATALOG_ERROR: i32 = 2;

    /// I/O error (permission denied, disk full, invalid path)
    pub const IO_ERROR: i32 = 3;

    /// Usage error (unknown component, invalid arguments)
    pub const USAGE_ERROR: i32 = 64;
}

// ============================================================================
// Top-Level Error
// ============================================================================

/// Top-level error type for `zorro-docgen` operations.
#[derive(Debug, Error)]
pub enum DocGenError {
    /// Catalog validation error
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Page generation error
    #[error(transparent)]
    Docs(#[from] DocsError),

    /// Invalid usage (unknown component name, ...)
    #[error("{0}")]
    Usage(String),

    /// I/O error writing command output
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl DocGenError {
    /// Returns the appropriate exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Catalog(_) | Self::Docs(DocsError::Catalog(_)) => ExitCode::CATALOG_ERROR,
            Self::Docs(DocsError::CreateDir { .. } | DocsError::Write { .. }) | Self::Io(_) => {
                ExitCode::IO_ERROR
            }
            Self::Usage(_) => ExitCode::USAGE_ERROR,
            Self::Json(_) => ExitCode::ERROR,
        }
    }

    /// Whether stdout was closed by the reader (e.g. piped into `head`).
    ///
    /// That ends the output early but is not a failure of the run.
    #[must_use]
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, Self::Io(e) if e.kind() == std::io::ErrorKind::BrokenPipe)
    }
}
