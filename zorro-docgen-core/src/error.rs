//! Core error types for `zorro-docgen`.

use thiserror::Error;

use crate::validate::CatalogIssue;

/// Errors raised when a catalog cannot be used for generation.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// One or more records failed validation.
    #[error("catalog validation failed with {} issue(s)", issues.len())]
    Invalid {
        /// Every issue found, in catalog order.
        issues: Vec<CatalogIssue>,
    },
}

impl CatalogError {
    /// Returns the validation issues carried by this error.
    #[must_use]
    pub fn issues(&self) -> &[CatalogIssue] {
        match self {
            Self::Invalid { issues } => issues,
        }
    }
}
