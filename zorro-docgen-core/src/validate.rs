//! Catalog validation.
//!
//! Generation relies on every record mapping to a distinct, stable file
//! name. Two records colliding on a file name would make one page silently
//! shadow the other, so collisions are reported before anything is written.

use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::catalog::ComponentRecord;
use crate::error::CatalogError;

static URL_SAFE_PATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)*$").expect("valid regex"));

/// Highest index that still fits the two-digit file name prefix.
pub const MAX_INDEX: u32 = 99;

/// A single problem found in a catalog record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogIssue {
    /// Name of the offending record.
    pub record: String,
    /// Field that failed validation.
    pub field: &'static str,
    /// Human-readable message.
    pub message: String,
}

impl fmt::Display for CatalogIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ERROR {}\n  \u{2192} {}: {}",
            self.record, self.field, self.message
        )
    }
}

/// Validates a catalog.
///
/// Checks, per record: non-empty `name` and `module`, `index` within
/// `1..=99`, URL-safe `path`; across records: unique `index`, unique
/// `name`, unique file name. Returns every issue found; an empty list
/// means the catalog is usable.
#[must_use]
pub fn validate_catalog(records: &[ComponentRecord]) -> Vec<CatalogIssue> {
    let mut issues = Vec::new();

    for record in records {
        validate_record(record, &mut issues);
    }

    let mut seen_index: HashMap<u32, &str> = HashMap::new();
    let mut seen_name: HashMap<String, &str> = HashMap::new();
    let mut seen_file: HashMap<String, &str> = HashMap::new();

    for record in records {
        if let Some(first) = seen_index.get(&record.index) {
            issues.push(issue(
                record,
                "index",
                format!("duplicate index {}, first used by {first}", record.index),
            ));
        } else {
            seen_index.insert(record.index, record.name);
        }

        let lowered = record.name.to_ascii_lowercase();
        if let Some(first) = seen_name.get(&lowered) {
            issues.push(issue(
                record,
                "name",
                format!("duplicate name, first used by {first}"),
            ));
        } else {
            seen_name.insert(lowered, record.name);
        }

        let file_name = record.file_name();
        if let Some(first) = seen_file.get(&file_name) {
            issues.push(issue(
                record,
                "file_name",
                format!("{file_name} collides with {first}"),
            ));
        } else {
            seen_file.insert(file_name, record.name);
        }
    }

    issues
}

/// Validates a catalog, turning any issue into a [`CatalogError`].
///
/// # Errors
///
/// Returns `CatalogError::Invalid` carrying every issue found.
pub fn ensure_valid(records: &[ComponentRecord]) -> Result<(), CatalogError> {
    let issues = validate_catalog(records);
    if issues.is_empty() {
        Ok(())
    } else {
        Err(CatalogError::Invalid { issues })
    }
}

fn validate_record(record: &ComponentRecord, issues: &mut Vec<CatalogIssue>) {
    if record.name.trim().is_empty() {
        issues.push(issue(record, "name", "must not be empty".to_string()));
    }

    if record.module.trim().is_empty() {
        issues.push(issue(record, "module", "must not be empty".to_string()));
    }

    if record.index == 0 || record.index > MAX_INDEX {
        issues.push(issue(
            record,
            "index",
            format!("expected 1..={MAX_INDEX}, got {}", record.index),
        ));
    }

    if !URL_SAFE_PATH.is_match(record.path) {
        issues.push(issue(
            record,
            "path",
            format!(
                "expected lowercase hyphen-separated segment, got \"{}\"",
                record.path
            ),
        ));
    }
}

fn issue(record: &ComponentRecord, field: &'static str, message: String) -> CatalogIssue {
    CatalogIssue {
        record: record.name.to_string(),
        field,
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{self, Category};

    fn record(name: &'static str, path: &'static str, index: u32) -> ComponentRecord {
        ComponentRecord::new(name, "NzTestModule", path, Category::Other, index)
    }

    #[test]
    fn builtin_catalog_is_valid() {
        let issues = validate_catalog(catalog::builtin());
        assert!(issues.is_empty(), "unexpected issues: {issues:?}");
        assert!(ensure_valid(catalog::builtin()).is_ok());
    }

    #[test]
    fn duplicate_index_detected() {
        let records = [record("Alpha", "alpha", 1), record("Beta", "beta", 1)];
        let issues = validate_catalog(&records);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].record, "Beta");
        assert_eq!(issues[0].field, "index");
        assert!(issues[0].message.contains("Alpha"));
    }

    #[test]
    fn duplicate_file_name_detected() {
        let records = [record("Alpha", "alpha", 1), record("Alpha", "alpha-two", 1)];
        let issues = validate_catalog(&records);
        let fields: Vec<_> = issues.iter().map(|i| i.field).collect();
        assert_eq!(fields, vec!["index", "name", "file_name"]);
    }

    #[test]
    fn index_out_of_range() {
        let issues = validate_catalog(&[record("Zero", "zero", 0), record("Big", "big", 100)]);
        assert_eq!(issues.len(), 2);
        assert!(issues.iter().all(|i| i.field == "index"));
    }

    #[test]
    fn path_must_be_url_safe() {
        for bad in ["Alert", "tree_view", "-lead", "trail-", "a--b", "has space", ""] {
            let issues = validate_catalog(&[record("X", bad, 1)]);
            assert!(
                issues.iter().any(|i| i.field == "path"),
                "path {bad:?} should be rejected"
            );
        }
        for good in ["alert", "qr-code", "tree-view", "h2"] {
            assert!(validate_catalog(&[record("X", good, 1)]).is_empty());
        }
    }

    #[test]
    fn empty_name_and_module() {
        let bad = ComponentRecord::new(" ", "", "ok", Category::Other, 5);
        let fields: Vec<_> = validate_catalog(&[bad]).iter().map(|i| i.field).collect();
        assert_eq!(fields, vec!["name", "module"]);
    }

    #[test]
    fn ensure_valid_carries_issues() {
        let err = ensure_valid(&[record("A", "a", 3), record("B", "b", 3)]).unwrap_err();
        assert_eq!(err.issues().len(), 1);
        assert!(err.to_string().contains("1 issue(s)"));
    }

    #[test]
    fn issue_display() {
        let issue = CatalogIssue {
            record: "Alert".to_string(),
            field: "path",
            message: "bad".to_string(),
        };
        assert_eq!(issue.to_string(), "ERROR Alert\n  \u{2192} path: bad");
    }
}
