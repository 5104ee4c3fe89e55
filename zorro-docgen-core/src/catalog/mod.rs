//! Component catalog.
//!
//! The catalog is a static, read-only table compiled into the binary.
//! Lookup helpers here never allocate records; they hand out references
//! into the static table.

mod builtin;
pub mod schema;

use indexmap::IndexMap;

pub use schema::{Category, ComponentRecord, DOCS_BASE_URL, ImportKind, PACKAGE_NAME, Schematics};

/// Returns the built-in catalog in generation order.
#[must_use]
pub fn builtin() -> &'static [ComponentRecord] {
    builtin::COMPONENTS
}

/// Looks up a record by name, ignoring ASCII case.
#[must_use]
pub fn find(name: &str) -> Option<&'static ComponentRecord> {
    builtin::COMPONENTS
        .iter()
        .find(|r| r.name.eq_ignore_ascii_case(name))
}

/// Suggests the closest component name for a typo.
///
/// Uses Damerau-Levenshtein distance on lowercased names; returns `None`
/// when nothing is within distance 3.
#[must_use]
pub fn suggest(input: &str) -> Option<&'static str> {
    let needle = input.to_ascii_lowercase();
    builtin::COMPONENTS
        .iter()
        .map(|r| {
            (
                r.name,
                strsim::damerau_levenshtein(&needle, &r.name.to_ascii_lowercase()),
            )
        })
        .filter(|(_, dist)| *dist <= 3)
        .min_by_key(|(_, dist)| *dist)
        .map(|(name, _)| name)
}

/// Returns the records in the given categories, in catalog order.
///
/// An empty filter selects the whole catalog.
#[must_use]
pub fn filter(categories: &[Category]) -> Vec<ComponentRecord> {
    builtin::COMPONENTS
        .iter()
        .filter(|r| categories.is_empty() || categories.contains(&r.category))
        .copied()
        .collect()
}

/// Groups records by category, preserving first-seen order.
#[must_use]
pub fn by_category(records: &[ComponentRecord]) -> IndexMap<Category, Vec<&ComponentRecord>> {
    let mut groups: IndexMap<Category, Vec<&ComponentRecord>> = IndexMap::new();
    for record in records {
        groups.entry(record.category).or_default().push(record);
    }
    groups
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn builtin_has_72_components() {
        assert_eq!(builtin().len(), 72);
    }

    #[test]
    fn indexes_are_sequential() {
        for (pos, record) in builtin().iter().enumerate() {
            assert_eq!(
                record.index as usize,
                pos + 1,
                "record '{}' is out of order",
                record.name
            );
        }
    }

    #[test]
    fn no_duplicate_names_or_file_names() {
        let names: HashSet<_> = builtin().iter().map(|r| r.name).collect();
        assert_eq!(names.len(), builtin().len());

        let files: HashSet<_> = builtin().iter().map(ComponentRecord::file_name).collect();
        assert_eq!(files.len(), builtin().len());
    }

    #[test]
    fn alert_entry() {
        let alert = find("Alert").unwrap();
        assert_eq!(alert.index, 1);
        assert_eq!(alert.module, "NzAlertModule");
        assert_eq!(alert.schematics, Schematics::None);
        assert_eq!(alert.import, ImportKind::Module);
        assert_eq!(alert.category, Category::Feedback);
    }

    #[test]
    fn message_and_notification_are_the_only_services() {
        let services: Vec<_> = builtin()
            .iter()
            .filter(|r| r.is_service())
            .map(|r| r.name)
            .collect();
        assert_eq!(services, vec!["Message", "Notification"]);

        let message = find("message").unwrap();
        assert_eq!(message.index, 9);
        assert_eq!(message.module, "NzMessageService");
    }

    #[test]
    fn only_tree_and_form_have_schematics() {
        let with: Vec<_> = builtin()
            .iter()
            .filter(|r| r.schematics.has_commands())
            .map(|r| (r.name, r.schematics))
            .collect();
        assert_eq!(
            with,
            vec![("Tree", Schematics::Tree), ("Form", Schematics::Form)]
        );
    }

    #[test]
    fn find_is_case_insensitive() {
        assert_eq!(find("qrcode").map(|r| r.name), Some("QRCode"));
        assert!(find("nonexistent").is_none());
    }

    #[test]
    fn suggest_close_typo() {
        assert_eq!(suggest("Alrt"), Some("Alert"));
        assert_eq!(suggest("datepiker"), Some("DatePicker"));
    }

    #[test]
    fn suggest_far_input() {
        assert!(suggest("xyzabc123456").is_none());
    }

    #[test]
    fn filter_by_category() {
        let layout = filter(&[Category::Layout]);
        assert_eq!(layout.len(), 6);
        assert!(layout.iter().all(|r| r.category == Category::Layout));

        let two = filter(&[Category::Other, Category::Special]);
        assert_eq!(
            two.iter().map(|r| r.name).collect::<Vec<_>>(),
            vec!["Affix", "BackTop", "WaterMark", "CheckList", "HashCode"]
        );
    }

    #[test]
    fn empty_filter_selects_all() {
        assert_eq!(filter(&[]).len(), builtin().len());
    }

    #[test]
    fn by_category_preserves_order() {
        let groups = by_category(builtin());
        let order: Vec<_> = groups.keys().copied().collect();
        assert_eq!(order, Category::all());
        assert_eq!(groups[&Category::Feedback].len(), 10);
        assert_eq!(groups[&Category::DataDisplay].len(), 21);
        assert_eq!(groups[&Category::DataEntry].len(), 18);
    }
}
