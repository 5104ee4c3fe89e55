//! Markdown page rendering for ng-zorro-antd components.
//!
//! Converts a catalog record into a Markdown page with:
//! - a header quoting category and last-updated date
//! - an info table (import kind, docs link, schematics summary)
//! - the schematics command block
//! - usage snippets
//! - links back to the official docs and the catalog index

pub mod page;
pub mod schematics;
pub mod usage;
