//! `zorro-docgen` Docs — component page generation
//!
//! Renders Markdown pages from catalog records and writes them to an
//! output directory, never overwriting a page that already exists.

pub mod error;
pub mod markdown;
pub mod writer;
