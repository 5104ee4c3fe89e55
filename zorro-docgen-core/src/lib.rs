//! `zorro-docgen` Core — component catalog and catalog validation
//!
//! This crate provides the component record types, the built-in
//! ng-zorro-antd catalog, and the validation shared across `zorro-docgen`
//! (CLI) and `zorro-docgen-docs` (page rendering and writing).

pub mod catalog;
pub mod error;
pub mod validate;
