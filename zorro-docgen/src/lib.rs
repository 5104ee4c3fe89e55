//! `zorro-docgen` - ng-zorro-antd component documentation generator
//!
//! This library provides the CLI surface around `zorro-docgen-docs`:
//! argument parsing, command dispatch, logging setup, and exit codes.

pub mod cli;
pub mod error;
pub mod observability;
