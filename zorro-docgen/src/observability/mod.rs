//! Observability module
//!
//! Logging setup for `zorro-docgen` runs.

pub mod logging;

pub use logging::{LogFormat, init_logging};
