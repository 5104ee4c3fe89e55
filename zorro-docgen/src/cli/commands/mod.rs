//! CLI command dispatch and handlers
//!
//! Routes parsed CLI arguments to the appropriate command handler.

pub mod completions;
pub mod generate;
pub mod list;
pub mod show;
pub mod validate;
pub mod version;

use crate::cli::args::{Cli, Commands};
use crate::error::DocGenError;

/// Dispatch a parsed CLI invocation to the appropriate command handler.
///
/// # Errors
///
/// Returns an error if the dispatched command handler fails.
pub fn dispatch(cli: Cli) -> Result<(), DocGenError> {
    match cli.command {
        Commands::Generate(args) => generate::run(&args, cli.quiet),
        Commands::List(args) => list::run(&args),
        Commands::Show(args) => show::run(&args),
        Commands::Validate(args) => validate::run(&args),
        Commands::Completions(args) => completions::run(&args),
        Commands::Version(args) => version::run(&args),
    }
}
