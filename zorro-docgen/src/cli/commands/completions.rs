//! `completions` command handler.

use std::io::{self, Write};

use clap::CommandFactory;
use clap_complete::Shell as ClapShell;

use crate::cli::args::{Cli, CompletionsArgs, Shell};
use crate::error::DocGenError;

const BIN_NAME: &str = "zorro-docgen";

impl From<Shell> for ClapShell {
    fn from(shell: Shell) -> Self {
        match shell {
            Shell::Bash => Self::Bash,
            Shell::Zsh => Self::Zsh,
            Shell::Fish => Self::Fish,
            Shell::PowerShell => Self::PowerShell,
            Shell::Elvish => Self::Elvish,
        }
    }
}

/// Print the completion script for the requested shell to stdout.
///
/// # Errors
///
/// Returns an I/O error if stdout is closed.
pub fn run(args: &CompletionsArgs) -> Result<(), DocGenError> {
    let script = render(args.shell);
    tracing::debug!(shell = ?args.shell, bytes = script.len(), "writing completion script");
    write_completions(&script, &mut io::stdout().lock())?;
    Ok(())
}

/// Renders the completion script for `shell`.
#[must_use]
pub fn render(shell: Shell) -> Vec<u8> {
    let mut buf = Vec::new();
    let mut cmd = Cli::command();
    clap_complete::generate(ClapShell::from(shell), &mut cmd, BIN_NAME, &mut buf);
    buf
}

/// Writes a rendered script to `out`.
///
/// # Errors
///
/// Returns the underlying I/O error.
pub fn write_completions(script: &[u8], out: &mut dyn Write) -> io::Result<()> {
    out.write_all(script)?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn script(shell: Shell) -> String {
        String::from_utf8(render(shell)).unwrap()
    }

    #[test]
    fn bash_completes_subcommands() {
        let out = script(Shell::Bash);
        assert!(out.contains("zorro-docgen"));
        assert!(out.contains("generate"));
        assert!(out.contains("--dry-run"));
    }

    #[test]
    fn fish_offers_category_values() {
        let out = script(Shell::Fish);
        assert!(out.contains("data-entry"));
    }

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn closed_stdout_becomes_io_error() {
        let err: DocGenError = write_completions(&render(Shell::Zsh), &mut ClosedPipe)
            .unwrap_err()
            .into();
        assert!(matches!(err, DocGenError::Io(_)));
        assert!(err.is_broken_pipe());
    }
}
