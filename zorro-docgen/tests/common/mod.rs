//! Shared integration-test harness for running the `zorro-docgen` binary
//! as a child process.

#![allow(dead_code)]

use std::path::Path;
use std::process::{Command, Output};

/// Runs the built `zorro-docgen` binary.
pub struct DocGenProcess;

impl DocGenProcess {
    fn command() -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_zorro-docgen"));
        cmd.env_remove("ZORRO_DOCGEN_LOG_LEVEL")
            .env_remove("ZORRO_DOCGEN_COLOR");
        cmd
    }

    /// Runs the binary with `args` and waits for it to exit.
    #[allow(clippy::missing_panics_doc)]
    pub fn spawn_command(args: &[&str]) -> Output {
        Self::command()
            .args(args)
            .output()
            .expect("failed to run zorro-docgen")
    }

    /// Runs the binary with `args` from inside `dir`.
    #[allow(clippy::missing_panics_doc)]
    pub fn spawn_in(dir: &Path, args: &[&str]) -> Output {
        Self::command()
            .current_dir(dir)
            .args(args)
            .output()
            .expect("failed to run zorro-docgen")
    }

    /// Runs the binary with `args` and its stdout already closed by the
    /// reader, as when piped into `head`.
    #[allow(clippy::missing_panics_doc)]
    pub fn spawn_with_closed_stdout(args: &[&str]) -> Output {
        let (reader, writer) = std::io::pipe().expect("failed to create pipe");
        drop(reader);
        Self::command()
            .args(args)
            .stdout(writer)
            .output()
            .expect("failed to run zorro-docgen")
    }

    /// Stdout of a finished run, lossily decoded.
    pub fn stdout(output: &Output) -> String {
        String::from_utf8_lossy(&output.stdout).into_owned()
    }

    /// Stderr of a finished run, lossily decoded.
    pub fn stderr(output: &Output) -> String {
        String::from_utf8_lossy(&output.stderr).into_owned()
    }
}
