//! Diagnostic logging for `zorro-docgen` runs.
//!
//! Status lines and reports go to stdout; `tracing` diagnostics (which page
//! was written or skipped, what a command selected) go to stderr so they
//! never mix with piped output. `-v` raises the level, and
//! `ZORRO_DOCGEN_LOG_LEVEL` accepts a full `EnvFilter` directive such as
//! `zorro_docgen_docs=debug`.

use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

use crate::cli::args::{ColorChoice, LogFormatArg};

/// Environment variable holding an `EnvFilter` directive; wins over `-v`.
pub const LOG_LEVEL_ENV: &str = "ZORRO_DOCGEN_LOG_LEVEL";

/// How diagnostics are rendered on stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// One readable line per event.
    #[default]
    Human,
    /// One JSON object per event, for CI log collectors.
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(arg: LogFormatArg) -> Self {
        match arg {
            LogFormatArg::Human => Self::Human,
            LogFormatArg::Json => Self::Json,
        }
    }
}

/// Level directive for a `-v` count. Without `-v` only warnings show, so a
/// plain `generate` prints nothing beyond its status lines.
#[must_use]
pub const fn verbosity_to_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Whether stderr diagnostics should carry ANSI colors.
#[must_use]
pub fn use_ansi(color: ColorChoice) -> bool {
    match color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => {
            std::io::stderr().is_terminal() && std::env::var_os("NO_COLOR").is_none()
        }
    }
}

/// Installs the stderr subscriber.
///
/// Module targets are shown from `-vv` on, where events from the core,
/// docs and CLI crates interleave. A second call is a no-op.
pub fn init_logging(format: LogFormat, verbosity: u8, color: ColorChoice) {
    let filter = EnvFilter::try_from_env(LOG_LEVEL_ENV)
        .unwrap_or_else(|_| EnvFilter::new(verbosity_to_directive(verbosity)));
    let with_target = verbosity >= 2;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(with_target)
        .with_writer(std::io::stderr);

    let _ = match format {
        LogFormat::Human => builder.with_ansi(use_ansi(color)).try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_from_cli_arg() {
        assert_eq!(LogFormat::default(), LogFormat::Human);
        assert_eq!(LogFormat::from(LogFormatArg::Human), LogFormat::Human);
        assert_eq!(LogFormat::from(LogFormatArg::Json), LogFormat::Json);
    }

    #[test]
    fn directive_per_verbosity() {
        let levels: Vec<_> = (0..=4).map(verbosity_to_directive).collect();
        assert_eq!(levels, ["warn", "info", "debug", "trace", "trace"]);
        assert_eq!(verbosity_to_directive(u8::MAX), "trace");
    }

    #[test]
    fn explicit_color_choice_wins() {
        assert!(use_ansi(ColorChoice::Always));
        assert!(!use_ansi(ColorChoice::Never));
    }

    #[test]
    fn repeated_init_is_harmless() {
        init_logging(LogFormat::Json, 2, ColorChoice::Never);
        init_logging(LogFormat::Human, 0, ColorChoice::Auto);
    }
}
