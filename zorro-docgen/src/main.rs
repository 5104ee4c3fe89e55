//! `zorro-docgen` — ng-zorro-antd component documentation generator

use clap::Parser;

use zorro_docgen::cli::args::Cli;
use zorro_docgen::cli::commands;
use zorro_docgen::error::ExitCode;
use zorro_docgen::observability::init_logging;

fn main() {
    let cli = Cli::parse();

    if !cli.quiet {
        init_logging(cli.log_format.into(), cli.verbose, cli.color);
    }

    match commands::dispatch(cli) {
        Ok(()) => std::process::exit(ExitCode::SUCCESS),
        Err(e) if e.is_broken_pipe() => std::process::exit(ExitCode::SUCCESS),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
