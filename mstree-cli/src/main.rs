//! Entry point for the `mstree` batch program.
//!
//! Parses command-line arguments with clap, reads the graph from stdin,
//! prints the minimum spanning tree weight to stdout, and maps failures to
//! exit code 1. Logging is initialised first so every later failure is
//! reported through `tracing` on stderr.

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use mstree_cli::{
    cli::{Cli, CliError, render_outcome, run_cli},
    logging::{self, LoggingError},
};
use tracing::{Level, enabled, error, field};

/// Parse CLI arguments, run the computation over stdin, render the result,
/// and flush the output stream.
fn try_main() -> Result<()> {
    let cli = Cli::parse();
    let stdin = io::stdin();
    let outcome = run_cli(&cli, stdin.lock()).context("failed to compute MST weight")?;
    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    render_outcome(&outcome, &mut writer).context("failed to render result")?;
    writer.flush().context("failed to flush output")?;
    Ok(())
}

fn main() -> ExitCode {
    if let Err(err) = logging::init_logging() {
        report_logging_init_error(&err);
        return ExitCode::FAILURE;
    }

    if let Err(err) = try_main() {
        let code = err.downcast_ref::<CliError>().map(CliError::code);
        let message = format!("{err:#}");
        if enabled!(Level::ERROR) {
            error!(
                error = %message,
                code = code.map(field::display),
                "command execution failed"
            );
        } else {
            report_unlogged_failure(&message, code);
        }
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

#[expect(
    clippy::print_stderr,
    reason = "Emit one-off diagnostic before tracing is initialized"
)]
fn report_logging_init_error(err: &LoggingError) {
    eprintln!("failed to initialize logging: {err}");
}

#[expect(
    clippy::print_stderr,
    reason = "The filter suppresses error events, so report directly"
)]
fn report_unlogged_failure(message: &str, code: Option<&str>) {
    match code {
        Some(code) => eprintln!("error [{code}]: {message}"),
        None => eprintln!("error: {message}"),
    }
}
