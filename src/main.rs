//! Binary entry point for fetch-zone.

#![allow(clippy::print_stderr)]

use clap::Parser;
use fetch_zone::cli::output::format_error;
use fetch_zone::cli::{Cli, execute};
use fetch_zone::logging;
use std::io::{self, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logging::init(logging::level_for(cli.verbose, cli.quiet)) {
        eprintln!("Error: {}", format_error(&e));
        return ExitCode::FAILURE;
    }

    match execute(&cli) {
        Ok(output) => {
            // Handle broken pipe gracefully (e.g., when piped to `head` or `jq`)
            if let Err(e) = io::stdout().write_all(output.as_bytes())
                && e.kind() != io::ErrorKind::BrokenPipe
            {
                eprintln!("Error writing to stdout: {e}");
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", format_error(&e));
            ExitCode::FAILURE
        }
    }
}
