//! Diagnostic logging on stderr.
//!
//! Progress lines (`Getting <url> ...`) are emitted at `info`. `RUST_LOG`
//! directives are appended to the level chosen on the command line, so they
//! can refine it per module.

use crate::error::{Error, Result};
use std::env;
use std::io::IsTerminal;
use tracing::Level;
use tracing::metadata::LevelFilter;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn directives(level: Level) -> String {
    let level = level.to_string().to_lowercase();
    let base = format!("fetch_zone={level}");
    match env::var("RUST_LOG") {
        Ok(extra) if !extra.trim().is_empty() => format!("{base},{extra}"),
        _ => base,
    }
}

/// Installs the global stderr subscriber.
///
/// # Errors
///
/// Returns [`Error::Config`] if `RUST_LOG` holds an invalid directive or a
/// global subscriber is already installed.
pub fn init(level: Level) -> Result<()> {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::OFF.into())
        .parse(directives(level))
        .map_err(|e| Error::Config {
            message: format!("invalid RUST_LOG directive: {e}"),
        })?;

    let formatter = tracing_subscriber::fmt::layer()
        .compact()
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(formatter)
        .with(filter)
        .try_init()
        .map_err(|e| Error::Config {
            message: format!("failed to install logger: {e}"),
        })
}

/// Maps the `--verbose` / `--quiet` flags to a level.
#[must_use]
pub const fn level_for(verbose: bool, quiet: bool) -> Level {
    if verbose {
        Level::DEBUG
    } else if quiet {
        Level::WARN
    } else {
        Level::INFO
    }
}
