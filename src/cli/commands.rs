//! CLI command implementation.
//!
//! Builds the configuration, runs the fetch and formats the result.

use crate::cli::output::format_rrsets;
use crate::cli::parser::Cli;
use crate::client::{ReqwestTransport, Transport, ZoneFetcher};
use crate::config::Config;
use crate::error::Result;
use tracing::debug;

/// Executes the CLI command over HTTPS.
///
/// # Returns
///
/// The JSON array to print on stdout.
///
/// # Errors
///
/// Returns an error if configuration is incomplete or the fetch fails.
pub fn execute(cli: &Cli) -> Result<String> {
    execute_with(cli, ReqwestTransport::new)
}

/// Executes the CLI command over a transport built from the configuration.
///
/// The transport is only built once the configuration is complete, so a
/// missing token never reaches the network.
///
/// # Errors
///
/// Returns an error if configuration is incomplete, the transport cannot be
/// built or the fetch fails.
pub fn execute_with<T, F>(cli: &Cli, make_transport: F) -> Result<String>
where
    T: Transport,
    F: FnOnce(&Config) -> Result<T>,
{
    let config = cli.config()?;
    debug!(?config, zone = %cli.zone, "fetching zone");

    let transport = make_transport(&config)?;
    let fetcher = ZoneFetcher::new(transport, config);
    let rrsets = fetcher.fetch(&cli.zone)?;
    debug!(count = rrsets.len(), "zone complete");

    format_rrsets(&rrsets, cli.pretty)
}
