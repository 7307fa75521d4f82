//! Command-line argument parsing.
//!
//! Defines the CLI structure using clap derive macros.

use crate::config::{Config, DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS};
use crate::error::Result;
use clap::Parser;
use std::time::Duration;

/// Fetch zone contents from deSEC. Access token is expected in $TOKEN
/// environment variable.
///
/// Prints every rrset of the zone as one JSON array, following the API's
/// pagination links when the zone is too large for a single response.
#[derive(Parser, Debug)]
#[command(name = "fetch-zone")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Zone to fetch.
    pub zone: String,

    /// deSEC API token.
    #[arg(long, env = "TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// API base URL.
    #[arg(long, env = "DESEC_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Per-request timeout in seconds.
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Pretty-print the JSON output.
    #[arg(short, long)]
    pub pretty: bool,

    /// Enable debug logging.
    #[arg(short, long)]
    pub verbose: bool,

    /// Only log warnings and errors.
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Cli {
    /// Builds the fetch configuration from the parsed arguments.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the token is missing or the API URL
    /// is invalid.
    pub fn config(&self) -> Result<Config> {
        Ok(Config::from_token(self.token.as_deref())?
            .with_api_url(&self.api_url)?
            .with_timeout(Duration::from_secs(self.timeout)))
    }
}
