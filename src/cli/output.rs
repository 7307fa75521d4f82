//! Output formatting for CLI commands.

use crate::client::RRSet;
use crate::error::{Error, Result};

/// Serializes the aggregated rrsets as one JSON array, newline terminated.
///
/// # Errors
///
/// Returns [`Error::Output`] if serialization fails.
pub fn format_rrsets(rrsets: &[RRSet], pretty: bool) -> Result<String> {
    let mut output = if pretty {
        serde_json::to_string_pretty(rrsets)?
    } else {
        serde_json::to_string(rrsets)?
    };
    output.push('\n');
    Ok(output)
}

/// Formats an error for stderr.
#[must_use]
pub fn format_error(error: &Error) -> String {
    error.to_string()
}
