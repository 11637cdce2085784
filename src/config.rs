//! Runtime configuration.
//!
//! The recipient list comes from the `RECIPIENT_NUMBERS` environment
//! variable and is read when the session becomes ready, not at startup.

use anyhow::{Context, Result};

/// Environment variable holding the comma-separated recipient numbers.
pub const RECIPIENTS_VAR: &str = "RECIPIENT_NUMBERS";

/// Read the recipient list from `RECIPIENT_NUMBERS`.
pub fn recipient_numbers() -> Result<Vec<String>> {
    recipients_from(RECIPIENTS_VAR)
}

fn recipients_from(var: &str) -> Result<Vec<String>> {
    let raw = std::env::var(var).with_context(|| format!("{var} is not set"))?;
    Ok(split_recipients(&raw))
}

/// Split a comma-separated recipient string, preserving order.
///
/// Numbers pass through as configured: no format validation, no
/// deduplication. The client rejects anything it cannot address.
fn split_recipients(raw: &str) -> Vec<String> {
    raw.split(',').map(str::to_string).collect()
}
