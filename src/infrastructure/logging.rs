//! Diagnostic logging for callscan.
//! Events go to stderr so stdout carries nothing but records.

use std::io::IsTerminal;

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::EnvFilter;

/// Build the event filter from a directive string such as `callscan=debug`.
pub fn build_filter(directives: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(directives)
        .with_context(|| format!("Invalid log filter '{}'", directives))
}

/// Install the global stderr subscriber. Colour is used only on a terminal.
pub fn init_tracing(directives: &str) -> Result<()> {
    let filter = build_filter(directives)?;

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .try_init()
        .map_err(|e| anyhow!("Failed to install log subscriber: {}", e))?;

    Ok(())
}
