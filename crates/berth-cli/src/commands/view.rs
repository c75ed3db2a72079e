//! `berth view` -- print a connection's public view as JSON.
//!
//! The public view is the only form of connection state safe to display;
//! secret material cannot appear in it. Unavailable and unregistered
//! names fail with a "not configured" error, distinct from any runtime
//! failure.
//!
//! # Example
//!
//! ```text
//! berth view solana
//! ```

use berth_connections::ConnectionRegistry;

/// Print the public view of the named connection as pretty JSON.
pub fn run(registry: &ConnectionRegistry, name: &str) -> anyhow::Result<()> {
    let connection = registry.get(name)?;
    let view = connection.public_view();
    println!("{}", serde_json::to_string_pretty(&view)?);
    Ok(())
}
