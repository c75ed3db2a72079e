//! `berth status` -- show every registered connection and its state.
//!
//! Displays a table with one row per registered connection: its state
//! after initialization and, for unavailable connections, which fields
//! are broken. Field errors never include secret values.
//!
//! # Example
//!
//! ```text
//! berth status
//! ```

use comfy_table::{Table, presets::UTF8_FULL};

use berth_connections::{ConnectionRegistry, ConnectionState};

/// Display a table of connection status from the given registry.
pub fn run(registry: &ConnectionRegistry) {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(["CONNECTION", "KIND", "STATE", "DETAIL"]);

    for name in registry.registered() {
        match registry.state(name) {
            Some(ConnectionState::Available(connection)) => {
                let detail = connection
                    .identity()
                    .unwrap_or_else(|_| "no identity".to_owned());
                table.add_row([name, connection.kind().as_str(), "available", detail.as_str()]);
            }
            Some(ConnectionState::Unavailable(err)) => {
                let fields = broken_fields(err);
                table.add_row([name, "-", "unavailable", fields.as_str()]);
            }
            None => {
                table.add_row([name, "-", "uninitialized", ""]);
            }
        }
    }

    println!("{table}");
}

/// Summarize an aggregate error as a comma-separated field list.
fn broken_fields(err: &berth_types::ConfigValidationError) -> String {
    err.errors
        .iter()
        .map(|e| format!("{} ({})", e.field, e.reason))
        .collect::<Vec<_>>()
        .join(", ")
}
