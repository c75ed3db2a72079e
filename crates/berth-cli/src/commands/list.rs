//! `berth list` -- list available connection names.
//!
//! One name per line on stdout, sorted, nothing else. Suitable for
//! scripts (`berth list | grep solana`).

use berth_connections::ConnectionRegistry;

/// Print available connection names, one per line.
pub fn run(registry: &ConnectionRegistry) {
    for name in registry.list_available() {
        println!("{name}");
    }
}
