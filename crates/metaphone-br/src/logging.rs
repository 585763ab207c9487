//! Logging setup
//!
//! The library only emits `tracing` events. Applications that do not install
//! their own subscriber can call [`init_logging`] once at startup.

use std::sync::Once;

use tracing_subscriber::EnvFilter;

/// Install a formatting subscriber filtered by `RUST_LOG`.
///
/// Defaults to `warn` when `RUST_LOG` is unset. Safe to call more than once;
/// an existing global subscriber is left in place.
///
/// - `RUST_LOG=metaphone_br=debug` - word alignment decisions
/// - `RUST_LOG=metaphone_br=trace` - every rule hit while encoding
pub fn init_logging() {
    static INIT: Once = Once::new();

    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        let installed = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .try_init()
            .is_ok();
        tracing::debug!(installed, "metaphone-br logging initialized");
    });
}
