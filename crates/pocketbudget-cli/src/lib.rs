//! pocketbudget-cli
//!
//! Presentation layer for the expense tracker: an interactive shell (plus a
//! script mode for automation) driving the session facade from
//! pocketbudget-core.

pub mod commands;
pub mod output;
pub mod shell;
pub mod system_clock;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes the global tracing subscriber with sensible defaults.
pub fn init() {
    INIT_TRACING.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::from_default_env()
            .add_directive("pocketbudget_core=info".parse().unwrap())
            .add_directive("pocketbudget_storage_json=info".parse().unwrap());

        fmt().with_env_filter(filter).init();
        tracing::debug!("pocketbudget tracing initialized.");
    });
}
