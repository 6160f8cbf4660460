//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber for the launcher's own events
//!
//! # Design Decisions
//! - Uses tracing crate for structured logging
//! - Writes to stderr so the server owns stdout
//! - Log level configurable via `RUST_LOG`

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "bootstrap_launcher=info";

/// Install the global subscriber. Called once, from `main`.
pub fn init() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
