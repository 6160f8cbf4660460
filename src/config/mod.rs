//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! LAUNCHER_CONFIG (optional TOML)
//!     → loader.rs (base values)
//! DATA_DIR, PORT, LAUNCHER_* env vars
//!     → loader.rs (overrides; empty == unset)
//!     → validation.rs (semantic checks)
//!     → LauncherConfig (validated, immutable)
//! ```
//!
//! # Design Decisions
//! - Resolved exactly once, before any side effect
//! - All fields have defaults so an empty environment is a valid config
//! - Lookup is injected so resolution is testable without touching the process env

pub mod loader;
pub mod schema;
pub mod validation;

pub use schema::{HandoffMode, LauncherConfig, ServerConfig};
pub use schema::{BIND_ADDRESS, DEFAULT_DATA_DIR, DEFAULT_PORT};
