//! Bootstrap launcher library.
//!
//! Resolves configuration from the environment, provisions the data
//! directory, then hands the process over to the application server.

pub mod config;
pub mod error;
pub mod launch;
pub mod lifecycle;
pub mod observability;
pub mod storage;

pub use config::LauncherConfig;
pub use error::{ConfigError, LaunchError, LauncherError, StorageProvisioningError};
pub use launch::{ExecHandoff, Handoff, ServerCommand, SpawnHandoff};
pub use lifecycle::bootstrap;
