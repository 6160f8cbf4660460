//! Startup orchestration.
//!
//! # Responsibilities
//! - Resolve configuration
//! - Provision the data directory
//! - Hand off to the application server
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal, nothing is retried
//! - Steps run strictly in order; launch is never attempted after a failed step
//! - `Configuring → Launched` or `Configuring → Failed`, never back

use std::fmt;

use crate::config::{LauncherConfig, BIND_ADDRESS};
use crate::error::LauncherError;
use crate::launch::{handoff_for, Handoff, ServerCommand};
use crate::storage::provision;

/// Where the bootstrap sequence ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchState {
    Configuring,
    Launched,
    Failed,
}

impl fmt::Display for LaunchState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LaunchState::Configuring => f.write_str("configuring"),
            LaunchState::Launched => f.write_str("launched"),
            LaunchState::Failed => f.write_str("failed"),
        }
    }
}

/// Resolve configuration from the process environment and launch.
pub fn bootstrap() -> Result<u8, LauncherError> {
    tracing::debug!(state = %LaunchState::Configuring, "Resolving configuration");
    let config = LauncherConfig::from_env()?;
    let handoff = handoff_for(config.handoff);
    launch(&config, handoff.as_ref())
}

/// Provision storage for `config`, then hand off.
///
/// With an exec handoff this only returns on failure.
pub fn launch(config: &LauncherConfig, handoff: &dyn Handoff) -> Result<u8, LauncherError> {
    tracing::info!(
        data_dir = %config.data_dir.display(),
        port = config.port,
        program = %config.server.program,
        handoff = %config.handoff,
        "Configuration loaded"
    );

    let outcome = provision(&config.data_dir)?;
    tracing::info!(data_dir = %config.data_dir.display(), ?outcome, "Data directory provisioned");

    let command = ServerCommand::from_config(config);
    tracing::info!(
        handoff = %config.handoff,
        program = %command.program,
        args = ?command.args,
        address = %format!("{}:{}", BIND_ADDRESS, config.port),
        "Handing off to server"
    );

    Ok(handoff.hand_off(&command)?)
}
