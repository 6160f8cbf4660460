//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde and the env loader handle syntax)
//! - Reject values the server could never start with
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: LauncherConfig → Result<(), Vec<ValidationError>>
//! - Runs before any filesystem mutation

use thiserror::Error;

use crate::config::schema::LauncherConfig;

/// A single semantic problem with the resolved configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("port must be nonzero")]
    ZeroPort,

    #[error("data directory path is empty")]
    EmptyDataDir,

    #[error("server program is empty")]
    EmptyProgram,
}

/// Check a resolved configuration.
pub fn validate_config(config: &LauncherConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.port == 0 {
        errors.push(ValidationError::ZeroPort);
    }
    if config.data_dir.as_os_str().is_empty() {
        errors.push(ValidationError::EmptyDataDir);
    }
    if config.server.program.trim().is_empty() {
        errors.push(ValidationError::EmptyProgram);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
