//! Error types for the bootstrap sequence.
//!
//! Every error here is fatal: the launcher never retries. `LauncherError`
//! carries the exit code the process terminates with.

use std::path::PathBuf;
use std::process::ExitCode;

use thiserror::Error;

use crate::config::validation::ValidationError;

/// Configuration could not be resolved or is semantically invalid.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid value {value:?} for {name}: {reason}")]
    InvalidValue {
        name: &'static str,
        value: String,
        reason: String,
    },

    #[error("validation failed: {}", join(.0))]
    Validation(Vec<ValidationError>),
}

fn join(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// The data directory could not be made available.
#[derive(Debug, Error)]
pub enum StorageProvisioningError {
    #[error("cannot create data directory {path}: {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("data directory path {path} exists but is not a directory")]
    NotADirectory { path: PathBuf },

    #[error("data directory {path} is read-only")]
    ReadOnly { path: PathBuf },
}

/// The application server could not be started.
#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("server binary {program:?} not found")]
    NotFound {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("permission denied executing {program:?}")]
    PermissionDenied {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to start {program:?}: {source}")]
    Io {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to wait for {program:?}: {source}")]
    Wait {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

impl LaunchError {
    /// Classify an OS error raised while starting `program`.
    pub fn from_io(program: &str, source: std::io::Error) -> Self {
        let program = program.to_string();
        match source.kind() {
            std::io::ErrorKind::NotFound => LaunchError::NotFound { program, source },
            std::io::ErrorKind::PermissionDenied => {
                LaunchError::PermissionDenied { program, source }
            }
            _ => LaunchError::Io { program, source },
        }
    }
}

/// Any failure that aborts the bootstrap.
#[derive(Debug, Error)]
pub enum LauncherError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Storage(#[from] StorageProvisioningError),

    #[error(transparent)]
    Launch(#[from] LaunchError),
}

impl LauncherError {
    /// Process exit status for this failure (sysexits-style where one fits).
    pub fn exit_code(&self) -> u8 {
        match self {
            LauncherError::Config(_) => 78,
            LauncherError::Storage(_) => 73,
            LauncherError::Launch(LaunchError::NotFound { .. }) => 127,
            LauncherError::Launch(LaunchError::PermissionDenied { .. }) => 126,
            LauncherError::Launch(_) => 1,
        }
    }
}

impl From<&LauncherError> for ExitCode {
    fn from(err: &LauncherError) -> Self {
        ExitCode::from(err.exit_code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_launch_error_classification() {
        let err = LaunchError::from_io("streamlit", Error::from(ErrorKind::NotFound));
        assert!(matches!(err, LaunchError::NotFound { .. }));

        let err = LaunchError::from_io("streamlit", Error::from(ErrorKind::PermissionDenied));
        assert!(matches!(err, LaunchError::PermissionDenied { .. }));

        let err = LaunchError::from_io("streamlit", Error::from(ErrorKind::Other));
        assert!(matches!(err, LaunchError::Io { .. }));
    }

    #[test]
    fn test_exit_codes() {
        let storage: LauncherError = StorageProvisioningError::ReadOnly {
            path: PathBuf::from("/app/data"),
        }
        .into();
        assert_eq!(storage.exit_code(), 73);

        let missing: LauncherError =
            LaunchError::from_io("nope", Error::from(ErrorKind::NotFound)).into();
        assert_eq!(missing.exit_code(), 127);

        let config: LauncherError = ConfigError::Validation(vec![]).into();
        assert_eq!(config.exit_code(), 78);
    }

    #[test]
    fn test_validation_message_lists_all() {
        let err = ConfigError::Validation(vec![
            ValidationError::ZeroPort,
            ValidationError::EmptyDataDir,
        ]);
        let msg = err.to_string();
        assert!(msg.contains("port"));
        assert!(msg.contains("data directory"));
    }
}
