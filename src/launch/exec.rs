//! Exec-style handoff.
//!
//! On Unix the launcher's process image is replaced by the server, so the
//! server inherits the PID, open descriptors and signal disposition. Where
//! exec does not exist, this falls back to the spawn handoff.

use crate::error::LaunchError;
use crate::launch::command::ServerCommand;

/// Transfers control to the application server.
///
/// Returns the exit code the launcher should terminate with. An exec
/// implementation only ever returns on failure.
pub trait Handoff {
    fn hand_off(&self, command: &ServerCommand) -> Result<u8, LaunchError>;
}

/// Replace the current process with the server.
#[derive(Debug, Default, Clone, Copy)]
pub struct ExecHandoff;

impl Handoff for ExecHandoff {
    #[cfg(unix)]
    fn hand_off(&self, command: &ServerCommand) -> Result<u8, LaunchError> {
        use std::os::unix::process::CommandExt;

        let err = command.to_command().exec();
        Err(LaunchError::from_io(&command.program, err))
    }

    #[cfg(not(unix))]
    fn hand_off(&self, command: &ServerCommand) -> Result<u8, LaunchError> {
        tracing::debug!("exec unavailable on this platform, spawning instead");
        crate::launch::spawn::SpawnHandoff.hand_off(command)
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_missing_binary_returns() {
        let command = ServerCommand {
            program: "definitely-not-a-real-server-binary".into(),
            args: vec!["--server.port".into(), "8501".into()],
            data_dir: PathBuf::from("/tmp"),
        };

        let err = ExecHandoff.hand_off(&command).unwrap_err();
        assert!(matches!(err, LaunchError::NotFound { .. }));
    }

    #[test]
    fn test_non_executable_file() {
        let dir = tempfile::tempdir().unwrap();
        let script = dir.path().join("server");
        std::fs::write(&script, b"#!/bin/sh\nexit 0\n").unwrap();

        let command = ServerCommand {
            program: script.to_string_lossy().into_owned(),
            args: vec![],
            data_dir: dir.path().to_path_buf(),
        };

        let err = ExecHandoff.hand_off(&command).unwrap_err();
        assert!(matches!(err, LaunchError::PermissionDenied { .. }));
    }
}
