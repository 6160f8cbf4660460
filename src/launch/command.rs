//! Server command construction.

use std::ffi::OsString;
use std::path::PathBuf;

use crate::config::loader::DATA_DIR_VAR;
use crate::config::{LauncherConfig, BIND_ADDRESS};

/// Fully resolved invocation of the application server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerCommand {
    /// Program name or path.
    pub program: String,
    /// Arguments, excluding the program itself.
    pub args: Vec<String>,
    /// Data directory exported to the child as `DATA_DIR`.
    pub data_dir: PathBuf,
}

impl ServerCommand {
    /// Build `<program> run <app> --server.port <port> --server.address 0.0.0.0`.
    pub fn from_config(config: &LauncherConfig) -> Self {
        let mut args = Vec::with_capacity(6);
        if !config.server.app.trim().is_empty() {
            args.push("run".to_string());
            args.push(config.server.app.clone());
        }
        args.push("--server.port".to_string());
        args.push(config.port.to_string());
        args.push("--server.address".to_string());
        args.push(BIND_ADDRESS.to_string());

        Self {
            program: config.server.program.clone(),
            args,
            data_dir: config.data_dir.clone(),
        }
    }

    /// Environment entries added on top of the inherited environment.
    pub fn env(&self) -> Vec<(&'static str, OsString)> {
        vec![(DATA_DIR_VAR, self.data_dir.clone().into_os_string())]
    }

    /// Blocking `std` command, used for exec.
    pub fn to_command(&self) -> std::process::Command {
        let mut command = std::process::Command::new(&self.program);
        command.args(&self.args).envs(self.env());
        command
    }

    /// Async command, used by the spawn handoff.
    pub fn to_tokio_command(&self) -> tokio::process::Command {
        tokio::process::Command::from(self.to_command())
    }
}
