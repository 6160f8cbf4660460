//! Configuration schema definitions.
//!
//! `LauncherConfig` is resolved once at startup and never mutated after
//! validation. All types derive `Deserialize` so an optional TOML file can
//! supply base values.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::Deserialize;

/// Data directory used when `DATA_DIR` is unset or empty.
pub const DEFAULT_DATA_DIR: &str = "/app/data";

/// Port used when `PORT` is unset or empty.
pub const DEFAULT_PORT: u16 = 8501;

/// The server always binds to all interfaces.
pub const BIND_ADDRESS: &str = "0.0.0.0";

/// Root configuration for the launcher.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LauncherConfig {
    /// Directory for persisted application data.
    pub data_dir: PathBuf,

    /// TCP port the server binds to.
    pub port: u16,

    /// Which server to hand off to.
    pub server: ServerConfig,

    /// How control is transferred to the server.
    pub handoff: HandoffMode,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            port: DEFAULT_PORT,
            server: ServerConfig::default(),
            handoff: HandoffMode::default(),
        }
    }
}

/// The wrapped application server.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Program name or path, resolved against `PATH` at handoff.
    pub program: String,

    /// Entry script passed as `run <app>`. Empty means no `run` subcommand.
    pub app: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            program: "streamlit".to_string(),
            app: "app.py".to_string(),
        }
    }
}

/// Handoff strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HandoffMode {
    /// Replace the launcher process with the server (Unix only).
    Exec,
    /// Spawn the server, wait for it and forward its exit code.
    Spawn,
}

impl Default for HandoffMode {
    fn default() -> Self {
        if cfg!(unix) {
            HandoffMode::Exec
        } else {
            HandoffMode::Spawn
        }
    }
}

impl FromStr for HandoffMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "exec" => Ok(HandoffMode::Exec),
            "spawn" => Ok(HandoffMode::Spawn),
            other => Err(format!("expected \"exec\" or \"spawn\", got {other:?}")),
        }
    }
}

impl fmt::Display for HandoffMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HandoffMode::Exec => f.write_str("exec"),
            HandoffMode::Spawn => f.write_str("spawn"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LauncherConfig::default();
        assert_eq!(config.data_dir, PathBuf::from("/app/data"));
        assert_eq!(config.port, 8501);
        assert_eq!(config.server.program, "streamlit");
        assert_eq!(config.server.app, "app.py");
    }

    #[test]
    fn test_handoff_mode_parse() {
        assert_eq!("exec".parse::<HandoffMode>(), Ok(HandoffMode::Exec));
        assert_eq!(" Spawn ".parse::<HandoffMode>(), Ok(HandoffMode::Spawn));
        assert!("fork".parse::<HandoffMode>().is_err());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: LauncherConfig = toml::from_str("port = 9000\n[server]\napp = \"main.py\"\n").unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.data_dir, PathBuf::from(DEFAULT_DATA_DIR));
        assert_eq!(config.server.program, "streamlit");
        assert_eq!(config.server.app, "main.py");
    }
}
