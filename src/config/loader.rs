//! Configuration resolution from the environment and an optional TOML file.
//!
//! Precedence, lowest to highest: built-in defaults, the file named by
//! `LAUNCHER_CONFIG`, individual environment variables. A variable that is
//! unset or empty counts as absent. Paths are taken as raw OS strings; every
//! other variable must be valid unicode.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::{HandoffMode, LauncherConfig};
use crate::config::validation::validate_config;
use crate::error::ConfigError;

/// Data directory for persisted application data.
pub const DATA_DIR_VAR: &str = "DATA_DIR";
/// TCP port the server binds to.
pub const PORT_VAR: &str = "PORT";
/// Server program name or path.
pub const SERVER_BIN_VAR: &str = "LAUNCHER_SERVER_BIN";
/// Entry script handed to the server.
pub const APP_VAR: &str = "LAUNCHER_APP";
/// `exec` or `spawn`.
pub const HANDOFF_VAR: &str = "LAUNCHER_HANDOFF";
/// Optional TOML file with base values.
pub const CONFIG_FILE_VAR: &str = "LAUNCHER_CONFIG";

impl LauncherConfig {
    /// Resolve configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        load_config(|name| std::env::var_os(name))
    }

    /// Resolve configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<OsString>,
    {
        load_config(lookup)
    }
}

/// Resolve and validate configuration using `lookup` for variable access.
pub fn load_config<F>(lookup: F) -> Result<LauncherConfig, ConfigError>
where
    F: Fn(&str) -> Option<OsString>,
{
    let base = match var_os(&lookup, CONFIG_FILE_VAR) {
        Some(path) => load_file(Path::new(&path))?,
        None => LauncherConfig::default(),
    };

    let config = apply_overrides(base, &lookup)?;
    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Load base values from a TOML file. Fields the file omits keep their defaults.
pub fn load_file(path: &Path) -> Result<LauncherConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn apply_overrides<F>(mut config: LauncherConfig, lookup: &F) -> Result<LauncherConfig, ConfigError>
where
    F: Fn(&str) -> Option<OsString>,
{
    if let Some(dir) = var_os(lookup, DATA_DIR_VAR) {
        config.data_dir = PathBuf::from(dir);
    }

    if let Some(port) = var(lookup, PORT_VAR)? {
        config.port = port
            .trim()
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidValue {
                name: PORT_VAR,
                value: port.clone(),
                reason: e.to_string(),
            })?;
    }

    if let Some(program) = var(lookup, SERVER_BIN_VAR)? {
        config.server.program = program;
    }

    if let Some(app) = var(lookup, APP_VAR)? {
        config.server.app = app;
    }

    if let Some(mode) = var(lookup, HANDOFF_VAR)? {
        config.handoff = mode
            .parse::<HandoffMode>()
            .map_err(|reason| ConfigError::InvalidValue {
                name: HANDOFF_VAR,
                value: mode.clone(),
                reason,
            })?;
    }

    Ok(config)
}

fn var_os<F>(lookup: &F, name: &str) -> Option<OsString>
where
    F: Fn(&str) -> Option<OsString>,
{
    lookup(name).filter(|value| value.to_str().map_or(true, |s| !s.trim().is_empty()))
}

fn var<F>(lookup: &F, name: &'static str) -> Result<Option<String>, ConfigError>
where
    F: Fn(&str) -> Option<OsString>,
{
    var_os(lookup, name)
        .map(|value| {
            value.into_string().map_err(|raw| ConfigError::InvalidValue {
                name,
                value: raw.to_string_lossy().into_owned(),
                reason: "not valid unicode".to_string(),
            })
        })
        .transpose()
}
