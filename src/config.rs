//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/rcontacts/rcontacts.toml`
//! 3. Explicit config file passed with `--config`
//! 4. Environment variables: `RCONTACTS_*` prefix
//!
//! The `--db` flag is applied on top by the CLI.

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;

/// Default location of the contacts file, relative to the working directory.
pub const DEFAULT_DB_PATH: &str = "db/contacts.json";

/// Unified configuration for rcontacts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Contacts JSON file (default: db/contacts.json)
    pub db_path: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DB_PATH),
        }
    }
}

/// Raw settings for intermediate parsing (`None` → not specified, inherit).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub db_path: Option<PathBuf>,
}

/// Get the XDG config directory for rcontacts.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "rcontacts").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("rcontacts.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

/// Expand `~`, `$VAR` and `${VAR}`; unknown variables leave the input as is.
fn expand_path(path: &Path) -> PathBuf {
    let raw = path.to_string_lossy();
    match shellexpand::full(raw.as_ref()) {
        Ok(expanded) => PathBuf::from(expanded.into_owned()),
        Err(_) => path.to_path_buf(),
    }
}

impl Settings {
    /// Overlay wins if it specifies a value.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            db_path: overlay
                .db_path
                .clone()
                .unwrap_or_else(|| self.db_path.clone()),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `config_file` - Optional explicit config file; it must exist
    pub fn load(config_file: Option<&Path>) -> Result<Self, ApplicationError> {
        // 1. Start with defaults
        let mut current = Self::default();

        // 2. Global config, if present
        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                let raw = load_raw_settings(&global_path)?;
                current = current.merge_with(&raw);
            }
        }

        // 3. Explicit config file
        if let Some(path) = config_file {
            let raw = load_raw_settings(path)?;
            current = current.merge_with(&raw);
        }

        // 4. Environment variables (explicit override)
        current = Self::apply_env_overrides(current)?;

        current.db_path = expand_path(&current.db_path);

        Ok(current)
    }

    /// Apply RCONTACTS_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(Environment::with_prefix("RCONTACTS").prefix_separator("_"))
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("db_path") {
            settings.db_path = PathBuf::from(val);
        }

        Ok(settings)
    }

    /// Replace the database path (from the `--db` flag).
    pub fn with_db_path(mut self, db_path: impl AsRef<Path>) -> Self {
        self.db_path = expand_path(db_path.as_ref());
        self
    }
}
