//! Configuration file I/O operations

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

use super::Config;
use crate::persist;

/// Config file looked up in the working directory
pub const LOCAL_CONFIG_FILE: &str = "sporta.toml";

/// Default configuration content written by `sporta init`
pub const DEFAULT_CONFIG: &str = r#"# Sporta Configuration
# ====================

# ============================================================================
# STORAGE
# ============================================================================
#
#   data_dir - Directory with one <username>.json record per user.
#              Relative paths resolve against the working directory.

[storage]
data_dir = "user_data"

# ============================================================================
# SECURITY
# ============================================================================
#
#   password_iterations - PBKDF2-SHA256 rounds for newly stored passwords.
#                         Existing passwords keep the rounds they were hashed with.

[security]
password_iterations = 100000

# ============================================================================
# DISPLAY
# ============================================================================
#
#   recent_results - Number of latest results shown on the profile

[display]
recent_results = 5
"#;

impl Config {
    /// Get the global config directory path (~/.sporta/)
    pub fn global_config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".sporta")
    }

    /// Get the global config file path (~/.sporta/config.toml)
    pub fn global_config_path() -> PathBuf {
        Self::global_config_dir().join("config.toml")
    }

    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Resolve and load the configuration.
    ///
    /// An explicit path must exist. Otherwise `./sporta.toml` is preferred,
    /// then `~/.sporta/config.toml`, then built-in defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.exists() {
                bail!("Config file not found: {}", path.display());
            }
            return Self::from_file(path);
        }

        let local = PathBuf::from(LOCAL_CONFIG_FILE);
        if local.is_file() {
            tracing::debug!(path = %local.display(), "Using local config");
            return Self::from_file(&local);
        }

        let global = Self::global_config_path();
        if global.is_file() {
            tracing::debug!(path = %global.display(), "Using global config");
            return Self::from_file(&global);
        }

        tracing::debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Write the commented default configuration to `path`.
    ///
    /// Refuses to overwrite an existing file unless `force` is set.
    pub fn write_default(path: &Path, force: bool) -> Result<()> {
        if path.exists() && !force {
            bail!(
                "Config file already exists: {}. Use --force to overwrite.",
                path.display()
            );
        }
        persist::write_locked(path, DEFAULT_CONFIG.as_bytes())
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;
        Ok(())
    }
}
