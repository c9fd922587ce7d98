//! Settings configuration types

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::auth::DEFAULT_ITERATIONS;

/// Where records live
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageSettings {
    /// Directory holding one `<username>.json` per user.
    /// Relative paths resolve against the working directory.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

/// Credential handling
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecuritySettings {
    /// PBKDF2 rounds for newly stored passwords.
    /// Existing credentials keep the count they were hashed with.
    #[serde(default = "default_password_iterations")]
    pub password_iterations: u32,
}

/// Listing options
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplaySettings {
    /// Number of latest results shown on the profile
    #[serde(default = "default_recent_results")]
    pub recent_results: usize,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("user_data")
}

fn default_password_iterations() -> u32 {
    DEFAULT_ITERATIONS
}

fn default_recent_results() -> usize {
    5
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

impl Default for SecuritySettings {
    fn default() -> Self {
        Self {
            password_iterations: default_password_iterations(),
        }
    }
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            recent_results: default_recent_results(),
        }
    }
}
