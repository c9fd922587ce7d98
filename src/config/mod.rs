//! Configuration loading and management

mod io;
mod settings;

pub use io::{DEFAULT_CONFIG, LOCAL_CONFIG_FILE};
pub use settings::{DisplaySettings, SecuritySettings, StorageSettings};

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::auth::PasswordHasher;
use crate::session::SessionStore;
use crate::store::UserStore;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Record storage
    #[serde(default)]
    pub storage: StorageSettings,

    /// Password hashing
    #[serde(default)]
    pub security: SecuritySettings,

    /// Listings
    #[serde(default)]
    pub display: DisplaySettings,
}

impl Config {
    /// Replace the data directory (e.g. from `--data-dir`)
    pub fn with_data_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.storage.data_dir = dir.as_ref().to_path_buf();
        self
    }

    /// Record store for the configured data directory
    pub fn user_store(&self) -> UserStore {
        UserStore::new(&self.storage.data_dir)
    }

    /// Session slot inside the configured data directory
    pub fn session_store(&self) -> SessionStore {
        SessionStore::in_dir(&self.storage.data_dir)
    }

    /// Hasher for newly stored passwords
    pub fn password_hasher(&self) -> PasswordHasher {
        PasswordHasher::new(self.security.password_iterations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.storage.data_dir, Path::new("user_data"));
        assert_eq!(config.security.password_iterations, 100_000);
        assert_eq!(config.display.recent_results, 5);
    }

    #[test]
    fn test_partial_toml_keeps_other_defaults() {
        let config: Config = toml::from_str(
            r#"
            [storage]
            data_dir = "/var/lib/sporta"

            [display]
            recent_results = 10
            "#,
        )
        .unwrap();

        assert_eq!(config.storage.data_dir, Path::new("/var/lib/sporta"));
        assert_eq!(config.display.recent_results, 10);
        assert_eq!(config.security.password_iterations, 100_000);
    }

    #[test]
    fn test_default_config_template_parses() {
        let config: Config = toml::from_str(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.storage.data_dir, Path::new("user_data"));
        assert_eq!(config.display.recent_results, 5);
    }

    #[test]
    fn test_with_data_dir_points_stores_there() {
        let config = Config::default().with_data_dir("/tmp/elsewhere");
        assert_eq!(config.user_store().root(), Path::new("/tmp/elsewhere"));
        assert_eq!(
            config.session_store().path(),
            Path::new("/tmp/elsewhere/.session.json")
        );
    }
}
