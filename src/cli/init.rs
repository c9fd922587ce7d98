//! Init command implementation

use anyhow::Result;
use std::path::PathBuf;

use sporta::config::{Config, LOCAL_CONFIG_FILE};

/// Write the default configuration.
/// Creates ./sporta.toml unless a path is given with --config.
pub fn init_command(config_path: Option<PathBuf>, force: bool) -> Result<()> {
    let config_path = config_path.unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE));

    Config::write_default(&config_path, force)?;
    println!("Created: {}", config_path.display());

    Ok(())
}
