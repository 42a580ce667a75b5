//! Config file creation command.

use std::path::{Path, PathBuf};

use crate::config::{self, Config, ConfigError};
use crate::error::{Error, Result};

/// Write the effective configuration to disk
pub fn cmd_init_config(config: &Config, path: Option<&Path>, force: bool) -> anyhow::Result<()> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => default_path()?,
    };

    if init_config(config, &path, force)? {
        println!("Wrote config to {}", path.display());
    } else {
        println!("Config already exists at {} (use --force to overwrite)", path.display());
    }
    Ok(())
}

fn default_path() -> Result<PathBuf> {
    config::config_path().ok_or(Error::Config(ConfigError::NoConfigDir))
}

/// Save `config` at `path`. Returns `false` when the file exists and `force` is off.
fn init_config(config: &Config, path: &Path, force: bool) -> Result<bool> {
    if path.exists() && !force {
        tracing::info!("Leaving existing config at {:?}", path);
        return Ok(false);
    }
    config::save_to(config, path)?;
    Ok(true)
}
