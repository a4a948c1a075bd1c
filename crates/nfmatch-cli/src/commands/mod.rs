//! CLI subcommands.

pub mod config;
pub mod run;
pub mod search;
pub mod validate;

use std::path::{Path, PathBuf};

use nfmatch_core::MatchConfig;

/// Default config file location.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("nfmatch")
        .join("config.json")
}

/// Load the config from an explicit path, the default location, or defaults.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<MatchConfig> {
    if let Some(path) = config_path {
        return Ok(MatchConfig::from_file(Path::new(path))?);
    }
    let default = default_config_path();
    if default.exists() {
        return Ok(MatchConfig::from_file(&default)?);
    }
    Ok(MatchConfig::default())
}
