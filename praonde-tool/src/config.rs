use std::path::{Path, PathBuf};

use praonde_core::{DEFAULT_SUPER_LIKES, Filter};
use serde::Deserialize;

use crate::error::AppError;

#[derive(Debug, Deserialize, Default, PartialEq)]
pub struct Config {
    pub super_likes: Option<u32>,
    pub default_filter: Option<String>,
    pub seed: Option<PathBuf>,
    pub log_level: Option<String>,
    pub log_file: Option<PathBuf>,
}

/// Session settings after CLI flags, config file and defaults are merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub super_likes: u32,
    pub filter: Filter,
    pub seed: Option<PathBuf>,
}

fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("praonde").join("config.toml"))
}

/// Load the config file.
///
/// An explicit `path` must exist and parse. The default location is
/// optional and any problem with it falls back to defaults.
pub fn load_config(path: Option<&Path>) -> Result<Config, AppError> {
    if let Some(path) = path {
        let content = std::fs::read_to_string(path)?;
        return Ok(toml::from_str(&content)?);
    }

    let Some(path) = config_path() else {
        return Ok(Config::default());
    };

    let Ok(content) = std::fs::read_to_string(path) else {
        return Ok(Config::default());
    };

    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn resolve_settings(
    config: &Config,
    cli_filter: Option<Filter>,
    cli_super_likes: Option<u32>,
    cli_seed: Option<PathBuf>,
) -> Result<Settings, AppError> {
    let filter = match (cli_filter, config.default_filter.as_deref()) {
        (Some(filter), _) => filter,
        (None, Some(label)) => label.parse()?,
        (None, None) => Filter::All,
    };

    let super_likes = cli_super_likes
        .or(config.super_likes)
        .unwrap_or(DEFAULT_SUPER_LIKES);

    let seed = cli_seed.or_else(|| config.seed.clone());

    Ok(Settings {
        super_likes,
        filter,
        seed,
    })
}

pub fn default_log_file() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("praonde")
        .join("pov.log")
}
