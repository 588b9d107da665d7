//! Optional TOML configuration: `abacus/config.toml` under the platform
//! config directory. Command-line flags win over config values, config
//! values over built-in defaults.

use std::fs;
use std::path::PathBuf;

use serde::Deserialize;

#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Default host name when `--host` is not given.
    pub host: Option<String>,
    /// Memory floor, in words.
    pub mem_min_words: Option<u32>,
    /// Memory ceiling, in words.
    pub mem_max_words: Option<u32>,
}

/// Load the config file if one exists. A malformed file is reported and
/// ignored rather than aborting the run.
pub fn load() -> Config {
    let Some(path) = config_path() else {
        return Config::default();
    };
    let Ok(text) = fs::read_to_string(&path) else {
        return Config::default();
    };
    match toml::from_str(&text) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: ignoring malformed config {}: {e}", path.display());
            Config::default()
        }
    }
}

fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("abacus").join("config.toml"))
}
