//! Configuration loading
//!
//! Layers, lowest to highest: built-in defaults, a config file, then
//! `REPO_WORDLIST_*` environment variables. CLI flags are applied last by
//! [`merge_cli_with_config`].

use crate::domain::Config;
use crate::error::{Result, WordlistError};
use figment::providers::{Env, Format, Serialized, Toml, Yaml};
use figment::Figment;
use std::path::{Path, PathBuf};
use tracing::debug;

mod merge;

pub use merge::{merge_cli_with_config, CliOverrides};

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "REPO_WORDLIST_";

/// Keys taken from the environment verbatim; figment would otherwise parse
/// values such as `1.0` or `true` into numbers and booleans.
const STRING_KEYS: &[&str] = &["output", "ref", "user_agent", "api_base_url"];

/// File names probed in the working directory, in order.
pub const CONFIG_FILE_NAMES: &[&str] =
    &["repo-wordlist.toml", ".repo-wordlist.toml", ".repo-wordlist.yml", ".repo-wordlist.yaml"];

/// Load config from `explicit` if given, else the first config file found in `dir`.
pub fn load_config(dir: &Path, explicit: Option<&Path>) -> Result<Config> {
    let mut figment = Figment::from(Serialized::defaults(Config::default()));

    let file = match explicit {
        Some(path) if !path.is_file() => {
            return Err(WordlistError::Config(format!(
                "config file not found: {}",
                path.display()
            )));
        }
        Some(path) => Some(path.to_path_buf()),
        None => discover_config_file(dir),
    };

    if let Some(path) = file {
        debug!(path = %path.display(), "loading config file");
        figment = if is_yaml(&path) {
            figment.merge(Yaml::file(path))
        } else {
            figment.merge(Toml::file(path))
        };
    }

    figment = figment.merge(Env::prefixed(ENV_PREFIX).ignore(STRING_KEYS));
    for key in STRING_KEYS {
        if let Ok(value) = std::env::var(format!("{ENV_PREFIX}{}", key.to_uppercase())) {
            figment = figment.merge(Serialized::default(key, value));
        }
    }

    figment
        .extract()
        .map_err(|e| WordlistError::Config(e.to_string()))
}

fn discover_config_file(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES.iter().map(|name| dir.join(name)).find(|path| path.is_file())
}

fn is_yaml(path: &Path) -> bool {
    matches!(path.extension().and_then(|e| e.to_str()), Some("yml" | "yaml"))
}
