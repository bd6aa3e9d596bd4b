// Startup configuration: the API access key comes from the process
// environment, optionally seeded from an env file. Read once, read-only
// afterwards.

use crate::error::ConfigError;
use log::{debug, info, warn};
use std::path::{Path, PathBuf};

pub const DEFAULT_API_URL: &str = "https://openexchangerates.org/api/latest.json";

/// Environment variable holding the API access key.
pub const KEY_VAR: &str = "KEY";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    api_key: String,
    api_url: String,
}

impl Config {
    pub fn new(api_key: impl Into<String>, api_url: impl Into<String>) -> Self {
        Config {
            api_key: api_key.into(),
            api_url: api_url.into(),
        }
    }

    /// Load the env file (missing file is only logged), then read `KEY`.
    pub fn load(env_file: Option<&Path>, api_url: &str) -> Result<Self, ConfigError> {
        load_env_file(env_file);
        Self::from_env(api_url)
    }

    /// Read `KEY` from the process environment. Blank counts as unset.
    pub fn from_env(api_url: &str) -> Result<Self, ConfigError> {
        let api_key = std::env::var(KEY_VAR)
            .ok()
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .ok_or(ConfigError::MissingKey)?;
        debug!("using rates endpoint {}", api_url);
        Ok(Config::new(api_key, api_url))
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Fully-formed request URL: endpoint plus `app_id`.
    pub fn rates_url(&self) -> String {
        format!("{}?app_id={}", self.api_url, self.api_key)
    }
}

/// Per-user env file, e.g. `~/.config/fxconv/.env` on Linux.
pub fn user_env_file() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("fxconv").join(".env"))
}

/// Load variables from `explicit`, or else from the nearest `.env` up the
/// directory tree, or else from `user_env_file()`. Variables already set
/// in the process environment are kept. Returns the file that was loaded.
pub fn load_env_file(explicit: Option<&Path>) -> Option<PathBuf> {
    let loaded = match explicit {
        Some(path) => dotenvy::from_path(path).map(|_| path.to_path_buf()),
        None => dotenvy::dotenv().or_else(|err| match user_env_file() {
            Some(path) if path.is_file() => dotenvy::from_path(&path).map(|_| path),
            _ => Err(err),
        }),
    };

    match loaded {
        Ok(path) => {
            info!("loaded env file {}", path.display());
            Some(path)
        }
        Err(err) => {
            warn!("{}", env_file_problem(&err));
            None
        }
    }
}

/// Log wording for a failed env file load. Only a missing file is reported
/// as missing; a file that exists but cannot be read or parsed says so.
fn env_file_problem(err: &dotenvy::Error) -> String {
    match err {
        dotenvy::Error::Io(io) if io.kind() == std::io::ErrorKind::NotFound => {
            "env file does not exist".to_string()
        }
        dotenvy::Error::LineParse(line, index) => {
            format!("env file could not be parsed at index {}: {}", index, line)
        }
        other => format!("env file could not be loaded ({})", other),
    }
}
