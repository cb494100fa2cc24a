//! Client configuration: API location, sport defaults and credentials.
//!
//! Values come from an optional JSON file under the user's config directory,
//! overridden by `MSF_*` environment variables.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::error::{MsfError, Result};

#[cfg(test)]
mod tests;

pub const DEFAULT_BASE_URL: &str = "https://api.mysportsfeeds.com";
pub const DEFAULT_VERSION: &str = "v2.1";
pub const DEFAULT_SPORT: &str = "nfl";
pub const DEFAULT_FORMAT: &str = "json";

pub const BASE_URL_ENV_VAR: &str = "MSF_BASE_URL";
pub const VERSION_ENV_VAR: &str = "MSF_VERSION";
pub const SPORT_ENV_VAR: &str = "MSF_SPORT";
pub const SEASON_ENV_VAR: &str = "MSF_SEASON";
pub const FORMAT_ENV_VAR: &str = "MSF_FORMAT";
pub const AUTHORIZATION_ENV_VAR: &str = "MSF_AUTHORIZATION";

/// Read-only settings shared by every request a [`crate::Service`] makes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub base_url: String,
    pub version: String,
    pub sport: String,
    /// e.g. `2018-2019-regular`, `current`, `latest`
    pub season: String,
    pub format: String,
    /// Full `Authorization` header value, e.g. `Basic <token>`
    pub authorization: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            version: DEFAULT_VERSION.to_string(),
            sport: DEFAULT_SPORT.to_string(),
            season: String::new(),
            format: DEFAULT_FORMAT.to_string(),
            authorization: String::new(),
        }
    }
}

/// Path: ~/.config/msf-gamelogs/config.json
pub fn config_path() -> PathBuf {
    let base = dirs::config_dir().unwrap_or_else(|| {
        let mut home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.push(".config");
        home
    });
    base.join("msf-gamelogs").join("config.json")
}

impl Config {
    /// Load the config file if it exists, then apply environment overrides.
    pub fn load() -> Result<Self> {
        let path = config_path();
        let config = if path.exists() {
            Self::from_file(&path)?
        } else {
            Self::default()
        };
        Ok(config.with_env_overrides())
    }

    /// Parse a JSON config file. Missing keys keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        serde_json::from_str(&raw).map_err(|e| MsfError::Config {
            message: format!("{}: {}", path.display(), e),
        })
    }

    /// Replace fields with any non-empty `MSF_*` environment variables.
    pub fn with_env_overrides(mut self) -> Self {
        let fields: [(&str, &mut String); 6] = [
            (BASE_URL_ENV_VAR, &mut self.base_url),
            (VERSION_ENV_VAR, &mut self.version),
            (SPORT_ENV_VAR, &mut self.sport),
            (SEASON_ENV_VAR, &mut self.season),
            (FORMAT_ENV_VAR, &mut self.format),
            (AUTHORIZATION_ENV_VAR, &mut self.authorization),
        ];
        for (var, field) in fields {
            if let Ok(value) = std::env::var(var) {
                if !value.is_empty() {
                    *field = value;
                }
            }
        }
        self
    }

    pub fn with_season(mut self, season: impl Into<String>) -> Self {
        self.season = season.into();
        self
    }

    /// Set the credential to HTTP Basic auth built from an API key and password.
    ///
    /// The remote API expects `Basic base64(apikey:password)`; for v2 feeds the
    /// password is the literal string `MYSPORTSFEEDS`.
    pub fn with_api_key(mut self, api_key: &str, password: &str) -> Self {
        let token = STANDARD.encode(format!("{}:{}", api_key, password));
        self.authorization = format!("Basic {}", token);
        self
    }
}
