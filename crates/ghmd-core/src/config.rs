// SPDX-License-Identifier: Apache-2.0

//! Configuration management for gh-md.
//!
//! Provides layered configuration from files and environment variables.
//! Uses XDG-compliant paths with environment variable support.
//!
//! # Configuration Sources (in priority order)
//!
//! 1. Environment variables (prefix: `GHMD_`)
//! 2. Config file: `~/.config/gh-md/config.toml`
//! 3. Built-in defaults
//!
//! # Examples
//!
//! ```bash
//! # Shorten the GitHub request deadline
//! GHMD_GITHUB__API_TIMEOUT_SECONDS=5 gh md title cli/cli#123
//! ```

use std::path::PathBuf;
use std::time::Duration;

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::GhmdError;

/// Directory name used under the config and cache roots.
pub const APP_DIR_NAME: &str = "gh-md";

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// GitHub API settings.
    pub github: GitHubConfig,
    /// Response cache settings.
    pub cache: CacheConfig,
}

/// GitHub API settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct GitHubConfig {
    /// Overall deadline for one GraphQL request, in seconds.
    pub api_timeout_seconds: u64,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            api_timeout_seconds: 10,
        }
    }
}

impl GitHubConfig {
    /// The request deadline as a `Duration`.
    #[must_use]
    pub fn api_timeout(&self) -> Duration {
        Duration::from_secs(self.api_timeout_seconds)
    }
}

/// Response cache settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Cache successful GraphQL responses on disk.
    pub enabled: bool,
    /// Cached response TTL in minutes.
    pub ttl_minutes: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            ttl_minutes: 24 * 60,
        }
    }
}

/// Returns the gh-md configuration directory.
///
/// Respects the `XDG_CONFIG_HOME` environment variable if set,
/// otherwise defaults to `~/.config/gh-md`.
#[must_use]
pub fn config_dir() -> PathBuf {
    if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME")
        && !xdg_config.is_empty()
    {
        return PathBuf::from(xdg_config).join(APP_DIR_NAME);
    }
    dirs::home_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(".config")
        .join(APP_DIR_NAME)
}

/// Returns the path to the configuration file.
#[must_use]
pub fn config_file_path() -> PathBuf {
    config_dir().join("config.toml")
}

/// Load application configuration.
///
/// Loads from config file (if exists) and environment variables.
/// Environment variables use the prefix `GHMD_` and double underscore
/// for nested keys (e.g., `GHMD_CACHE__ENABLED`).
///
/// # Errors
///
/// Returns `GhmdError::Config` if the config file exists but is invalid.
pub fn load_config() -> Result<AppConfig, GhmdError> {
    let config_path = config_file_path();

    let config = Config::builder()
        .add_source(File::with_name(config_path.to_string_lossy().as_ref()).required(false))
        .add_source(
            Environment::with_prefix("GHMD")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let app_config: AppConfig = config.try_deserialize()?;

    Ok(app_config)
}
