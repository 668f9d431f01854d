//! Shared configuration for the vitrine CLI and TUI.
//!
//! Layered with figment: packaged defaults, then the user's TOML file at
//! the platform config dir, then `VITRINE_*` environment variables. Flag
//! overrides are applied by each binary on top of the loaded [`Config`].
//!
//! The admin token is the only secret. It can live in the config file for
//! convenience, but `VITRINE_TOKEN` wins when set, and the value is held as
//! a [`SecretString`] after extraction so it never lands in debug output.

use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_SITE_URL: &str = "https://association.example.org";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_ADVANCE_INTERVAL_MS: u64 = 5_000;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not determine a config directory for this platform")]
    NoConfigDir,

    #[error("failed to read configuration: {0}")]
    Extract(#[from] Box<figment::Error>),

    #[error("invalid site URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// On-disk and in-memory configuration shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Base URL of the association site.
    pub site_url: String,
    /// Admin bearer token; unlocks unpublished events. Prefer the
    /// `VITRINE_TOKEN` environment variable over storing it here.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// HTTP timeout in seconds.
    pub timeout_secs: u64,
    /// Spotlight auto-advance interval in milliseconds.
    pub advance_interval_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            site_url: DEFAULT_SITE_URL.to_owned(),
            token: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            advance_interval_ms: DEFAULT_ADVANCE_INTERVAL_MS,
        }
    }
}

impl Config {
    /// The token as a secret, consuming the plain string copy.
    #[must_use]
    pub fn take_token(&mut self) -> Option<SecretString> {
        self.token.take().map(SecretString::from)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn advance_interval(&self) -> Duration {
        Duration::from_millis(self.advance_interval_ms)
    }

    /// Validates the site URL, returning it parsed.
    pub fn parsed_site_url(&self) -> Result<url::Url, ConfigError> {
        self.site_url
            .parse()
            .map_err(|err: url::ParseError| ConfigError::InvalidUrl {
                url: self.site_url.clone(),
                reason: err.to_string(),
            })
    }
}

/// Platform config file path, e.g. `~/.config/vitrine/config.toml` on Linux.
pub fn config_path() -> Result<PathBuf, ConfigError> {
    let dirs = ProjectDirs::from("org", "vitrine", "vitrine").ok_or(ConfigError::NoConfigDir)?;
    Ok(dirs.config_dir().join("config.toml"))
}

/// Loads configuration from `path` layered under `VITRINE_*` env vars.
/// A missing file is fine; defaults fill the gaps.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let config = Figment::from(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("VITRINE_"))
        .extract()
        .map_err(Box::new)?;
    Ok(config)
}

/// Loads from the default platform location.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path()?)
}

/// Writes `config` as TOML to `path`, creating parent directories.
pub fn save_config(config: &Config, path: &Path) -> Result<(), ConfigError> {
    let body = toml::to_string_pretty(config)?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| ConfigError::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    std::fs::write(path, body).map_err(|source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.site_url, DEFAULT_SITE_URL);
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert!(config.token.is_none());
    }

    #[test]
    fn file_values_override_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "site_url = \"https://assoc.example\"\nadvance_interval_ms = 8000\n",
        )
        .unwrap();
        let config = load_config_from(&path).unwrap();
        assert_eq!(config.site_url, "https://assoc.example");
        assert_eq!(config.advance_interval(), Duration::from_millis(8_000));
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "sight_url = \"typo\"\n").unwrap();
        assert!(load_config_from(&path).is_err());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let config = Config {
            site_url: "https://assoc.example".into(),
            token: None,
            timeout_secs: 10,
            advance_interval_ms: 3_000,
        };
        save_config(&config, &path).unwrap();
        let loaded = load_config_from(&path).unwrap();
        assert_eq!(loaded.site_url, config.site_url);
        assert_eq!(loaded.timeout_secs, 10);
    }

    #[test]
    fn invalid_site_url_is_reported() {
        let config = Config {
            site_url: "not a url".into(),
            ..Config::default()
        };
        assert!(config.parsed_site_url().is_err());
    }
}
