//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults (nothing set; base url falls back to the public API)
//! 2. Global config: `$XDG_CONFIG_HOME/vercelctl/config.toml`
//! 3. Environment variables: `VERCELCTL_*` prefix
//!
//! Only the file layer is ever written, and only by `config set` / `config clear`.

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::ApplicationError;

/// Base URL used when none is configured.
pub const DEFAULT_BASE_URL: &str = "https://api.vercel.com";

/// Named settings the request pipeline reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    ApiKey,
    TeamId,
    BaseUrl,
}

impl ConfigKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigKey::ApiKey => "apiKey",
            ConfigKey::TeamId => "teamId",
            ConfigKey::BaseUrl => "baseUrl",
        }
    }
}

/// Read access to the current configuration.
///
/// Implementations decide whether values are a snapshot or re-read on
/// every lookup; the executor calls `get` once per request.
pub trait ConfigProvider: Send + Sync {
    fn get(&self, key: ConfigKey) -> Option<String>;
}

/// Unified configuration for vercelctl.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// API token sent as bearer credential
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Default team scope for every request
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_id: Option<String>,
    /// Override for the API base URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

impl ConfigProvider for Settings {
    fn get(&self, key: ConfigKey) -> Option<String> {
        match key {
            ConfigKey::ApiKey => self.api_key.clone(),
            ConfigKey::TeamId => self.team_id.clone(),
            ConfigKey::BaseUrl => self.base_url.clone(),
        }
    }
}

/// Get the XDG config directory for vercelctl.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "vercelctl").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("config.toml"))
}

/// Load a TOML file into Settings (file layer only).
fn load_file_settings(path: &Path) -> Result<Settings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Load settings from the global config location plus env overrides.
    pub fn load() -> Result<Self, ApplicationError> {
        Self::load_layers(global_config_path().as_deref())
    }

    /// Load settings from an explicit config file plus env overrides.
    pub fn load_from(path: &Path) -> Result<Self, ApplicationError> {
        Self::load_layers(Some(path))
    }

    fn load_layers(path: Option<&Path>) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(path) = path {
            if path.exists() {
                debug!("loading config file {}", path.display());
                current = current.merge_with(&load_file_settings(path)?);
            }
        }

        Self::apply_env_overrides(current)
    }

    /// Read only the file layer (no env overrides). Used before writing.
    pub fn load_file_only(path: &Path) -> Result<Self, ApplicationError> {
        if path.exists() {
            load_file_settings(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Overlay wins where it has a value.
    pub fn merge_with(&self, overlay: &Settings) -> Self {
        Self {
            api_key: overlay.api_key.clone().or_else(|| self.api_key.clone()),
            team_id: overlay.team_id.clone().or_else(|| self.team_id.clone()),
            base_url: overlay.base_url.clone().or_else(|| self.base_url.clone()),
        }
    }

    /// Apply VERCELCTL_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("VERCELCTL")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("api_key") {
            settings.api_key = Some(val);
        }
        if let Ok(val) = config.get_string("team_id") {
            settings.team_id = Some(val);
        }
        if let Ok(val) = config.get_string("base_url") {
            settings.base_url = Some(val);
        }

        Ok(settings)
    }

    /// Persist the settings as the file layer.
    pub fn save_to(&self, path: &Path) -> Result<(), ApplicationError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ApplicationError::Config {
                message: format!("create {}: {}", parent.display(), e),
            })?;
        }
        let content = self.to_toml()?;
        std::fs::write(path, content).map_err(|e| ApplicationError::Config {
            message: format!("write {}: {}", path.display(), e),
        })
    }

    /// Credentials are considered present when a token or an explicit
    /// base url (e.g. an authenticating proxy) is configured.
    pub fn is_configured(&self) -> bool {
        self.api_key.as_deref().is_some_and(|k| !k.is_empty())
            || self.base_url.as_deref().is_some_and(|u| !u.is_empty())
    }

    /// Effective base url (configured or default).
    pub fn effective_base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    /// Token with the middle hidden, for display.
    pub fn masked_api_key(&self) -> Option<String> {
        self.api_key.as_deref().map(mask_token)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }
}

/// Keep the first 10 and last 6 characters of a token.
pub fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() <= 16 {
        return "****".to_string();
    }
    let head: String = chars[..10].iter().collect();
    let tail: String = chars[chars.len() - 6..].iter().collect();
    format!("{head}...{tail}")
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

/// Provider that re-reads the layered configuration on every lookup,
/// so a `config set` takes effect on the next request.
#[derive(Debug, Clone, Default)]
pub struct LayeredConfigProvider {
    path: Option<PathBuf>,
}

impl LayeredConfigProvider {
    /// Provider backed by the global config location.
    pub fn new() -> Self {
        Self {
            path: global_config_path(),
        }
    }

    /// Provider backed by an explicit config file.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    fn current(&self) -> Settings {
        match Settings::load_layers(self.path.as_deref()) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!("config unreadable, using defaults: {e}");
                Settings::default()
            }
        }
    }
}

impl ConfigProvider for LayeredConfigProvider {
    fn get(&self, key: ConfigKey) -> Option<String> {
        self.current().get(key)
    }
}
