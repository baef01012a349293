//! Client configuration for the companion API.
//!
//! Shells resolve a `ClientConfig` from explicit flags, environment variables
//! and an on-disk JSON file, in that order of precedence.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::util::{has_http_scheme, non_blank, trim_base_url};

const CONFIG_SCHEMA_VERSION: u32 = 1;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

pub const API_BASE_URL_ENV: &str = "PIN_API_BASE_URL";
pub const ACCESS_TOKEN_ENV: &str = "PIN_ACCESS_TOKEN";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ClientConfig {
    #[serde(default = "default_config_version")]
    pub version: u32,
    #[serde(default)]
    pub api_base_url: Option<String>,
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

const fn default_config_version() -> u32 {
    CONFIG_SCHEMA_VERSION
}

const fn default_request_timeout_secs() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_SCHEMA_VERSION,
            api_base_url: None,
            access_token: None,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

/// Values layered over a loaded [`ClientConfig`]; `None` keeps the base value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub api_base_url: Option<String>,
    pub access_token: Option<String>,
    pub request_timeout_secs: Option<u64>,
}

impl ConfigOverrides {
    /// Values read from `PIN_API_BASE_URL` / `PIN_ACCESS_TOKEN`.
    pub fn from_env() -> Self {
        Self {
            api_base_url: non_blank(std::env::var(API_BASE_URL_ENV).ok()),
            access_token: non_blank(std::env::var(ACCESS_TOKEN_ENV).ok()),
            request_timeout_secs: None,
        }
    }
}

impl ClientConfig {
    /// Reads config from `path`, returning defaults when the file is absent.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(path)?;
        let mut config = serde_json::from_str::<Self>(&raw)?;
        if config.version != CONFIG_SCHEMA_VERSION {
            return Err(Error::InvalidInput(format!(
                "unsupported config version {} (expected {})",
                config.version, CONFIG_SCHEMA_VERSION
            )));
        }
        config.normalize();
        Ok(config)
    }

    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let mut normalized = self.clone();
        normalized.normalize();
        normalized.validate()?;
        let serialized = serde_json::to_string_pretty(&normalized)?;
        std::fs::write(path, serialized)?;
        Ok(())
    }

    /// Layers `overrides` on top of `self`; fields set in `overrides` win.
    #[must_use]
    pub fn merge(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(url) = non_blank(overrides.api_base_url) {
            self.api_base_url = Some(url);
        }
        if let Some(token) = non_blank(overrides.access_token) {
            self.access_token = Some(token);
        }
        if let Some(timeout) = overrides.request_timeout_secs {
            self.request_timeout_secs = timeout;
        }
        self
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(url) = self.api_base_url.as_deref() {
            if !has_http_scheme(url) {
                return Err(Error::InvalidInput(
                    "api_base_url must include http:// or https://".to_string(),
                ));
            }
        }
        if self.request_timeout_secs == 0 {
            return Err(Error::InvalidInput(
                "request_timeout_secs must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    fn normalize(&mut self) {
        self.api_base_url = self
            .api_base_url
            .take()
            .map(|url| trim_base_url(&url).to_string())
            .filter(|url| !url.is_empty());
        self.access_token = non_blank(self.access_token.take());
    }
}
