//! Centralized configuration for toyscout
//!
//! Config lives at `~/.toyscout/config.toml` with environment
//! overrides applied on top. The credential, endpoint, and model are
//! carried as plain values and handed to `ToyInfoClient` explicitly,
//! so tests can substitute all three without touching process state.

use std::env;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScoutError};

/// Default chat-completions endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api.perplexity.ai/chat/completions";

/// Default model identifier
pub const DEFAULT_MODEL: &str = "sonar";

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoutConfig {
    #[serde(default)]
    pub api: ApiConfig,
}

/// Provider API settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Chat-completions endpoint URL
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Model identifier sent with each request
    #[serde(default = "default_model")]
    pub model: String,
    /// Bearer credential; usually supplied via TOYSCOUT_API_KEY
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            model: default_model(),
            api_key: None,
        }
    }
}

impl ScoutConfig {
    /// Load config from `~/.toyscout/config.toml`, falling back to
    /// defaults if the file does not exist, then apply env overrides
    pub fn load() -> Result<Self> {
        let mut config = match Self::config_path() {
            Some(path) if path.exists() => {
                let content = fs::read_to_string(&path).map_err(|e| {
                    ScoutError::config(format!("failed to read {}: {}", path.display(), e))
                })?;
                toml::from_str(&content).map_err(|e| {
                    ScoutError::config(format!("invalid TOML in {}: {}", path.display(), e))
                })?
            }
            _ => Self::default(),
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Get config file path: `~/.toyscout/config.toml`
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".toyscout").join("config.toml"))
    }

    /// Apply TOYSCOUT_* (and PERPLEXITY_API_KEY) environment overrides
    pub fn apply_env_overrides(&mut self) {
        if let Ok(key) = env::var("TOYSCOUT_API_KEY").or_else(|_| env::var("PERPLEXITY_API_KEY")) {
            if !key.is_empty() {
                self.api.api_key = Some(key);
            }
        }
        if let Ok(endpoint) = env::var("TOYSCOUT_ENDPOINT") {
            if !endpoint.is_empty() {
                self.api.endpoint = endpoint;
            }
        }
        if let Ok(model) = env::var("TOYSCOUT_MODEL") {
            if !model.is_empty() {
                self.api.model = model;
            }
        }
    }

    /// Save config to `~/.toyscout/config.toml`
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()
            .ok_or_else(|| ScoutError::config("could not determine home directory"))?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                ScoutError::config(format!("failed to create {}: {}", parent.display(), e))
            })?;
        }

        let toml_str = toml::to_string_pretty(self)
            .map_err(|e| ScoutError::config(format!("failed to serialize config: {}", e)))?;

        fs::write(&path, toml_str).map_err(|e| {
            ScoutError::config(format!("failed to write {}: {}", path.display(), e))
        })?;

        Ok(())
    }

    /// The credential, or a config error naming where to put one
    pub fn require_api_key(&self) -> Result<&str> {
        self.api
            .api_key
            .as_deref()
            .filter(|k| !k.is_empty())
            .ok_or_else(|| {
                ScoutError::config(
                    "no API key set; export TOYSCOUT_API_KEY or add api.api_key to config.toml",
                )
            })
    }
}
