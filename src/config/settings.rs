//! Application settings and configuration management

use crate::error::{AppError, Result};
use config::{Config, Environment, File};
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub provider: ProviderConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Upstream image generation provider
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProviderConfig {
    /// Chat-completions endpoint receiving the enhanced prompt
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Model identifier sent with every request
    #[serde(default = "default_model")]
    pub model: String,
    /// Bearer credential
    #[serde(default = "default_api_key")]
    pub api_key: String,
    /// Sent as the `CustomerId` header when set
    #[serde(default)]
    pub customer_id: Option<String>,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            model: default_model(),
            api_key: default_api_key(),
            customer_id: None,
        }
    }
}

fn default_endpoint() -> String {
    "https://oi-server.onrender.com/chat/completions".to_string()
}

fn default_model() -> String {
    "replicate/black-forest-labs/flux-1.1-pro".to_string()
}

fn default_api_key() -> String {
    "xxx".to_string()
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

impl Settings {
    /// Load settings from configuration files and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path("config/default.toml")
    }

    /// Load settings from a specific configuration file path
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_str().ok_or_else(|| {
            AppError::Config(config::ConfigError::Message(
                "Configuration path is not valid UTF-8".to_string(),
            ))
        })?;

        let config = Config::builder()
            .set_default("server.host", default_host())?
            .set_default("server.port", 8080)?
            .set_default("provider.endpoint", default_endpoint())?
            .set_default("provider.model", default_model())?
            .set_default("provider.api_key", default_api_key())?
            .set_default("logging.level", default_log_level())?
            .set_default("logging.format", default_log_format())?
            .add_source(File::with_name(path).required(false))
            // Override with environment variables (prefixed with ART_GATEWAY_)
            .add_source(
                Environment::with_prefix("ART_GATEWAY")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings: Settings = config.try_deserialize()?;
        Ok(settings)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(config_error("Server port cannot be 0".to_string()));
        }

        if self.provider.endpoint.trim().is_empty() {
            return Err(config_error("Provider endpoint cannot be empty".to_string()));
        }

        let url = Url::parse(&self.provider.endpoint).map_err(|e| {
            config_error(format!(
                "Provider endpoint '{}' is not a valid URL: {}",
                self.provider.endpoint, e
            ))
        })?;
        if !["http", "https"].contains(&url.scheme()) {
            return Err(config_error(format!(
                "Provider endpoint '{}' has invalid scheme '{}'. Must be 'http' or 'https'",
                self.provider.endpoint,
                url.scheme()
            )));
        }

        if self.provider.model.trim().is_empty() {
            return Err(config_error("Provider model cannot be empty".to_string()));
        }

        Ok(())
    }
}

fn config_error(message: String) -> AppError {
    AppError::Config(config::ConfigError::Message(message))
}
