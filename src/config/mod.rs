//! Configuration management module.
//!
//! Supports loading configuration from:
//! - TOML files (config/default.toml, config/{profile}.toml)
//! - Environment variables with `CARDID_WORKER__<SECTION>__<KEY>` pattern

mod server;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

pub use server::ServerConfig;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// HTTP server configuration.
    #[serde(default)]
    pub server: ServerConfig,

    /// Card analysis limits.
    #[serde(default)]
    pub analysis: AnalysisConfig,

    /// Observability configuration.
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

impl AppConfig {
    /// Load configuration from files and environment.
    ///
    /// Configuration is loaded in the following order (later sources override earlier):
    /// 1. `config/default.toml`
    /// 2. `config/{CARDID_PROFILE}.toml` (if `CARDID_PROFILE` is set)
    /// 3. Environment variables with `CARDID_WORKER__` prefix
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded or is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let profile =
            std::env::var("CARDID_PROFILE").unwrap_or_else(|_| "development".to_string());

        let config = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{profile}")).required(false))
            // CARDID_WORKER__SERVER__PORT=8080 -> server.port = 8080
            .add_source(
                Environment::with_prefix("CARDID_WORKER")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let app_config: Self = config.try_deserialize()?;
        app_config.validate()?;

        Ok(app_config)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error describing the first invalid setting.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Message("server.port cannot be 0".to_string()));
        }

        self.analysis.validate()?;

        match self.observability.log_format.as_str() {
            "text" | "json" => {}
            other => {
                return Err(ConfigError::Message(format!(
                    "observability.log_format must be \"text\" or \"json\", got \"{other}\""
                )));
            }
        }

        if self.observability.metrics_enabled {
            let path = self.observability.metrics_path.as_str();
            if !path.starts_with('/') {
                return Err(ConfigError::Message(
                    "observability.metrics_path must start with '/'".to_string(),
                ));
            }
            if matches!(path, "/health" | "/ready") || path.starts_with("/v1/") {
                return Err(ConfigError::Message(format!(
                    "observability.metrics_path \"{path}\" collides with an API route"
                )));
            }
        }

        Ok(())
    }
}

/// Limits applied to analysis requests served over HTTP.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisConfig {
    /// Longest accepted raw input, in bytes.
    #[serde(default = "default_max_input_bytes")]
    pub max_input_bytes: usize,

    /// Most inputs accepted in one batch request.
    #[serde(default = "default_max_batch_size")]
    pub max_batch_size: usize,
}

const fn default_max_input_bytes() -> usize {
    256
}

const fn default_max_batch_size() -> usize {
    100
}

impl AnalysisConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.max_input_bytes == 0 {
            return Err(ConfigError::Message(
                "analysis.max_input_bytes cannot be 0".to_string(),
            ));
        }
        if self.max_batch_size == 0 {
            return Err(ConfigError::Message(
                "analysis.max_batch_size cannot be 0".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            max_input_bytes: default_max_input_bytes(),
            max_batch_size: default_max_batch_size(),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ObservabilityConfig {
    /// Log level.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log format: "text" or "json".
    #[serde(default = "default_log_format")]
    pub log_format: String,

    /// Enable Prometheus metrics endpoint.
    #[serde(default = "default_metrics_enabled")]
    pub metrics_enabled: bool,

    /// Metrics endpoint path.
    #[serde(default = "default_metrics_path")]
    pub metrics_path: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

const fn default_metrics_enabled() -> bool {
    true
}

fn default_metrics_path() -> String {
    "/metrics".to_string()
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: default_log_format(),
            metrics_enabled: default_metrics_enabled(),
            metrics_path: default_metrics_path(),
        }
    }
}
