//! TOML-based configuration.
//!
//! Values merge from three sources, later taking precedence:
//! 1. Bundled defaults (include_str! from giotto.toml)
//! 2. User config in the home directory (~/.config/giotto/giotto.toml)
//! 3. User config in the current directory (./giotto.toml)

use config::{Config, File, FileFormat};
use giotto_error::{ConfigError, GiottoResult};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, instrument};

/// REST client settings.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RestConfig {
    /// The versioned API root all routes are resolved against.
    pub base_url: String,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Longest bucket wait honored before a request fails instead of
    /// sleeping.
    #[serde(default = "default_max_rate_limit_secs")]
    pub max_rate_limit_secs: u64,

    /// Transient-failure retries per request.
    #[serde(default = "default_max_retries")]
    pub max_retries: usize,

    /// Initial delay of the retry backoff, in milliseconds.
    #[serde(default = "default_retry_backoff_ms")]
    pub retry_backoff_ms: u64,
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_max_rate_limit_secs() -> u64 {
    300
}

fn default_max_retries() -> usize {
    3
}

fn default_retry_backoff_ms() -> u64 {
    500
}

impl Default for RestConfig {
    fn default() -> Self {
        Self {
            base_url: "https://discord.com/api/v10".to_string(),
            timeout_secs: default_timeout_secs(),
            max_rate_limit_secs: default_max_rate_limit_secs(),
            max_retries: default_max_retries(),
            retry_backoff_ms: default_retry_backoff_ms(),
        }
    }
}

impl RestConfig {
    /// The per-request timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// The longest bucket wait honored before erroring.
    pub fn max_rate_limit(&self) -> Duration {
        Duration::from_secs(self.max_rate_limit_secs)
    }
}

/// Gateway connection settings.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct GatewayConfig {
    /// Member count past which a guild is delivered without its offline
    /// members.
    #[serde(default = "default_large_threshold")]
    pub large_threshold: u32,

    /// Seconds a resumable session is retried before falling back to a
    /// fresh identify.
    #[serde(default = "default_restart_window_secs")]
    pub restart_window_secs: u64,
}

fn default_large_threshold() -> u32 {
    250
}

fn default_restart_window_secs() -> u64 {
    30
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            large_threshold: default_large_threshold(),
            restart_window_secs: default_restart_window_secs(),
        }
    }
}

/// Top-level giotto configuration.
///
/// # Example
///
/// ```no_run
/// use giotto_http::GiottoConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = GiottoConfig::load()?;
/// println!("API root: {}", config.rest.base_url);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct GiottoConfig {
    /// REST client settings.
    #[serde(default)]
    pub rest: RestConfig,

    /// Gateway connection settings.
    #[serde(default)]
    pub gateway: GatewayConfig,
}

impl GiottoConfig {
    /// Load configuration from a specific file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> GiottoResult<Self> {
        debug!("Loading configuration from file");

        Config::builder()
            .add_source(File::from(path.as_ref()))
            .build()
            .map_err(|e| {
                ConfigError::new(format!(
                    "Failed to read configuration from {}: {}",
                    path.as_ref().display(),
                    e
                ))
            })?
            .try_deserialize()
            .map_err(|e| ConfigError::new(format!("Failed to parse configuration: {}", e)).into())
    }

    /// Load configuration with precedence: user override > bundled default.
    ///
    /// User config files are optional and silently skipped if not found.
    #[instrument]
    pub fn load() -> GiottoResult<Self> {
        debug!("Loading configuration with precedence: current dir > home dir > bundled defaults");

        // Bundled default configuration
        const DEFAULT_CONFIG: &str = include_str!("../../../giotto.toml");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        // Add user config from home directory (optional)
        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/giotto/giotto.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        // Add user config from current directory (optional, highest precedence)
        builder = builder.add_source(File::with_name("giotto").required(false));

        builder
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to build configuration: {}", e)))?
            .try_deserialize()
            .map_err(|e| ConfigError::new(format!("Failed to parse configuration: {}", e)).into())
    }
}
