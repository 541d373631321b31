use crate::api::{RetryPolicy, TenantResolver};
use crate::constants::{self, env_vars};
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use std::time::Duration;
use tokio::fs;
use tokio::io::AsyncWriteExt;

pub mod paths;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use validation::validate_config;

/// Configuration structure for the client.
/// Handles loading, saving, and managing the tenant table and call defaults.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL used when a school code is absent or not in `tenants`.
    /// May be empty, in which case unmapped tenants cannot make relative calls.
    pub default_base_url: String,
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    /// Per-attempt timeout in milliseconds.
    #[serde(default = "default_http_timeout")]
    pub http_timeout_ms: u64,
    /// Total attempts per call when retry is enabled.
    #[serde(default = "default_retry_attempts")]
    pub retry_attempts: u32,
    /// Delay step between attempts in milliseconds.
    #[serde(default = "default_retry_base_delay")]
    pub retry_base_delay_ms: u64,
    /// School code → base URL. Entries here override the built-in table.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub tenants: BTreeMap<String, String>,
}

fn default_http_timeout() -> u64 {
    constants::DEFAULT_HTTP_TIMEOUT_MS
}

fn default_retry_attempts() -> u32 {
    constants::retry::MAX_ATTEMPTS
}

fn default_retry_base_delay() -> u64 {
    constants::retry::BASE_DELAY_MS
}

impl Default for Config {
    fn default() -> Self {
        Config {
            default_base_url: String::new(),
            log_file_path: None,
            http_timeout_ms: default_http_timeout(),
            retry_attempts: default_retry_attempts(),
            retry_base_delay_ms: default_retry_base_delay(),
            tenants: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location.
    /// Falls back to defaults when no file exists. Environment variables
    /// override file values.
    ///
    /// # Environment Variables
    /// - `SCHOOL_ERP_BASE_URL` - Override the default base URL
    /// - `SCHOOL_ERP_LOG_FILE` - Override log file path
    /// - `SCHOOL_ERP_HTTP_TIMEOUT_MS` - Override per-attempt timeout
    /// - `SCHOOL_ERP_RETRY_ATTEMPTS` - Override retry attempt budget
    pub async fn load() -> Result<Self, AppError> {
        let config_path = get_config_path();

        let mut config = if Path::new(&config_path).exists() {
            Self::load_from_path(&config_path).await?
        } else {
            Config::default()
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Applies environment variable overrides in place.
    /// Unparseable numeric values are ignored.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(base_url) = std::env::var(env_vars::BASE_URL) {
            self.default_base_url = base_url;
        }

        if let Ok(log_file_path) = std::env::var(env_vars::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }

        if let Some(timeout) = std::env::var(env_vars::HTTP_TIMEOUT_MS)
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            self.http_timeout_ms = timeout;
        }

        if let Some(attempts) = std::env::var(env_vars::RETRY_ATTEMPTS)
            .ok()
            .and_then(|s| s.parse::<u32>().ok())
        {
            self.retry_attempts = attempts;
        }
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(self)
    }

    /// Resolver over the built-in table, overlaid with `tenants`.
    pub fn tenant_resolver(&self) -> TenantResolver {
        let builtin = constants::BUILTIN_TENANTS
            .iter()
            .map(|(code, url)| (code.to_string(), url.to_string()));
        let configured = self
            .tenants
            .iter()
            .map(|(code, url)| (code.clone(), url.clone()));
        TenantResolver::new(builtin.chain(configured), self.default_base_url.clone())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.http_timeout_ms)
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(
            self.retry_attempts,
            Duration::from_millis(self.retry_base_delay_ms),
        )
    }

    /// Saves current configuration to the default config file location.
    pub async fn save(&self) -> Result<(), AppError> {
        let config_path = get_config_path();
        self.save_to_path(&config_path).await
    }

    /// Returns the platform-specific path for the config file.
    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    /// Returns the platform-specific path for the log directory.
    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Displays current configuration settings to stdout.
    pub async fn display() -> Result<(), AppError> {
        let config_path = get_config_path();
        let log_dir = get_log_dir_path();

        if !Path::new(&config_path).exists() {
            println!("\nNo configuration file found at:");
            println!("{config_path}");
            return Ok(());
        }

        let config = Config::load().await?;
        println!("\nCurrent Configuration");
        println!("────────────────────────────────────");
        println!("Config Location:");
        println!("{config_path}");
        println!("────────────────────────────────────");
        println!("Default Base URL:");
        if config.default_base_url.is_empty() {
            println!("(not set)");
        } else {
            println!("{}", config.default_base_url);
        }
        println!("────────────────────────────────────");
        println!("Timeout / Retry:");
        println!(
            "{} ms, {} attempt(s), {} ms step",
            config.http_timeout_ms, config.retry_attempts, config.retry_base_delay_ms
        );
        println!("────────────────────────────────────");
        println!("Tenants:");
        for (code, url) in config.tenant_resolver().tenants() {
            println!("{code:<12} {url}");
        }
        println!("────────────────────────────────────");
        println!("Log File Location:");
        if let Some(custom_path) = &config.log_file_path {
            println!("{custom_path}");
        } else {
            println!("{log_dir}/{}", constants::LOG_FILE_NAME);
            println!("(Default location)");
        }

        Ok(())
    }

    /// Saves configuration to a custom file path, creating parent
    /// directories as needed. Trailing slashes are trimmed from base URLs.
    ///
    /// # Errors
    /// * `AppError::Config` - If the provided path has no parent directory
    /// * `AppError::Io` - If there's an I/O error creating directories or writing the file
    /// * `AppError::TomlSerialize` - If there's an error serializing the configuration
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).await?;
        }

        let normalized = Config {
            default_base_url: self.default_base_url.trim_end_matches('/').to_string(),
            tenants: self
                .tenants
                .iter()
                .map(|(code, url)| {
                    (
                        code.trim().to_ascii_uppercase(),
                        url.trim_end_matches('/').to_string(),
                    )
                })
                .collect(),
            ..self.clone()
        };
        let content = toml::to_string_pretty(&normalized)?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    /// Loads configuration from a custom file path, without env overrides.
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
