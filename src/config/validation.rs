use super::Config;
use crate::error::AppError;
use std::path::Path;

fn is_http_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

/// Validates the configuration settings
///
/// # Validation Rules
/// - `default_base_url` may be empty, otherwise it must be an http(s) URL
/// - Every tenant needs a non-empty code and an http(s) URL
/// - `http_timeout_ms` and `retry_attempts` must be positive
/// - If a log file path is provided it cannot be empty, and its parent
///   directory must exist or be creatable
pub fn validate_config(config: &Config) -> Result<(), AppError> {
    if !config.default_base_url.is_empty() && !is_http_url(&config.default_base_url) {
        return Err(AppError::config_error(format!(
            "Default base URL must start with http:// or https://, got '{}'",
            config.default_base_url
        )));
    }

    for (code, url) in &config.tenants {
        if code.trim().is_empty() {
            return Err(AppError::config_error("Tenant school code cannot be empty"));
        }
        if !is_http_url(url) {
            return Err(AppError::config_error(format!(
                "Base URL for tenant '{code}' must start with http:// or https://, got '{url}'"
            )));
        }
    }

    if config.http_timeout_ms == 0 {
        return Err(AppError::config_error("HTTP timeout must be greater than zero"));
    }

    if config.retry_attempts == 0 {
        return Err(AppError::config_error("Retry attempts must be at least 1"));
    }

    if let Some(log_path) = &config.log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        if let Some(parent) = Path::new(log_path).parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}
