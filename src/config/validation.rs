use crate::error::AppError;
use std::path::Path;

/// Prefixes `https://` onto an endpoint that was given without a scheme.
///
/// Endpoints that already carry `http://` or `https://` are returned as-is,
/// so a local `http://localhost` mock stays reachable.
pub fn normalize_endpoint(endpoint: &str) -> String {
    let endpoint = endpoint.trim();
    if endpoint.starts_with("http://") || endpoint.starts_with("https://") || endpoint.is_empty() {
        endpoint.to_string()
    } else {
        format!("https://{endpoint}")
    }
}

/// Validates the configuration settings
///
/// # Validation Rules
/// - Users endpoint cannot be empty and must be an http(s) URL
/// - HTTP timeout must be at least one second
/// - If log file path is provided, it cannot be empty
/// - Log file path parent directory must exist or be creatable
pub fn validate_config(
    users_endpoint: &str,
    log_file_path: &Option<String>,
    http_timeout_seconds: u64,
) -> Result<(), AppError> {
    if users_endpoint.is_empty() {
        return Err(AppError::config_error("Users endpoint cannot be empty"));
    }

    if !users_endpoint.starts_with("http://") && !users_endpoint.starts_with("https://") {
        return Err(AppError::config_error(format!(
            "Users endpoint must start with http:// or https://, got '{users_endpoint}'"
        )));
    }

    if http_timeout_seconds == 0 {
        return Err(AppError::config_error(
            "HTTP timeout must be at least 1 second",
        ));
    }

    if let Some(log_path) = log_file_path {
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
