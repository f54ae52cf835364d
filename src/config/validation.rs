use crate::error::AppError;
use std::path::Path;

/// Validates one API domain setting.
///
/// A domain must be non-empty and either carry an `http(s)://` scheme or
/// look like a host name (contain a dot or start with `localhost`).
pub fn validate_domain(name: &str, domain: &str) -> Result<(), AppError> {
    if domain.is_empty() {
        return Err(AppError::config_error(format!("{name} cannot be empty")));
    }

    if !domain.starts_with("http://")
        && !domain.starts_with("https://")
        && !domain.contains('.')
        && !domain.starts_with("localhost")
    {
        return Err(AppError::config_error(format!(
            "{name} must be a valid URL or domain name"
        )));
    }

    Ok(())
}

/// Validates the configuration settings
///
/// # Validation Rules
/// - Both API domains must pass [`validate_domain`]
/// - HTTP timeout must be positive
/// - If log file path is provided, it cannot be empty
/// - Log file path parent directory must exist or be creatable
pub fn validate_config(
    api_domain: &str,
    stats_api_domain: &str,
    http_timeout_seconds: u64,
    log_file_path: &Option<String>,
) -> Result<(), AppError> {
    validate_domain("API domain", api_domain)?;
    validate_domain("Stats API domain", stats_api_domain)?;

    if http_timeout_seconds == 0 {
        return Err(AppError::config_error(
            "HTTP timeout must be at least one second",
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

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_valid_domains() {
        assert!(validate_domain("API domain", "https://api-web.nhle.com").is_ok());
        assert!(validate_domain("API domain", "api-web.nhle.com").is_ok());
        assert!(validate_domain("API domain", "localhost:8080").is_ok());
        assert!(validate_domain("API domain", "http://127.0.0.1:9000").is_ok());
    }

    #[test]
    fn test_invalid_domains() {
        assert!(validate_domain("API domain", "").is_err());
        assert!(validate_domain("API domain", "nhle").is_err());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let result = validate_config("https://a.com", "https://b.com", 0, &None);
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_log_path_parent_is_created() {
        let temp_dir = tempdir().unwrap();
        let log_path = temp_dir.path().join("nested").join("board.log");
        let log_path = Some(log_path.to_string_lossy().to_string());

        validate_config("https://a.com", "https://b.com", 30, &log_path).unwrap();
        assert!(temp_dir.path().join("nested").exists());
    }

    #[test]
    fn test_empty_log_path_rejected() {
        let result = validate_config("https://a.com", "https://b.com", 30, &Some(String::new()));
        assert!(result.is_err());
    }
}
