//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::ApiConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<ApiConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: ApiConfig = toml::from_str(&content)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_overrides() {
        let file = write_config(
            r#"
            [listener]
            port = 4000
            public_host = "api.example.com"

            [docs]
            title = "Repos"
            "#,
        );

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.listener.base_url(), "http://api.example.com:4000");
        assert_eq!(config.docs.title, "Repos");
        assert_eq!(config.docs.ui_path, "/api-docs");
    }

    #[test]
    fn test_missing_file() {
        let err = load_config(Path::new("/nonexistent/repository-api.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_parse_error() {
        let file = write_config("[listener\nport = 1");
        assert!(matches!(load_config(file.path()).unwrap_err(), ConfigError::Parse(_)));
    }

    #[test]
    fn test_validation_error() {
        let file = write_config(
            r#"
            [listener]
            port = 0

            [timeouts]
            request_secs = 0
            "#,
        );

        let err = load_config(file.path()).unwrap_err();
        match &err {
            ConfigError::Validation(errors) => assert_eq!(errors.len(), 2),
            other => panic!("unexpected error: {other}"),
        }
        assert!(err.to_string().starts_with("Validation failed: "));
    }
}
