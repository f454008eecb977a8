//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::ConsoleConfig;

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Load configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<ConsoleConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: ConsoleConfig = toml::from_str(&content)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_config() {
        let config: ConsoleConfig = toml::from_str(
            r#"
            [target]
            host = "10.1.1.1"
            "#,
        )
        .unwrap();

        assert_eq!(config.target.host, "10.1.1.1");
        // Omitted fields keep their defaults.
        assert_eq!(config.target.port, 8000);
        assert_eq!(config.observability.log_level, "info");
    }

    #[test]
    fn test_parse_full_config() {
        let config: ConsoleConfig = toml::from_str(
            r#"
            [target]
            host = "zmi.internal"
            port = 9100

            [observability]
            log_level = "debug"
            "#,
        )
        .unwrap();

        assert_eq!(config.target.host, "zmi.internal");
        assert_eq!(config.target.port, 9100);
        assert_eq!(config.observability.log_level, "debug");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_config(Path::new("/nonexistent/console.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
