//! Loading and validating `lintok.toml` files.

use crate::error::ConfigError;
use crate::types::CheckerConfig;
use std::path::Path;

/// Loads and validates a configuration file from disk.
pub fn load_config(path: &Path) -> Result<CheckerConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    load_config_from_str(&content)
}

/// Parses and validates configuration from an in-memory TOML string.
pub fn load_config_from_str(content: &str) -> Result<CheckerConfig, ConfigError> {
    let config: CheckerConfig =
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    validate(&config)?;
    Ok(config)
}

fn validate(config: &CheckerConfig) -> Result<(), ConfigError> {
    if config.fixer.max_passes == 0 {
        return Err(ConfigError::ValidationError(
            "fixer.max_passes must be at least 1".to_string(),
        ));
    }
    for sniff in &config.sniffs.allow {
        if config.sniffs.deny.contains(sniff) {
            return Err(ConfigError::ValidationError(format!(
                "sniff '{sniff}' is both allowed and denied"
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_valid_config() {
        let config = load_config_from_str(
            r#"
            [sniffs]
            allow = ["NamingConventions.ValidMethodName"]
            deny = ["Commenting.FileComment"]

            [fixer]
            max_passes = 10
            "#,
        )
        .unwrap();
        assert_eq!(config.sniffs.allow.len(), 1);
        assert_eq!(config.fixer.max_passes, 10);
    }

    #[test]
    fn empty_config_is_valid() {
        let config = load_config_from_str("").unwrap();
        assert!(config.sniffs.allow.is_empty());
    }

    #[test]
    fn malformed_toml_is_parse_error() {
        let err = load_config_from_str("[sniffs\nallow = [").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn zero_passes_rejected() {
        let err = load_config_from_str("[fixer]\nmax_passes = 0").unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn allow_deny_conflict_rejected() {
        let err = load_config_from_str(
            r#"
            [sniffs]
            allow = ["Commenting.FileComment"]
            deny = ["Commenting.FileComment"]
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn load_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lintok.toml");
        std::fs::write(&path, "[fixer]\nmax_passes = 3\n").unwrap();
        let config = load_config(&path).unwrap();
        assert_eq!(config.fixer.max_passes, 3);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_config(Path::new("/nonexistent/lintok.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::IoError(_)));
    }
}
