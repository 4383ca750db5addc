//! Logging configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Tracing subscriber settings
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is not set
    #[serde(default = "default_level")]
    pub level: String,

    /// Output format
    #[serde(default)]
    pub format: LogFormat,
}

/// Log line format
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Pretty,
    /// One JSON object per line
    Json,
}

impl LoggingConfig {
    /// Validate logging configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        let level = self.level.trim();
        if level.is_empty() {
            return Err(ValidationError::MissingRequired("logging.level"));
        }
        if level.contains(char::is_whitespace) {
            return Err(ValidationError::InvalidLogLevel(self.level.clone()));
        }
        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: LogFormat::default(),
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, "info");
        assert_eq!(config.format, LogFormat::Pretty);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn directive_lists_are_accepted() {
        let config = LoggingConfig {
            level: "warn,life_decision=debug".to_string(),
            ..LoggingConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn blank_level_is_rejected() {
        let config = LoggingConfig {
            level: "  ".to_string(),
            ..LoggingConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::MissingRequired("logging.level"))
        );
    }

    #[test]
    fn level_with_spaces_is_rejected() {
        let config = LoggingConfig {
            level: "info debug".to_string(),
            ..LoggingConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidLogLevel(_))
        ));
    }
}
