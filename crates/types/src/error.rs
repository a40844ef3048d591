//! Error types for the ODS conventions workspace

use thiserror::Error;

/// Main error type for applying the conventions
#[derive(Error, Debug)]
pub enum ConventionsError {
    /// Configuration related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Settings were resolved but the proxy repositories cannot be built from them
    #[error("Invalid user data: {0}")]
    InvalidUserData(String),

    /// The host rejected a plugin, repository or task instruction
    #[error("Host error: {operation}: {message}")]
    Host { operation: String, message: String },
}

/// Result type alias for conventions operations
pub type Result<T> = std::result::Result<T, ConventionsError>;

/// Settings and property store specific errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A proxy setting is absent while the proxy is enabled
    #[error("no_nexus is {no_nexus} but {setting} is not set")]
    MissingRequiredSetting { setting: String, no_nexus: bool },

    /// Properties file not found
    #[error("Properties file not found: {path}")]
    FileNotFound { path: String },

    /// Parse error
    #[error("Properties parse error: {0}")]
    ParseError(String),

    /// A `key=value` override without a key or separator
    #[error("Invalid property override '{value}': expected key=value")]
    InvalidOverride { value: String },
}

impl From<ConfigError> for ConventionsError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::MissingRequiredSetting { .. } => {
                ConventionsError::InvalidUserData(err.to_string())
            }
            other => ConventionsError::Config(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_setting_message() {
        let err = ConfigError::MissingRequiredSetting {
            setting: "nexus_url".to_string(),
            no_nexus: false,
        };
        assert_eq!(err.to_string(), "no_nexus is false but nexus_url is not set");
    }

    #[test]
    fn test_conversion_keeps_message() {
        let err: ConventionsError = ConfigError::MissingRequiredSetting {
            setting: "nexus_pw".to_string(),
            no_nexus: false,
        }
        .into();
        assert!(matches!(err, ConventionsError::InvalidUserData(_)));
        assert!(err.to_string().contains("nexus_pw is not set"));

        let err: ConventionsError = ConfigError::FileNotFound {
            path: "gradle.yaml".to_string(),
        }
        .into();
        assert!(matches!(err, ConventionsError::Config(_)));
    }
}
