use thiserror::Error;

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("configuration loading error: {message}")]
    Loading { message: String },

    #[error("configuration validation error: {message}")]
    Validation { message: String },

    #[error("file error: {message}")]
    File { message: String },

    #[error("serialization error: {source}")]
    Serialization {
        #[from]
        source: toml::de::Error,
    },

    #[error("config builder error: {source}")]
    ConfigBuilder {
        #[from]
        source: config::ConfigError,
    },
}

impl ConfigError {
    /// Create a loading error
    pub fn loading(message: impl Into<String>) -> Self {
        Self::Loading {
            message: message.into(),
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a file error
    pub fn file(message: impl Into<String>) -> Self {
        Self::File {
            message: message.into(),
        }
    }
}

/// Result type alias for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;
