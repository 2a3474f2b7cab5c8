use thiserror::Error;

/// Server error types
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("configuration error: {source}")]
    Config {
        #[from]
        source: eventpipe_config::ConfigError,
    },

    #[error("storage error: {source}")]
    Storage {
        #[from]
        source: eventpipe_storage::StorageError,
    },

    #[error("signal handling error: {message}")]
    Signal { message: String },

    #[error("IO error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl ServerError {
    /// Create a signal handling error
    pub fn signal(message: impl Into<String>) -> Self {
        Self::Signal {
            message: message.into(),
        }
    }
}

/// Result type alias for server operations
pub type Result<T> = std::result::Result<T, ServerError>;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_signal_error_display() {
        let actual = ServerError::signal("registration failed");
        assert_eq!(
            format!("{actual}"),
            "signal handling error: registration failed"
        );
    }

    #[test]
    fn test_config_error_conversion() {
        let fixture = eventpipe_config::ConfigError::validation("bad");
        let actual = ServerError::from(fixture);
        assert!(matches!(actual, ServerError::Config { .. }));
    }
}
