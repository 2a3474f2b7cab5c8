use thiserror::Error;

/// Core error types for the event pipeline
#[derive(Error, Debug)]
pub enum Error {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid {field} format: {message}")]
    InvalidFormat {
        field: &'static str,
        message: String,
    },

    #[error("processing error: {message}")]
    Processing { message: String },

    #[error("storage error: {message}")]
    Storage { message: String },

    #[error("queue error: {message}")]
    Queue { message: String },

    #[error("serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },

    #[error("UUID error: {source}")]
    Uuid {
        #[from]
        source: uuid::Error,
    },
}

impl Error {
    /// Create a missing-field validation error
    pub fn missing_field(field: &'static str) -> Self {
        Self::MissingField { field }
    }

    /// Create a bad-format validation error
    pub fn invalid_format(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidFormat {
            field,
            message: message.into(),
        }
    }

    /// Create a new processing error
    pub fn processing(message: impl Into<String>) -> Self {
        Self::Processing {
            message: message.into(),
        }
    }

    /// Create a new storage error
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    /// Create a new queue error
    pub fn queue(message: impl Into<String>) -> Self {
        Self::Queue {
            message: message.into(),
        }
    }

    /// Whether this error came out of the validation stage
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::MissingField { .. } | Self::InvalidFormat { .. })
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Error>;
