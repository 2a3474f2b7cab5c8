use thiserror::Error;

/// Storage error types
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("connection error: {message}")]
    Connection { message: String },

    #[error("query error: {message}")]
    Query { message: String },

    #[error("transaction error: {message}")]
    Transaction { message: String },

    #[error("serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },

    #[error("database error: {source}")]
    Database {
        #[from]
        source: sqlx::Error,
    },
}

impl StorageError {
    /// Create a connection error
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create a query error
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }

    /// Create a transaction error
    pub fn transaction(message: impl Into<String>) -> Self {
        Self::Transaction {
            message: message.into(),
        }
    }
}

impl From<StorageError> for eventpipe_core::Error {
    fn from(err: StorageError) -> Self {
        eventpipe_core::Error::storage(err.to_string())
    }
}

/// Result type alias for storage operations
pub type Result<T> = std::result::Result<T, StorageError>;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_storage_error_display() {
        let actual = StorageError::connection("refused");
        assert_eq!(format!("{actual}"), "connection error: refused");

        let actual = StorageError::transaction("commit failed");
        assert_eq!(format!("{actual}"), "transaction error: commit failed");
    }

    #[test]
    fn test_storage_error_converts_to_core_error() {
        let fixture = StorageError::query("syntax error");
        let actual = eventpipe_core::Error::from(fixture);
        assert!(matches!(actual, eventpipe_core::Error::Storage { .. }));
    }
}
