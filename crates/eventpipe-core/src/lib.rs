//! # Eventpipe Core
//!
//! Foundational types and contracts for the event ingestion pipeline. The
//! other crates build on the pieces defined here.
//!
//! ## Key Components
//!
//! - **Events**: the input record and its processed counterpart
//! - **Traits**: the validator / processor / sink collaborator contracts
//! - **Errors**: the shared error type and result alias

pub mod error;
pub mod event;
pub mod traits;

// Re-export commonly used types
pub use error::{Error, Result};
pub use event::{Event, ProcessedEvent};
pub use traits::{EventSink, Processor, Validator};

/// Common type aliases for convenience
pub type DateTime = chrono::DateTime<chrono::Utc>;
pub type Json = serde_json::Value;
