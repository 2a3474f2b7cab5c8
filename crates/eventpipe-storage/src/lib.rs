//! # Eventpipe Storage
//!
//! Durable MySQL sink for processed events. One transaction per `store`
//! call: either every event in the batch lands or none do.

pub mod error;
pub mod mysql;

pub use error::{Result, StorageError};
pub use mysql::MySqlStorage;
