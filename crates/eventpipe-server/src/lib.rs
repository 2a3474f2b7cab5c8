//! # Eventpipe Server
//!
//! Binary crate wiring configuration, storage, the pipeline, and the HTTP
//! surface together, with signal-driven graceful shutdown.

pub mod cli;
pub mod error;
pub mod server;
pub mod shutdown;

pub use cli::Args;
pub use error::{Result, ServerError};
pub use server::EventPipeServer;
