//! # Eventpipe API
//!
//! HTTP surface for the event pipeline: single and batched ingestion plus
//! health and metrics observability. The handlers are a thin shell around
//! the pipeline facade; all processing decisions live in
//! `eventpipe-pipeline`.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod types;

pub use error::{ApiError, Result};
pub use handlers::AppState;
pub use routes::create_router;
