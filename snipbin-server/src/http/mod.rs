//! HTTP layer
//!
//! Axum server with:
//! - Request tracing
//! - Graceful shutdown
//! - HTML error responses
//! - Static assets under /static

pub mod error;
pub mod extractors;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::{run_server, AppState, ServerConfig};
