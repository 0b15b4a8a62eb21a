//! snipbin-server: snippet-sharing web application
//!
//! Serves user-submitted text snippets with an expiry period: snippets
//! are stored in Postgres and rendered server-side until they expire.

pub mod db;
pub mod http;
pub mod models;
pub mod render;

pub use http::{run_server, ServerConfig};
