//! quill-server: HTTP backend for the quill blog
//!
//! Exposes users and posts over a JSON API backed by SQLite.

pub mod db;
pub mod http;
pub mod models;

pub use http::error::ApiError;
pub use http::server::{build_router, run_server, AppState, ServerConfig};
