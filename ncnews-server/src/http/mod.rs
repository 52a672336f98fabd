//! HTTP server layer
//!
//! Axum server with:
//! - Flat `/api/...` routing table
//! - 405 guard for known paths, 404 catch-all for the rest
//! - JSON `{msg}` error responses through `ApiError`
//! - CORS (localhost only by default), request tracing, timeout, panic catcher
//! - Graceful shutdown with explicit pool close

pub mod error;
pub mod extractors;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::{router, run_server, AppState, ServerConfig, ServerError};
