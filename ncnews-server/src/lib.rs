//! ncnews-server: REST API over topics, articles, comments and users
//!
//! Layers, leaf to root:
//! - `db`: PostgreSQL pool, store error classification, one repository per resource
//! - `models`: validated client input (listing query whitelist, new comments)
//! - `http`: axum routing table, extractors, handlers and the `ApiError` translator

pub mod db;
pub mod http;
pub mod models;

pub use db::{create_pool, DbError};
pub use http::{router, run_server, ApiError, AppState, ServerConfig, ServerError};
