//! `GET /api` - endpoint description document
//!
//! The document lives in `endpoints.json` at the crate root and is served
//! verbatim.

use std::sync::Arc;

use axum::{routing::get, Json, Router};
use once_cell::sync::Lazy;
use serde_json::Value;

use crate::http::server::AppState;

/// Raw endpoint description document
pub const ENDPOINTS_JSON: &str = include_str!("../../../endpoints.json");

static ENDPOINTS: Lazy<Value> =
    Lazy::new(|| serde_json::from_str(ENDPOINTS_JSON).expect("endpoints.json is valid JSON"));

/// Parsed endpoint description document.
pub fn endpoints() -> &'static Value {
    &ENDPOINTS
}

/// GET /api
async fn get_endpoints() -> Json<Value> {
    Json(endpoints().clone())
}

/// API index routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/api", get(get_endpoints))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_parses_as_object() {
        let doc = endpoints();
        assert!(doc.is_object());
        assert!(doc.get("GET /api").is_some());
    }

    #[test]
    fn every_route_is_described() {
        let doc = endpoints();
        for key in [
            "GET /api",
            "GET /api/topics",
            "GET /api/articles",
            "GET /api/articles/:article_id",
            "PATCH /api/articles/:article_id",
            "GET /api/articles/:article_id/comments",
            "POST /api/articles/:article_id/comments",
            "DELETE /api/comments/:comment_id",
            "GET /api/users",
        ] {
            assert!(doc.get(key).is_some(), "missing {key}");
        }
    }
}
