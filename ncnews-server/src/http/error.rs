//! API error type with IntoResponse
//!
//! Every handler error ends up here. Each variant maps to one status code
//! and a `{"msg": ...}` body; anything unrecognised is a logged 500.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::DbError;
use crate::models::ValidationError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Client input failed validation (400)
    Validation(ValidationError),

    /// Store rejected a value's representation or range (400)
    InvalidInput,

    /// Resource not found (404)
    NotFound { resource: &'static str, id: String },

    /// Insert referenced a missing row (404)
    MissingReference { resource: &'static str },

    /// No route matches the path (404)
    RouteNotFound,

    /// Path is known but the method isn't (405)
    MethodNotAllowed,

    /// Request outlived the configured timeout (408)
    RequestTimeout,

    /// Unclassified database error (500, logged)
    Database(DbError),

    /// Internal error (500, logged)
    Internal { message: String },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::InvalidInput => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } | Self::MissingReference { .. } | Self::RouteNotFound => {
                StatusCode::NOT_FOUND
            }
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::RequestTimeout => StatusCode::REQUEST_TIMEOUT,
            Self::Database(_) | Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> String {
        match self {
            Self::Validation(e) => e.to_string(),
            Self::InvalidInput => "Bad Request".to_owned(),
            Self::NotFound { resource, id } => format!("{} '{}' not found", resource, id),
            Self::MissingReference { resource } => format!("{} not found", resource),
            Self::RouteNotFound => "Route not found".to_owned(),
            Self::MethodNotAllowed => "Method Not Allowed".to_owned(),
            Self::RequestTimeout => "Request Timeout".to_owned(),
            Self::Database(_) | Self::Internal { .. } => "Internal Server Error".to_owned(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            // Log the actual error, return generic message
            Self::Database(e) => tracing::error!("Database error: {}", e),
            Self::Internal { message } => tracing::error!("Internal error: {}", message),
            _ => {}
        }

        let status = self.status();
        (status, Json(json!({ "msg": self.message() }))).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::NotFound { resource, id } => Self::NotFound { resource, id },
            DbError::InvalidInput { message } => {
                tracing::debug!(%message, "store rejected input");
                Self::InvalidInput
            }
            DbError::ForeignKey { constraint } => Self::MissingReference {
                resource: referenced_resource(constraint.as_deref()),
            },
            other => Self::Database(other),
        }
    }
}

/// Name the missing row from the violated constraint, e.g.
/// `comments_author_fkey` -> "user".
fn referenced_resource(constraint: Option<&str>) -> &'static str {
    match constraint {
        Some(c) if c.contains("author") => "user",
        Some(c) if c.contains("article") => "article",
        Some(c) if c.contains("topic") => "topic",
        _ => "referenced resource",
    }
}
