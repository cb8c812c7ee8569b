//! Response and error shapes shared by all endpoints.
//!
//! Success bodies are either the serialized entity itself or a
//! `{"message": "..."}` object; failures are `{"detail": "..."}` with the
//! status carrying the error class. This mirrors the wire contract the
//! frontend already depends on.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::DbErr;
use serde::Serialize;

/// `{"message": "..."}` success payload for mutations.
#[derive(Debug, Serialize)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// `{"detail": "..."}` error payload.
#[derive(Debug, Serialize)]
struct Detail {
    detail: String,
}

/// Error taxonomy for the HTTP surface.
///
/// - `Unauthorized` → 401 (failed rule or missing/invalid credential)
/// - `NotFound` → 404 (absent entity or empty aggregate)
/// - `BadRequest` → 400 (duplicate email, failed update)
/// - `Validation` → 422 (malformed payload, caught at the boundary)
/// - `Db` → 500, surfacing the store error verbatim (internal admin tool)
#[derive(Debug)]
pub enum ApiError {
    Unauthorized(String),
    NotFound(String),
    BadRequest(String),
    Validation(String),
    Db(DbErr),
}

impl ApiError {
    /// The denial message every authorization rule produces, with no hint of
    /// which rule failed.
    pub fn unauthorized() -> Self {
        ApiError::Unauthorized("Usuario no autorizado".into())
    }
}

impl From<DbErr> for ApiError {
    fn from(err: DbErr) -> Self {
        ApiError::Db(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Validation(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            ApiError::Db(err) => {
                tracing::error!(error = %err, "Database error while handling request");
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
        };

        (status, Json(Detail { detail })).into_response()
    }
}
