//! HTTP-facing error type.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use db::DbError;
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Errors returned by request handlers.
///
/// Every variant renders as a JSON object of the form `{"error": "<message>"}`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No friend row carries the requested id.
    #[error("Friend with id {0} does not exist")]
    FriendNotFound(i64),

    /// The storage engine failed or could not be reached.
    #[error("database error: {0}")]
    Database(DbError),
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::NotFound(id) => Self::FriendNotFound(id),
            other => Self::Database(other),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::FriendNotFound(_) => (StatusCode::NOT_FOUND, self.to_string()),
            Self::Database(e) => {
                error!("request failed: {e}");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error".to_string())
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
