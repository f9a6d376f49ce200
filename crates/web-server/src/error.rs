use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use database::DbError;
use serde_json::json;
use thiserror::Error;

pub const PERSONA_NOT_FOUND: &str = "Persona not found";

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] DbError),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Invalid request body: {0}")]
    InvalidBody(#[from] JsonRejection),
    #[error("Invalid path: {0}")]
    InvalidPath(#[from] PathRejection),
}

/// Converts our custom `AppError` into an HTTP response.
///
/// Every error body has the shape `{"detail": "..."}`.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            AppError::Database(DbError::NotFound) => {
                (StatusCode::NOT_FOUND, PERSONA_NOT_FOUND.to_string())
            }
            AppError::Database(db_err) => {
                tracing::error!(error = ?db_err, "Database error.");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal database error occurred".to_string(),
                )
            }
            AppError::NotFound(message) => (StatusCode::NOT_FOUND, message),
            AppError::InvalidBody(rejection) => {
                tracing::debug!(error = %rejection, "Rejected request body.");
                (rejection.status(), rejection.body_text())
            }
            AppError::InvalidPath(rejection) => {
                tracing::debug!(error = %rejection, "Rejected path parameters.");
                (rejection.status(), rejection.body_text())
            }
        };

        let body = Json(json!({ "detail": detail }));
        (status, body).into_response()
    }
}
