//! Unified application error type.
//! All modules (db, core, http, cli) return AppError so that the CLI and
//! the HTTP layer share one error path.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database not found: {0}")]
    StoreMissing(String),

    // ---------------------------
    // Serialization
    // ---------------------------
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    // ---------------------------
    // Request errors
    // ---------------------------
    #[error("Malformed request: {0}")]
    MalformedRequest(#[from] JsonRejection),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Validation(String),

    // ---------------------------
    // Config / files
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("File already exists: {0} (use --force to overwrite)")]
    AlreadyExists(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Internal(String),
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Auth and validation failures carry a fixed client message;
        // anything else stays server-side.
        let client_message = match &self {
            AppError::Unauthorized(msg) | AppError::Validation(msg) => {
                tracing::warn!(status = %status.as_u16(), message = %msg, "request rejected");
                msg.clone()
            }
            other => {
                tracing::error!(status = %status.as_u16(), error = %other, "request failed");
                "Internal server error".to_string()
            }
        };

        (status, Json(json!({ "error": client_message }))).into_response()
    }
}
