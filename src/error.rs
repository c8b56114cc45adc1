//! Typed errors and HTTP mapping.

use axum::{
    extract::rejection::{FormRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Body sent for every failed request. Internal detail stays in the log.
pub const INTERNAL_ERROR_BODY: &str = "Internal Server Error";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid value for {key}: '{value}'")]
    Invalid { key: &'static str, value: String },
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("database: {0}")]
    Backend(#[from] sqlx::Error),
    #[error("template: {0}")]
    Template(#[from] minijinja::Error),
    #[error("not implemented: {0}")]
    NotImplemented(&'static str),
    /// Path, query or form that could not be parsed into the handler's types.
    #[error("malformed request: {reason}")]
    Malformed { status: StatusCode, reason: String },
}

impl From<PathRejection> for AppError {
    fn from(r: PathRejection) -> Self {
        AppError::Malformed {
            status: r.status(),
            reason: r.body_text(),
        }
    }
}

impl From<QueryRejection> for AppError {
    fn from(r: QueryRejection) -> Self {
        AppError::Malformed {
            status: r.status(),
            reason: r.body_text(),
        }
    }
}

impl From<FormRejection> for AppError {
    fn from(r: FormRejection) -> Self {
        AppError::Malformed {
            status: r.status(),
            reason: r.body_text(),
        }
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            // Input failures share the backend failure response; callers cannot tell them apart.
            AppError::InvalidInput(_) | AppError::Backend(_) | AppError::Template(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::NotImplemented(_) => StatusCode::NOT_IMPLEMENTED,
            AppError::Malformed { status, .. } => *status,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            AppError::NotImplemented(what) => tracing::warn!(route = %what, "route not implemented"),
            AppError::Malformed { reason, .. } => tracing::warn!(%reason, "malformed request"),
            _ => tracing::error!(error = %self, "request failed"),
        }
        let body = status
            .canonical_reason()
            .unwrap_or(INTERNAL_ERROR_BODY);
        (status, body).into_response()
    }
}
