use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use thiserror::Error;

use crate::llm_client::prompts::PromptError;

/// Guidance attached to every rejected career goal.
pub const GOAL_SUGGESTION: &str = "Please enter a valid career or profession \
    (e.g., Software Developer, Doctor, Teacher, Engineer, etc.)";

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Model and extraction failures never reach this type: they are resolved to
/// fallback payloads at the call site.
#[derive(Debug, Error)]
pub enum AppError {
    /// 400 with a bare `{error}` body.
    #[error("Validation error: {0}")]
    Validation(String),

    /// 400 with `{error, message}`.
    #[error("{error}: {message}")]
    MissingField { error: String, message: String },

    /// 400 with `{error, message, suggestion}`.
    #[error("Invalid career goal: {reason}")]
    InvalidGoal { reason: String },

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// 500 with `{error, message}`; `context` names the failing operation.
    #[error("{context}: {source}")]
    Internal {
        context: &'static str,
        #[source]
        source: anyhow::Error,
    },
}

impl AppError {
    pub fn internal(context: &'static str, source: impl Into<anyhow::Error>) -> Self {
        AppError::Internal {
            context,
            source: source.into(),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(format!("Invalid JSON body: {}", rejection.body_text()))
    }
}

impl From<PromptError> for AppError {
    fn from(e: PromptError) -> Self {
        AppError::internal("Failed to build prompt", e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body): (StatusCode, Value) = match self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, json!({ "error": msg })),
            AppError::MissingField { error, message } => (
                StatusCode::BAD_REQUEST,
                json!({ "error": error, "message": message }),
            ),
            AppError::InvalidGoal { reason } => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": "Invalid career goal",
                    "message": reason,
                    "suggestion": GOAL_SUGGESTION
                }),
            ),
            AppError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                json!({ "error": "Invalid email or password" }),
            ),
            AppError::ServiceUnavailable(msg) => {
                tracing::warn!("Service unavailable: {msg}");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    json!({ "error": "Service unavailable", "message": msg }),
                )
            }
            AppError::Internal { context, source } => {
                tracing::error!("Internal error: {context}: {source:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": context, "message": source.to_string() }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
