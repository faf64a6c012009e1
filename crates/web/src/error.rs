use askama::Template;
use atelier_core::error::CoreError;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use crate::views::pages::ErrorPage;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce a rendered HTML error page.
///
/// Validation and authorization failures on form submissions are *not*
/// errors of this type: they re-render the originating form with a
/// violation list and a 200 status.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `atelier_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx. Never swallowed: a failed write surfaces
    /// as a 500 instead of a false-success redirect.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A template rendering error from askama.
    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    /// A session load/store error.
    #[error("Session error: {0}")]
    Session(#[from] tower_sessions::session::Error),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    format!("{entity} with id {id} not found."),
                ),
                CoreError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg.clone()),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    internal_error_page()
                }
            },
            AppError::Database(err) => classify_sqlx_error(err),
            AppError::Template(err) => {
                tracing::error!(error = %err, "Template rendering error");
                internal_error_page()
            }
            AppError::Session(err) => {
                tracing::error!(error = %err, "Session error");
                internal_error_page()
            }
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                internal_error_page()
            }
        };

        let page = ErrorPage {
            logged_in: false,
            status: status.as_u16(),
            message: message.clone(),
        };
        match page.render() {
            Ok(html) => (status, Html(html)).into_response(),
            // Rendering the error page itself failed; fall back to plain text.
            Err(_) => (status, message).into_response(),
        }
    }
}

fn internal_error_page() -> (StatusCode, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "An internal error occurred.".to_string(),
    )
}

/// Classify a sqlx error into an HTTP status and message.
///
/// `RowNotFound` maps to 404; everything else maps to 500 with a sanitized
/// message, logged at error level.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, String) {
    match err {
        sqlx::Error::RowNotFound => (StatusCode::NOT_FOUND, "Resource not found.".to_string()),
        other => {
            tracing::error!(error = %other, "Database error");
            internal_error_page()
        }
    }
}
