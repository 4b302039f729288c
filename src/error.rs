use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

use crate::services::drill_down::DrillDownError;
use crate::services::validation::ValidationError;

/// Failure talking to the travel backend.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("backend returned HTTP {status}: {detail}")]
    Status { status: u16, detail: String },
    #[error("failed to decode backend response: {0}")]
    Decode(String),
    #[error("{0}")]
    Rejected(String),
    #[error("invalid backend url: {0}")]
    Url(#[from] url::ParseError),
}

impl ApiError {
    /// Message suitable for showing to the user.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Status { detail, status } if detail.is_empty() => format!("HTTP {}", status),
            ApiError::Status { detail, .. } => detail.clone(),
            ApiError::Rejected(message) => message.clone(),
            other => other.to_string(),
        }
    }
}

/// Errors surfaced by the page handlers.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(#[from] ValidationError),
    #[error("{0}")]
    Navigation(#[from] DrillDownError),
    #[error("{0}")]
    Backend(#[from] ApiError),
    #[error("template error: {0}")]
    Render(#[from] handlebars::RenderError),
    #[error("upload error: {0}")]
    Upload(String),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Navigation(_) => StatusCode::CONFLICT,
            AppError::Backend(_) => StatusCode::BAD_GATEWAY,
            AppError::Upload(_) => StatusCode::BAD_REQUEST,
            AppError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let message = match self {
            AppError::Render(err) => {
                log::error!("Template rendering failed: {}", err);
                "Something went wrong. Please try again.".to_string()
            }
            AppError::Backend(err) => {
                log::warn!("Backend call failed: {}", err);
                err.user_message()
            }
            other => {
                log::info!("Request rejected: {}", other);
                other.to_string()
            }
        };

        HttpResponse::build(status)
            .content_type("text/html; charset=utf-8")
            .body(crate::views::notice_html(&message, "error"))
    }
}
