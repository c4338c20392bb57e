use axum::extract::rejection::JsonRejection;
use axum::extract::FromRequest;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use shortlink_core::ShortlinkError;
use std::any::Any;
use thiserror::Error;
use tracing::{error, warn};

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    /// The request body could not be read as JSON.
    #[error(transparent)]
    Json(#[from] JsonRejection),
    /// The request body failed validation before reaching the store.
    #[error("{0}")]
    Validation(String),
    #[error(transparent)]
    Shortlink(#[from] ShortlinkError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Json(rejection) => rejection.status(),
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Shortlink(ShortlinkError::InvalidInput(_)) => StatusCode::BAD_REQUEST,
            AppError::Shortlink(ShortlinkError::NotFound(_)) => StatusCode::NOT_FOUND,
            AppError::Shortlink(ShortlinkError::Rejected) => StatusCode::TOO_MANY_REQUESTS,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        warn!(status = %status, error = %self, "request failed");
        error_body(status, self.to_string())
    }
}

/// JSON body extractor whose rejections use the same `{"error": ..}` shape
/// as every other failure.
#[derive(Debug, FromRequest)]
#[from_request(via(Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Turns a handler panic into a 500 with the usual error body.
pub fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    error!(panic = detail, "request handler panicked");
    error_body(
        StatusCode::INTERNAL_SERVER_ERROR,
        "internal server error".to_string(),
    )
}

fn error_body(status: StatusCode, message: String) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}
