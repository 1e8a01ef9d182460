//! Universal error handling for the API

use aide::{
    generate::GenContext,
    openapi::{Operation, Response as OpenApiResponse},
    OperationOutput,
};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use schemars::JsonSchema;
use serde::Serialize;

use crate::upload::UploadError;

/// Public message for any failure the client cannot act on
pub const SERVER_ERROR_MESSAGE: &str = "Server error";

/// API error response envelope shared by every failing endpoint
#[derive(Debug, Serialize, JsonSchema)]
pub struct ApiErrorResponse {
    /// Always `false` for errors
    ok: bool,
    /// Human-readable error message
    error: &'static str,
}

/// Application error type that wraps the API error response
#[derive(Debug)]
pub struct AppError {
    status: StatusCode,
    code: &'static str,
    inner: ApiErrorResponse,
}

impl AppError {
    /// Create a new application error
    #[must_use]
    pub const fn new(status: StatusCode, code: &'static str, msg: &'static str) -> Self {
        Self {
            status,
            code,
            inner: ApiErrorResponse {
                ok: false,
                error: msg,
            },
        }
    }

    /// Generic `500` that leaks no detail to the client
    #[must_use]
    pub const fn internal() -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "internal_error",
            SERVER_ERROR_MESSAGE,
        )
    }

    /// `404` for routes that do not exist
    #[must_use]
    pub const fn not_found() -> Self {
        Self::new(StatusCode::NOT_FOUND, "not_found", "Not found")
    }

    /// HTTP status this error is reported with
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    /// Message sent to the client
    #[must_use]
    pub const fn message(&self) -> &'static str {
        self.inner.error
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log the error based on status code
        match self.status.as_u16() {
            400..=499 => tracing::warn!("Client error: {} - {}", self.code, self.inner.error),
            500..=599 => tracing::error!("Server error: {} - {}", self.code, self.inner.error),
            _ => {}
        }

        (self.status, Json(self.inner)).into_response()
    }
}

/// Convert upload errors to application errors
impl From<UploadError> for AppError {
    fn from(err: UploadError) -> Self {
        match &err {
            UploadError::MissingRequiredImages => {
                tracing::debug!("Rejecting request: {err}");
                Self::new(
                    StatusCode::BAD_REQUEST,
                    "missing_required_images",
                    "Please provide at least front and side photos.",
                )
            }
            UploadError::FileTooLarge { .. } | UploadError::BodyTooLarge => {
                tracing::debug!("Rejecting request: {err}");
                Self::new(StatusCode::PAYLOAD_TOO_LARGE, "file_too_large", "File too large")
            }
            UploadError::FieldTooLarge { .. } => {
                tracing::debug!("Rejecting request: {err}");
                Self::new(StatusCode::PAYLOAD_TOO_LARGE, "field_too_large", "Field too large")
            }
            UploadError::UnexpectedField(_) => {
                tracing::error!("Rejecting multipart upload: {err}");
                Self::internal()
            }
            UploadError::Malformed(detail) => {
                tracing::error!("Failed to read multipart upload: {detail}");
                Self::internal()
            }
        }
    }
}

impl OperationOutput for AppError {
    type Inner = ApiErrorResponse;

    fn operation_response(
        ctx: &mut GenContext,
        operation: &mut Operation,
    ) -> Option<OpenApiResponse> {
        Json::<ApiErrorResponse>::operation_response(ctx, operation)
    }
}
