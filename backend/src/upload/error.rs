//! Error types for reading measurement uploads

use axum::{extract::multipart::MultipartError, http::StatusCode};
use thiserror::Error;

/// Errors that can occur while reading or validating an upload
#[derive(Error, Debug)]
pub enum UploadError {
    /// `front` or `side` photo absent or empty
    #[error("missing required images: front and side")]
    MissingRequiredImages,

    /// A single file exceeded the per-file limit
    #[error("file `{field}` exceeds {limit} bytes")]
    FileTooLarge {
        /// Form field the file was uploaded under
        field: &'static str,
        /// Limit in bytes
        limit: usize,
    },

    /// A text field exceeded the per-field limit
    #[error("text field `{field}` exceeds {limit} bytes")]
    FieldTooLarge {
        /// Name of the offending field
        field: String,
        /// Limit in bytes
        limit: usize,
    },

    /// A file part arrived under a name that takes no photo
    #[error("unexpected file field `{0}`")]
    UnexpectedField(String),

    /// The whole request body exceeded the body limit
    #[error("request body exceeds the configured limit")]
    BodyTooLarge,

    /// The body is not a readable `multipart/form-data` stream
    #[error("malformed multipart body: {0}")]
    Malformed(String),
}

impl From<MultipartError> for UploadError {
    fn from(err: MultipartError) -> Self {
        if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
            Self::BodyTooLarge
        } else {
            Self::Malformed(err.body_text())
        }
    }
}
