//! Error handling middleware - RFC 7807 compliant responses.

use actix_web::error::JsonPayloadError;
use actix_web::{HttpRequest, HttpResponse, ResponseError, http::StatusCode};
use board_core::error::{RepoError, ValidationError};
use board_shared::{ErrorResponse, InvalidParam};
use serde::de::DeserializeOwned;
use std::fmt;

/// Application-level error type that converts to RFC 7807 responses.
#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    PayloadTooLarge(usize),
    Validation(Vec<InvalidParam>),
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::PayloadTooLarge(limit) => {
                write!(f, "Payload larger than {} bytes", limit)
            }
            AppError::Validation(params) => write!(f, "Validation errors: {:?}", params),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

/// The status table: every error kind names its own HTTP status.
impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error = match self {
            AppError::BadRequest(detail) => ErrorResponse::bad_request(detail),
            AppError::PayloadTooLarge(limit) => ErrorResponse::new(413, "Payload Too Large")
                .with_detail(format!("Request body exceeds {} bytes", limit)),
            AppError::Validation(params) => ErrorResponse::validation_failed(params.clone()),
            AppError::Internal(detail) => {
                // Log internal errors
                tracing::error!("Internal error: {}", detail);
                ErrorResponse::internal_error()
            }
        };

        HttpResponse::build(self.status_code()).json(error)
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::Validation(vec![InvalidParam::new(err.field(), err.to_string())])
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Connection(msg) => {
                tracing::error!("Database connection error: {}", msg);
                AppError::Internal("Database error".to_string())
            }
            RepoError::Query(msg) => {
                tracing::error!("Database query error: {}", msg);
                AppError::Internal("Database error".to_string())
            }
        }
    }
}

/// `JsonConfig` error handler: turns body extraction failures into
/// [`AppError`] so they share the problem-document format.
///
/// Handlers extract a `serde_json::Value`, so anything reaching here is a
/// syntax, content-type or size problem rather than a shape mismatch.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    tracing::debug!(error = %err, "Rejected request body");

    let app_error = match &err {
        JsonPayloadError::Overflow { limit } | JsonPayloadError::OverflowKnownLength { limit, .. } => {
            AppError::PayloadTooLarge(*limit)
        }
        _ => AppError::BadRequest(err.to_string()),
    };

    app_error.into()
}

/// Deserialize a parsed JSON body into the request type, naming the
/// offending field when it does not fit.
///
/// A wrong-typed field is located by its path; a missing field is reported
/// at the root, so its name is taken from serde's message instead.
pub fn deserialize_body<T: DeserializeOwned>(body: serde_json::Value) -> AppResult<T> {
    serde_path_to_error::deserialize(body).map_err(|err| {
        let path = err.path().to_string();
        let message = err.inner().to_string();
        let name = if path == "." {
            missing_field_name(&message).unwrap_or("body").to_string()
        } else {
            path
        };
        AppError::Validation(vec![InvalidParam::new(name, message)])
    })
}

/// Extracts `username` from serde's "missing field `username` at ...".
fn missing_field_name(message: &str) -> Option<&str> {
    let rest = message.strip_prefix("missing field `")?;
    rest.split('`').next()
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
