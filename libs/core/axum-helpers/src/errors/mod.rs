pub mod codes;
pub mod handlers;
pub mod responses;

pub use codes::ErrorCode;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::DbErr;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;
use utoipa::ToSchema;
use validator::{ValidationErrors, ValidationErrorsKind};

/// Field name to the list of messages describing what is wrong with it.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

pub const VALIDATION_MESSAGE: &str = "Validation error";
pub const INTERNAL_MESSAGE: &str = "An unexpected error occurred.";

/// Failure envelope shared by every endpoint.
///
/// ```json
/// {
///   "success": false,
///   "message": "Validation error",
///   "errors": { "slug": ["The slug has already been taken."] }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
    /// Present only for field-level validation failures.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<FieldErrors>,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            errors: None,
        }
    }

    pub fn with_errors(message: impl Into<String>, errors: FieldErrors) -> Self {
        Self {
            success: false,
            message: message.into(),
            errors: Some(errors),
        }
    }
}

/// Application error type that can be converted to HTTP responses.
///
/// Not-found and validation failures both answer 422; only authentication
/// failures use 401. Server-side failures are logged in full and answered
/// with a generic message.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("Validation error: {0:?}")]
    Validation(FieldErrors),

    #[error("Validation error: {0}")]
    ValidationFailed(#[from] ValidationErrors),

    #[error("JSON extraction error: {0}")]
    JsonExtractorRejection(#[from] JsonRejection),

    #[error("Invalid identifier: {0}")]
    InvalidUuid(String),

    #[error("Invalid upload: {0}")]
    InvalidUpload(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Unprocessable Entity: {0}")]
    UnprocessableEntity(String),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal Server Error: {0}")]
    InternalServerError(String),

    #[error("Service Unavailable: {0}")]
    ServiceUnavailable(String),
}

impl AppError {
    /// A validation failure on a single field.
    pub fn field(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation(BTreeMap::from([(field.into(), vec![message.into()])]))
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Database(_) | Self::Io(_) | Self::InternalServerError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            Self::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    pub fn error_code(&self) -> ErrorCode {
        match self {
            Self::Validation(_) | Self::ValidationFailed(_) => ErrorCode::ValidationError,
            Self::JsonExtractorRejection(_) => ErrorCode::InvalidJson,
            Self::InvalidUuid(_) => ErrorCode::InvalidUuid,
            Self::InvalidUpload(_) => ErrorCode::InvalidUpload,
            Self::Unauthorized(_) => ErrorCode::Unauthorized,
            Self::NotFound(_) => ErrorCode::NotFound,
            Self::UnprocessableEntity(_) => ErrorCode::Unprocessable,
            Self::Database(_) => ErrorCode::DatabaseError,
            Self::Io(_) => ErrorCode::IoError,
            Self::InternalServerError(_) => ErrorCode::InternalError,
            Self::ServiceUnavailable(_) => ErrorCode::ServiceUnavailable,
        }
    }

    fn into_body(self) -> ErrorResponse {
        match self {
            Self::Validation(errors) => ErrorResponse::with_errors(VALIDATION_MESSAGE, errors),
            Self::ValidationFailed(e) => {
                ErrorResponse::with_errors(VALIDATION_MESSAGE, field_errors(&e))
            }
            Self::InvalidUpload(msg) => ErrorResponse::with_errors(
                VALIDATION_MESSAGE,
                BTreeMap::from([("image".to_string(), vec![msg])]),
            ),
            Self::JsonExtractorRejection(e) => ErrorResponse::new(e.body_text()),
            Self::InvalidUuid(id) => ErrorResponse::new(format!("Invalid identifier: {id}")),
            Self::Unauthorized(msg)
            | Self::NotFound(msg)
            | Self::UnprocessableEntity(msg)
            | Self::ServiceUnavailable(msg) => ErrorResponse::new(msg),
            Self::Database(_) | Self::Io(_) | Self::InternalServerError(_) => {
                ErrorResponse::new(INTERNAL_MESSAGE)
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.error_code();

        if code.is_server_error() {
            tracing::error!(error_code = code.code(), error = ?self, "Request failed");
        } else {
            tracing::info!(error_code = code.code(), "{}", self);
        }

        (status, Json(self.into_body())).into_response()
    }
}

/// Flattens validator output into `field -> [messages]`.
///
/// Rules without a custom message get a sentence built from the rule code
/// and its parameters, e.g. "The name field is required.".
pub fn field_errors(errors: &ValidationErrors) -> FieldErrors {
    let mut out = FieldErrors::new();
    collect_field_errors(errors, None, &mut out);
    out
}

fn collect_field_errors(errors: &ValidationErrors, prefix: Option<&str>, out: &mut FieldErrors) {
    for (field, kind) in errors.errors() {
        let key = match prefix {
            Some(prefix) => format!("{prefix}.{field}"),
            None => field.to_string(),
        };
        match kind {
            ValidationErrorsKind::Field(list) => {
                let messages = list.iter().map(|err| describe(&key, err)).collect();
                out.insert(key, messages);
            }
            ValidationErrorsKind::Struct(inner) => collect_field_errors(inner, Some(&key), out),
            ValidationErrorsKind::List(items) => {
                for (index, inner) in items {
                    collect_field_errors(inner, Some(&format!("{key}.{index}")), out);
                }
            }
        }
    }
}

fn describe(field: &str, err: &validator::ValidationError) -> String {
    if let Some(message) = &err.message {
        return message.to_string();
    }
    let name = field.replace('_', " ");
    let param = |key: &str| err.params.get(key).map(|v| v.to_string());
    match err.code.as_ref() {
        "required" => format!("The {name} field is required."),
        "email" => format!("The {name} field must be a valid email address."),
        "url" => format!("The {name} field must be a valid URL."),
        "length" => match (param("min"), param("max")) {
            (Some(min), None) => format!("The {name} field must be at least {min} characters."),
            (_, Some(max)) => {
                format!("The {name} field must not be greater than {max} characters.")
            }
            _ => format!("The {name} field has an invalid length."),
        },
        "range" => match (param("min"), param("max")) {
            (Some(min), None) => format!("The {name} field must be at least {min}."),
            (_, Some(max)) => format!("The {name} field must not be greater than {max}."),
            _ => format!("The {name} field is out of range."),
        },
        _ => format!("The {name} field is invalid."),
    }
}
