use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use database::UnknownField;
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;
use validator::ValidationErrors;

pub const EMAIL_TAKEN: &str = "The email has already been taken.";

#[derive(Debug, Error)]
pub enum CustomerError {
    #[error("Customer not found. The record may have been deleted.")]
    NotFound,

    #[error("{EMAIL_TAKEN}")]
    EmailTaken,

    #[error(transparent)]
    UnknownField(#[from] UnknownField),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type CustomerResult<T> = Result<T, CustomerError>;

impl From<DbErr> for CustomerError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => CustomerError::EmailTaken,
            _ => CustomerError::Internal(format!("Database error: {}", err)),
        }
    }
}

impl From<CustomerError> for AppError {
    fn from(err: CustomerError) -> Self {
        match err {
            CustomerError::NotFound => AppError::NotFound(err.to_string()),
            CustomerError::EmailTaken => AppError::field("email", EMAIL_TAKEN),
            CustomerError::UnknownField(e) => AppError::UnprocessableEntity(e.to_string()),
            CustomerError::Validation(e) => AppError::ValidationFailed(e),
            CustomerError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for CustomerError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
