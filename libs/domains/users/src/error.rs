use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;
use validator::ValidationErrors;

pub const EMAIL_TAKEN: &str = "The email has already been taken.";

#[derive(Debug, Error)]
pub enum UserError {
    /// Unknown email and wrong password are reported the same way.
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("{EMAIL_TAKEN}")]
    EmailTaken,

    #[error("User not found")]
    NotFound,

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Password hashing error: {0}")]
    PasswordHash(String),

    #[error("Token error: {0}")]
    Token(eyre::Report),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type UserResult<T> = Result<T, UserError>;

impl From<DbErr> for UserError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => UserError::EmailTaken,
            _ => UserError::Internal(format!("Database error: {}", err)),
        }
    }
}

impl From<UserError> for AppError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::InvalidCredentials => AppError::Unauthorized(err.to_string()),
            UserError::EmailTaken => AppError::field("email", EMAIL_TAKEN),
            UserError::NotFound => AppError::NotFound(err.to_string()),
            UserError::Validation(e) => AppError::ValidationFailed(e),
            UserError::PasswordHash(_) | UserError::Token(_) | UserError::Internal(_) => {
                AppError::InternalServerError(err.to_string())
            }
        }
    }
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
