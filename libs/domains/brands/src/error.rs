use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use database::UnknownField;
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;
use validator::ValidationErrors;

pub const SLUG_TAKEN: &str = "The slug has already been taken.";

#[derive(Debug, Error)]
pub enum BrandError {
    #[error("Brand not found. The record may have been deleted.")]
    NotFound,

    #[error("{SLUG_TAKEN}")]
    SlugTaken,

    #[error(transparent)]
    UnknownField(#[from] UnknownField),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type BrandResult<T> = Result<T, BrandError>;

impl From<DbErr> for BrandError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => BrandError::SlugTaken,
            _ => BrandError::Internal(format!("Database error: {}", err)),
        }
    }
}

impl From<BrandError> for AppError {
    fn from(err: BrandError) -> Self {
        match err {
            BrandError::NotFound => AppError::NotFound(err.to_string()),
            BrandError::SlugTaken => AppError::field("slug", SLUG_TAKEN),
            BrandError::UnknownField(e) => AppError::UnprocessableEntity(e.to_string()),
            BrandError::Validation(e) => AppError::ValidationFailed(e),
            BrandError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for BrandError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
