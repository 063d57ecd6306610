use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use database::UnknownField;
use domain_products::ProductError;
use sea_orm::DbErr;
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Debug, Error)]
pub enum VariationError {
    #[error("Product variation not found. The record may have been deleted.")]
    NotFound,

    /// The parent product is missing or soft-deleted.
    #[error("Product not found. The record may have been deleted.")]
    ProductNotFound,

    #[error(transparent)]
    UnknownField(#[from] UnknownField),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type VariationResult<T> = Result<T, VariationError>;

impl From<DbErr> for VariationError {
    fn from(err: DbErr) -> Self {
        VariationError::Internal(format!("Database error: {}", err))
    }
}

impl From<ProductError> for VariationError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::NotFound => VariationError::ProductNotFound,
            other => VariationError::Internal(other.to_string()),
        }
    }
}

impl From<VariationError> for AppError {
    fn from(err: VariationError) -> Self {
        match err {
            VariationError::NotFound | VariationError::ProductNotFound => {
                AppError::NotFound(err.to_string())
            }
            VariationError::UnknownField(e) => AppError::UnprocessableEntity(e.to_string()),
            VariationError::Validation(e) => AppError::ValidationFailed(e),
            VariationError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for VariationError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
