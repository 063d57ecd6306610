use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use database::UnknownField;
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;
use validator::ValidationErrors;

use crate::models::UniqueField;

pub const INVALID_BRAND: &str = "The selected shop brand id is invalid.";
pub const NO_IMAGE: &str = "Product has no image";

#[derive(Debug, Error)]
pub enum ProductError {
    #[error("Product not found. The record may have been deleted.")]
    NotFound,

    #[error("The {0} has already been taken.")]
    Taken(UniqueField),

    #[error("{INVALID_BRAND}")]
    InvalidBrand,

    #[error(transparent)]
    UnknownField(#[from] UnknownField),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationErrors),

    /// Rejected upload; the message is reported under `errors.image`.
    #[error("{0}")]
    InvalidImage(String),

    #[error("{NO_IMAGE}")]
    NoImage,

    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type ProductResult<T> = Result<T, ProductError>;

impl From<DbErr> for ProductError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(detail)) => {
                // Postgres names the constraint after the column, e.g. shop_products_sku_key.
                let field = UniqueField::ALL
                    .into_iter()
                    .find(|f| detail.contains(&format!("_{}_", f.as_ref())))
                    .unwrap_or(UniqueField::Slug);
                ProductError::Taken(field)
            }
            Some(SqlErr::ForeignKeyConstraintViolation(_)) => ProductError::InvalidBrand,
            _ => ProductError::Internal(format!("Database error: {}", err)),
        }
    }
}

impl From<ProductError> for AppError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::NotFound | ProductError::NoImage => AppError::NotFound(err.to_string()),
            ProductError::Taken(field) => AppError::field(field.as_ref(), err.to_string()),
            ProductError::InvalidBrand => AppError::field("shop_brand_id", INVALID_BRAND),
            ProductError::UnknownField(e) => AppError::UnprocessableEntity(e.to_string()),
            ProductError::Validation(e) => AppError::ValidationFailed(e),
            ProductError::InvalidImage(msg) => AppError::InvalidUpload(msg),
            ProductError::Storage(e) => AppError::Io(e),
            ProductError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
