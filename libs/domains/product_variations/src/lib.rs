//! Product Variations Domain
//!
//! Variations hang off a product (`/products/{id}/variations`) and
//! carry size, color, dimensions and their own prices. Rows cascade away
//! with a hard-deleted product; soft-deleting the product leaves them in
//! place but unreachable, since every route resolves the live parent first.

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

pub use error::{VariationError, VariationResult};
pub use handlers::ApiDoc;
pub use models::{CreateProductVariation, ProductVariation, UpdateProductVariation, VariationField};
pub use postgres::PgVariationRepository;
pub use repository::{InMemoryVariationRepository, VariationRepository};
pub use service::VariationService;
