//! Products Domain
//!
//! Products optionally belong to a brand and carry stock, pricing and SEO
//! fields. Slug, SKU and barcode are each unique when set. Physical
//! dimensions live on product variations (see `domain_product_variations`);
//! `has_variations` flags products that use them.
//!
//! The [`media`] module holds the single image slot of a product: uploads
//! are written under the media root and recorded in the `media` table.
//!
//! ```rust,no_run
//! use domain_products::{handlers, media, InMemoryProductRepository, ProductService};
//!
//! let products = ProductService::new(InMemoryProductRepository::new());
//! let images = media::ImageService::new(
//!     products.repository().clone(),
//!     media::InMemoryMediaRepository::new(),
//!     media::MediaStorage::new("storage/app/public", "/storage"),
//! );
//! let router = handlers::router(products).merge(media::handlers::image_router(images));
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod media;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

pub use error::{ProductError, ProductResult};
pub use handlers::ApiDoc;
pub use models::{CreateProduct, Product, ProductField, ProductType, UniqueField, UpdateProduct};
pub use postgres::PgProductRepository;
pub use repository::{InMemoryProductRepository, ProductRepository};
pub use service::ProductService;
