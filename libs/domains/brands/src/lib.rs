//! Brands Domain
//!
//! Brands group products in the shop catalogue. A brand has a unique slug
//! and is never physically removed: deleting one stamps `deleted_at`, after
//! which every read path treats it as missing.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, response envelope
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← validation, slug uniqueness, filter resolution
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← data access (trait + in-memory + Postgres)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Brand, DTOs, searchable fields
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_brands::{handlers, InMemoryBrandRepository, BrandService};
//!
//! let service = BrandService::new(InMemoryBrandRepository::new());
//! let router = handlers::router(service);
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

pub use error::{BrandError, BrandResult};
pub use handlers::ApiDoc;
pub use models::{Brand, BrandField, CreateBrand, UpdateBrand};
pub use postgres::PgBrandRepository;
pub use repository::{BrandRepository, InMemoryBrandRepository};
pub use service::BrandService;
