//! Persistence plumbing shared by the shop domain crates.
//!
//! - [`postgres`]: pool configuration, connection with retry, migrations, health
//! - [`pagination`]: 1-indexed page requests and page results
//! - [`search`]: typed substring filters parsed from query parameters
//! - [`repository`]: soft-delete aware query helpers over sea-orm entities
//!
//! ```ignore
//! use database::postgres::{self, PostgresConfig};
//! use migration::Migrator;
//!
//! let db = postgres::connect_from_config_with_retry(PostgresConfig::new(url), None).await?;
//! postgres::run_migrations::<Migrator>(&db, "shop_api").await?;
//! ```

pub mod common;
pub mod pagination;
pub mod search;

#[cfg(feature = "postgres")]
pub mod postgres;

#[cfg(feature = "postgres")]
pub mod repository;

pub use common::{DatabaseError, DatabaseResult};
pub use pagination::{DEFAULT_PER_PAGE, MAX_PER_PAGE, Page, PageRequest};
pub use search::{Filter, SearchField, SearchParams, UnknownField, contains_ci, flag_text};

#[cfg(feature = "postgres")]
pub use repository::{BaseRepository, FilterColumn, SoftDelete, apply_filters};
