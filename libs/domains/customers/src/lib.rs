//! Customers Domain
//!
//! Shop customers with a unique email address and a `male`/`female` gender.
//! Deleting a customer is a soft delete.
//!
//! ```rust,no_run
//! use domain_customers::{handlers, CustomerService, InMemoryCustomerRepository};
//!
//! let router = handlers::router(CustomerService::new(InMemoryCustomerRepository::new()));
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

pub use error::{CustomerError, CustomerResult};
pub use handlers::ApiDoc;
pub use models::{CreateCustomer, Customer, CustomerField, Gender, UpdateCustomer};
pub use postgres::PgCustomerRepository;
pub use repository::{CustomerRepository, InMemoryCustomerRepository};
pub use service::CustomerService;
