//! Route composition

pub mod health;

use axum::{Router, middleware::from_fn_with_state};
use axum_helpers::{JwtAuth, jwt_auth_middleware};
use domain_brands::{BrandService, PgBrandRepository};
use domain_customers::{CustomerService, PgCustomerRepository};
use domain_product_variations::{PgVariationRepository, VariationService};
use domain_products::media::{ImageService, MediaStorage, PgMediaRepository};
use domain_products::{PgProductRepository, ProductService};
use domain_users::{AuthService, PgUserRepository};
use std::sync::Arc;

use crate::state::AppState;

/// Finished routers of every domain, before mounting.
pub struct DomainRouters {
    /// `/register` and `/login`
    pub auth: Router,
    /// `/logout` and `/me`
    pub account: Router,
    pub brands: Router,
    pub customers: Router,
    /// Product CRUD merged with its image and variation routes
    pub products: Router,
}

/// Mounts the domains without the `/api` prefix, which `create_router`
/// adds. Everything except `auth` requires a bearer token.
pub fn compose(domains: DomainRouters, jwt: JwtAuth) -> Router {
    // route_layer keeps unmatched paths on the JSON 404 fallback instead of 401.
    let protected = Router::new()
        .nest("/brands", domains.brands)
        .nest("/customers", domains.customers)
        .nest("/products", domains.products)
        .merge(domains.account)
        .route_layer(from_fn_with_state(jwt, jwt_auth_middleware));

    Router::new().merge(domains.auth).merge(protected)
}

/// Postgres-backed services for every domain.
pub fn routes(state: &AppState) -> Router {
    let db = state.db.clone();

    let auth = Arc::new(AuthService::new(
        PgUserRepository::new(db.clone()),
        state.jwt.clone(),
    ));

    let products = ProductService::new(PgProductRepository::new(db.clone()));
    let images = ImageService::new(
        products.repository().clone(),
        PgMediaRepository::new(db.clone()),
        MediaStorage::new(state.config.media.root.clone(), state.config.media.url.clone()),
    );
    let variations = VariationService::new(PgVariationRepository::new(db.clone()));

    let domains = DomainRouters {
        auth: domain_users::handlers::public_router(auth.clone()),
        account: domain_users::handlers::protected_router(auth),
        brands: domain_brands::handlers::router(BrandService::new(PgBrandRepository::new(
            db.clone(),
        ))),
        customers: domain_customers::handlers::router(CustomerService::new(
            PgCustomerRepository::new(db),
        )),
        products: domain_products::handlers::router(products)
            .merge(domain_products::media::handlers::image_router(images))
            .merge(domain_product_variations::handlers::router(variations)),
    };

    compose(domains, state.jwt.clone())
}
