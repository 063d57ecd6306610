//! OpenAPI documentation configuration

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

/// Combined OpenAPI documentation for the shop API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Shop API",
        version = "0.1.0",
        description = "E-commerce back-office API: brands, customers, products and their variations"
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    nest(
        (path = "/api", api = domain_users::ApiDoc),
        (path = "/api/brands", api = domain_brands::ApiDoc),
        (path = "/api/customers", api = domain_customers::ApiDoc),
        (path = "/api/products", api = domain_products::ApiDoc),
        (path = "/api/products", api = domain_product_variations::ApiDoc)
    ),
    modifiers(&BearerAuth)
)]
pub struct ApiDoc;

/// Registers the `bearer_auth` scheme referenced by protected operations.
struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_resource_is_documented() {
        let doc = ApiDoc::openapi();
        for path in [
            "/api/login",
            "/api/register",
            "/api/me",
            "/api/brands",
            "/api/brands/{id}",
            "/api/customers/{id}",
            "/api/products/{id}/upload-image",
            "/api/products/{id}/variations/{variation_id}",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }

    #[test]
    fn test_bearer_scheme_is_registered() {
        let doc = ApiDoc::openapi();
        let components = doc.components.unwrap();
        assert!(components.security_schemes.contains_key("bearer_auth"));
    }
}
