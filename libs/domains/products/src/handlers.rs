use axum::{
    Router,
    extract::{OriginalUri, Query, State},
    routing::get,
};
use axum_helpers::{
    ApiResponse, Paginated, UuidPath, ValidatedJson,
    errors::responses::{InternalServerErrorResponse, UnauthorizedResponse, UnprocessableResponse},
};
use database::SearchParams;
use domain_brands::Brand;
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::ProductResult;
use crate::media::{self, Media, ProductImage, handlers::ImageForm};
use crate::models::{CreateProduct, Product, ProductType, UpdateProduct};
use crate::repository::ProductRepository;
use crate::service::ProductService;

pub const TAG: &str = "Products";

/// OpenAPI documentation for the Products API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_products,
        create_product,
        get_product,
        update_product,
        delete_product,
        media::handlers::upload_image,
        media::handlers::get_image,
    ),
    components(
        schemas(Product, ProductType, Brand, CreateProduct, UpdateProduct, Media, ProductImage, ImageForm),
        responses(UnprocessableResponse, UnauthorizedResponse, InternalServerErrorResponse)
    ),
    tags((name = TAG, description = "Product management endpoints"))
)]
pub struct ApiDoc;

/// Create the product router (CRUD only; see [`media::handlers::image_router`])
pub fn router<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route(
            "/{id}",
            get(get_product)
                .put(update_product)
                .patch(update_product)
                .delete(delete_product),
        )
        .with_state(Arc::new(service))
}

/// List products
///
/// Every product column is a filter: `?sku=A-&featured=1` keeps featured
/// products whose sku contains "A-". Flags read as `1` or `0`.
#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    params(
        ("page" = Option<u64>, Query, description = "1-indexed page, default 1"),
        ("per_page" = Option<u64>, Query, description = "Page size, default 10"),
        ("name" = Option<String>, Query, description = "Substring of the product name"),
        ("sku" = Option<String>, Query, description = "Substring of the SKU"),
    ),
    responses(
        (status = 200, description = "Products retrieved successfully", body = ApiResponse<Paginated<Product>>),
        (status = 401, response = UnauthorizedResponse),
        (status = 422, response = UnprocessableResponse),
        (status = 500, response = InternalServerErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
async fn list_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    OriginalUri(uri): OriginalUri,
    Query(query): Query<BTreeMap<String, String>>,
) -> ProductResult<ApiResponse<Paginated<Product>>> {
    let page = service.search(SearchParams::from_query(query)).await?;
    let page = Paginated::new(page.items, page.total, page.page, page.per_page, uri.path());
    Ok(ApiResponse::ok("Products retrieved successfully", page))
}

#[utoipa::path(
    post,
    path = "",
    tag = TAG,
    request_body = CreateProduct,
    responses(
        (status = 200, description = "Product created successfully", body = ApiResponse<Product>),
        (status = 401, response = UnauthorizedResponse),
        (status = 422, response = UnprocessableResponse),
        (status = 500, response = InternalServerErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
async fn create_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateProduct>,
) -> ProductResult<ApiResponse<Product>> {
    let product = service.create(input).await?;
    Ok(ApiResponse::ok("Product created successfully", product))
}

#[utoipa::path(
    get,
    path = "/{id}",
    tag = TAG,
    params(("id" = Uuid, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product retrieved successfully", body = ApiResponse<Product>),
        (status = 401, response = UnauthorizedResponse),
        (status = 422, response = UnprocessableResponse),
        (status = 500, response = InternalServerErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
async fn get_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    UuidPath(id): UuidPath,
    Query(params): Query<BTreeMap<String, String>>,
) -> ProductResult<ApiResponse<Product>> {
    let product = service.find_one(id, &params).await?;
    Ok(ApiResponse::ok("Product retrieved successfully", product))
}

#[utoipa::path(
    put,
    path = "/{id}",
    tag = TAG,
    params(("id" = Uuid, Path, description = "Product ID")),
    request_body = UpdateProduct,
    responses(
        (status = 200, description = "Product updated successfully", body = ApiResponse<Product>),
        (status = 401, response = UnauthorizedResponse),
        (status = 422, response = UnprocessableResponse),
        (status = 500, response = InternalServerErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
async fn update_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    UuidPath(id): UuidPath,
    ValidatedJson(input): ValidatedJson<UpdateProduct>,
) -> ProductResult<ApiResponse<Product>> {
    let product = service.update(id, input).await?;
    Ok(ApiResponse::ok("Product updated successfully", product))
}

#[utoipa::path(
    delete,
    path = "/{id}",
    tag = TAG,
    params(("id" = Uuid, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product soft deleted successfully", body = ApiResponse<Vec<String>>),
        (status = 401, response = UnauthorizedResponse),
        (status = 422, response = UnprocessableResponse),
        (status = 500, response = InternalServerErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
async fn delete_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    UuidPath(id): UuidPath,
) -> ProductResult<ApiResponse<Vec<Value>>> {
    service.delete(id).await?;
    Ok(ApiResponse::empty("Product soft deleted successfully"))
}
