use axum::{
    Router,
    extract::{OriginalUri, Query, State},
    routing::get,
};
use axum_helpers::{
    ApiResponse, Paginated, UuidPath, UuidPathPair, ValidatedJson,
    errors::responses::{InternalServerErrorResponse, UnauthorizedResponse, UnprocessableResponse},
};
use database::SearchParams;
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::VariationResult;
use crate::models::{CreateProductVariation, ProductVariation, UpdateProductVariation};
use crate::repository::VariationRepository;
use crate::service::VariationService;

pub const TAG: &str = "Product Variations";

#[derive(OpenApi)]
#[openapi(
    paths(
        list_variations,
        create_variation,
        get_variation,
        update_variation,
        delete_variation
    ),
    components(
        schemas(ProductVariation, CreateProductVariation, UpdateProductVariation),
        responses(UnprocessableResponse, UnauthorizedResponse, InternalServerErrorResponse)
    ),
    tags((name = TAG, description = "Variations nested under a product"))
)]
pub struct ApiDoc;

/// Routes relative to the products mount point. The product segment is
/// named `{id}` to line up with the product routes it is merged with.
pub fn router<R: VariationRepository + 'static>(service: VariationService<R>) -> Router {
    Router::new()
        .route(
            "/{id}/variations",
            get(list_variations).post(create_variation),
        )
        .route(
            "/{id}/variations/{variation_id}",
            get(get_variation)
                .put(update_variation)
                .patch(update_variation)
                .delete(delete_variation),
        )
        .with_state(Arc::new(service))
}

#[utoipa::path(
    get,
    path = "/{id}/variations",
    tag = TAG,
    params(
        ("id" = Uuid, Path, description = "Product ID"),
        ("page" = Option<u64>, Query, description = "1-indexed page, default 1"),
        ("per_page" = Option<u64>, Query, description = "Page size, default 10"),
        ("size" = Option<String>, Query, description = "Substring of the size"),
    ),
    responses(
        (status = 200, description = "Product variations retrieved successfully", body = ApiResponse<Paginated<ProductVariation>>),
        (status = 401, response = UnauthorizedResponse),
        (status = 422, response = UnprocessableResponse),
        (status = 500, response = InternalServerErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
async fn list_variations<R: VariationRepository>(
    State(service): State<Arc<VariationService<R>>>,
    UuidPath(product_id): UuidPath,
    OriginalUri(uri): OriginalUri,
    Query(query): Query<BTreeMap<String, String>>,
) -> VariationResult<ApiResponse<Paginated<ProductVariation>>> {
    let page = service
        .search(product_id, SearchParams::from_query(query))
        .await?;
    let page = Paginated::new(page.items, page.total, page.page, page.per_page, uri.path());
    Ok(ApiResponse::ok(
        "Product variations retrieved successfully",
        page,
    ))
}

#[utoipa::path(
    post,
    path = "/{id}/variations",
    tag = TAG,
    params(("id" = Uuid, Path, description = "Product ID")),
    request_body = CreateProductVariation,
    responses(
        (status = 200, description = "Product variation created successfully", body = ApiResponse<ProductVariation>),
        (status = 401, response = UnauthorizedResponse),
        (status = 422, response = UnprocessableResponse),
        (status = 500, response = InternalServerErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
async fn create_variation<R: VariationRepository>(
    State(service): State<Arc<VariationService<R>>>,
    UuidPath(product_id): UuidPath,
    ValidatedJson(input): ValidatedJson<CreateProductVariation>,
) -> VariationResult<ApiResponse<ProductVariation>> {
    let variation = service.create(product_id, input).await?;
    Ok(ApiResponse::ok(
        "Product variation created successfully",
        variation,
    ))
}

#[utoipa::path(
    get,
    path = "/{id}/variations/{variation_id}",
    tag = TAG,
    params(
        ("id" = Uuid, Path, description = "Product ID"),
        ("variation_id" = Uuid, Path, description = "Variation ID"),
    ),
    responses(
        (status = 200, description = "Product variation retrieved successfully", body = ApiResponse<ProductVariation>),
        (status = 401, response = UnauthorizedResponse),
        (status = 422, response = UnprocessableResponse),
        (status = 500, response = InternalServerErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
async fn get_variation<R: VariationRepository>(
    State(service): State<Arc<VariationService<R>>>,
    UuidPathPair(product_id, id): UuidPathPair,
    Query(params): Query<BTreeMap<String, String>>,
) -> VariationResult<ApiResponse<ProductVariation>> {
    let variation = service.find_one(product_id, id, &params).await?;
    Ok(ApiResponse::ok(
        "Product variation retrieved successfully",
        variation,
    ))
}

#[utoipa::path(
    put,
    path = "/{id}/variations/{variation_id}",
    tag = TAG,
    params(
        ("id" = Uuid, Path, description = "Product ID"),
        ("variation_id" = Uuid, Path, description = "Variation ID"),
    ),
    request_body = UpdateProductVariation,
    responses(
        (status = 200, description = "Product variation updated successfully", body = ApiResponse<ProductVariation>),
        (status = 401, response = UnauthorizedResponse),
        (status = 422, response = UnprocessableResponse),
        (status = 500, response = InternalServerErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
async fn update_variation<R: VariationRepository>(
    State(service): State<Arc<VariationService<R>>>,
    UuidPathPair(product_id, id): UuidPathPair,
    ValidatedJson(input): ValidatedJson<UpdateProductVariation>,
) -> VariationResult<ApiResponse<ProductVariation>> {
    let variation = service.update(product_id, id, input).await?;
    Ok(ApiResponse::ok(
        "Product variation updated successfully",
        variation,
    ))
}

#[utoipa::path(
    delete,
    path = "/{id}/variations/{variation_id}",
    tag = TAG,
    params(
        ("id" = Uuid, Path, description = "Product ID"),
        ("variation_id" = Uuid, Path, description = "Variation ID"),
    ),
    responses(
        (status = 200, description = "Product variation deleted successfully", body = ApiResponse<Vec<String>>),
        (status = 401, response = UnauthorizedResponse),
        (status = 422, response = UnprocessableResponse),
        (status = 500, response = InternalServerErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
async fn delete_variation<R: VariationRepository>(
    State(service): State<Arc<VariationService<R>>>,
    UuidPathPair(product_id, id): UuidPathPair,
) -> VariationResult<ApiResponse<Vec<Value>>> {
    service.delete(product_id, id).await?;
    Ok(ApiResponse::empty("Product variation deleted successfully"))
}
