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
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::BrandResult;
use crate::models::{Brand, CreateBrand, UpdateBrand};
use crate::repository::BrandRepository;
use crate::service::BrandService;

pub const TAG: &str = "Brands";

/// OpenAPI documentation for the Brands API
#[derive(OpenApi)]
#[openapi(
    paths(list_brands, create_brand, get_brand, update_brand, delete_brand),
    components(
        schemas(Brand, CreateBrand, UpdateBrand),
        responses(UnprocessableResponse, UnauthorizedResponse, InternalServerErrorResponse)
    ),
    tags((name = TAG, description = "Brand management endpoints"))
)]
pub struct ApiDoc;

/// Create the brand router with all HTTP endpoints
pub fn router<R: BrandRepository + 'static>(service: BrandService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_brands).post(create_brand))
        .route(
            "/{id}",
            get(get_brand)
                .put(update_brand)
                .patch(update_brand)
                .delete(delete_brand),
        )
        .with_state(shared_service)
}

/// List brands
///
/// Any brand column may be passed as a query parameter; each one narrows the
/// result to brands whose column contains the value, ignoring case.
#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    params(
        ("page" = Option<u64>, Query, description = "1-indexed page, default 1"),
        ("per_page" = Option<u64>, Query, description = "Page size, default 10"),
        ("name" = Option<String>, Query, description = "Example column filter"),
    ),
    responses(
        (status = 200, description = "Brands retrieved successfully", body = ApiResponse<Paginated<Brand>>),
        (status = 401, response = UnauthorizedResponse),
        (status = 422, response = UnprocessableResponse),
        (status = 500, response = InternalServerErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
async fn list_brands<R: BrandRepository>(
    State(service): State<Arc<BrandService<R>>>,
    OriginalUri(uri): OriginalUri,
    Query(query): Query<BTreeMap<String, String>>,
) -> BrandResult<ApiResponse<Paginated<Brand>>> {
    let page = service.search(SearchParams::from_query(query)).await?;
    let page = Paginated::new(page.items, page.total, page.page, page.per_page, uri.path());
    Ok(ApiResponse::ok("Brands retrieved successfully", page))
}

/// Create a brand
#[utoipa::path(
    post,
    path = "",
    tag = TAG,
    request_body = CreateBrand,
    responses(
        (status = 200, description = "Brand created successfully", body = ApiResponse<Brand>),
        (status = 401, response = UnauthorizedResponse),
        (status = 422, response = UnprocessableResponse),
        (status = 500, response = InternalServerErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
async fn create_brand<R: BrandRepository>(
    State(service): State<Arc<BrandService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateBrand>,
) -> BrandResult<ApiResponse<Brand>> {
    let brand = service.create(input).await?;
    Ok(ApiResponse::ok("Brand created successfully", brand))
}

/// Get a brand by ID
///
/// Query parameters naming brand columns must also match, otherwise the
/// brand counts as not found.
#[utoipa::path(
    get,
    path = "/{id}",
    tag = TAG,
    params(("id" = Uuid, Path, description = "Brand ID")),
    responses(
        (status = 200, description = "Brand retrieved successfully", body = ApiResponse<Brand>),
        (status = 401, response = UnauthorizedResponse),
        (status = 422, response = UnprocessableResponse),
        (status = 500, response = InternalServerErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
async fn get_brand<R: BrandRepository>(
    State(service): State<Arc<BrandService<R>>>,
    UuidPath(id): UuidPath,
    Query(params): Query<BTreeMap<String, String>>,
) -> BrandResult<ApiResponse<Brand>> {
    let brand = service.find_one(id, &params).await?;
    Ok(ApiResponse::ok("Brand retrieved successfully", brand))
}

/// Update a brand (partial)
#[utoipa::path(
    put,
    path = "/{id}",
    tag = TAG,
    params(("id" = Uuid, Path, description = "Brand ID")),
    request_body = UpdateBrand,
    responses(
        (status = 200, description = "Brand updated successfully", body = ApiResponse<Brand>),
        (status = 401, response = UnauthorizedResponse),
        (status = 422, response = UnprocessableResponse),
        (status = 500, response = InternalServerErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
async fn update_brand<R: BrandRepository>(
    State(service): State<Arc<BrandService<R>>>,
    UuidPath(id): UuidPath,
    ValidatedJson(input): ValidatedJson<UpdateBrand>,
) -> BrandResult<ApiResponse<Brand>> {
    let brand = service.update(id, input).await?;
    Ok(ApiResponse::ok("Brand updated successfully", brand))
}

/// Soft delete a brand
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = TAG,
    params(("id" = Uuid, Path, description = "Brand ID")),
    responses(
        (status = 200, description = "Brand soft deleted successfully", body = ApiResponse<Vec<String>>),
        (status = 401, response = UnauthorizedResponse),
        (status = 422, response = UnprocessableResponse),
        (status = 500, response = InternalServerErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
async fn delete_brand<R: BrandRepository>(
    State(service): State<Arc<BrandService<R>>>,
    UuidPath(id): UuidPath,
) -> BrandResult<ApiResponse<Vec<Value>>> {
    service.delete(id).await?;
    Ok(ApiResponse::empty("Brand soft deleted successfully"))
}
