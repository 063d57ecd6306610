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

use crate::error::CustomerResult;
use crate::models::{CreateCustomer, Customer, Gender, UpdateCustomer};
use crate::repository::CustomerRepository;
use crate::service::CustomerService;

pub const TAG: &str = "Customers";

/// OpenAPI documentation for the Customers API
#[derive(OpenApi)]
#[openapi(
    paths(list_customers, create_customer, get_customer, update_customer, delete_customer),
    components(
        schemas(Customer, CreateCustomer, UpdateCustomer, Gender),
        responses(UnprocessableResponse, UnauthorizedResponse, InternalServerErrorResponse)
    ),
    tags((name = TAG, description = "Customer management endpoints"))
)]
pub struct ApiDoc;

/// Create the customer router with all HTTP endpoints
pub fn router<R: CustomerRepository + 'static>(service: CustomerService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_customers).post(create_customer))
        .route(
            "/{id}",
            get(get_customer)
                .put(update_customer)
                .patch(update_customer)
                .delete(delete_customer),
        )
        .with_state(shared_service)
}

/// List customers matching every column filter in the query string
#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    params(
        ("page" = Option<u64>, Query, description = "1-indexed page, default 1"),
        ("per_page" = Option<u64>, Query, description = "Page size, default 10"),
        ("email" = Option<String>, Query, description = "Substring of the email"),
    ),
    responses(
        (status = 200, description = "Customers retrieved successfully", body = ApiResponse<Paginated<Customer>>),
        (status = 401, response = UnauthorizedResponse),
        (status = 422, response = UnprocessableResponse),
        (status = 500, response = InternalServerErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
async fn list_customers<R: CustomerRepository>(
    State(service): State<Arc<CustomerService<R>>>,
    OriginalUri(uri): OriginalUri,
    Query(query): Query<BTreeMap<String, String>>,
) -> CustomerResult<ApiResponse<Paginated<Customer>>> {
    let page = service.search(SearchParams::from_query(query)).await?;
    let page = Paginated::new(page.items, page.total, page.page, page.per_page, uri.path());
    Ok(ApiResponse::ok("Customers retrieved successfully", page))
}

/// Create a customer
#[utoipa::path(
    post,
    path = "",
    tag = TAG,
    request_body = CreateCustomer,
    responses(
        (status = 200, description = "Customer created successfully", body = ApiResponse<Customer>),
        (status = 401, response = UnauthorizedResponse),
        (status = 422, response = UnprocessableResponse),
        (status = 500, response = InternalServerErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
async fn create_customer<R: CustomerRepository>(
    State(service): State<Arc<CustomerService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateCustomer>,
) -> CustomerResult<ApiResponse<Customer>> {
    let customer = service.create(input).await?;
    Ok(ApiResponse::ok("Customer created successfully", customer))
}

/// Get a customer by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = TAG,
    params(("id" = Uuid, Path, description = "Customer ID")),
    responses(
        (status = 200, description = "Customer retrieved successfully", body = ApiResponse<Customer>),
        (status = 401, response = UnauthorizedResponse),
        (status = 422, response = UnprocessableResponse),
        (status = 500, response = InternalServerErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
async fn get_customer<R: CustomerRepository>(
    State(service): State<Arc<CustomerService<R>>>,
    UuidPath(id): UuidPath,
    Query(params): Query<BTreeMap<String, String>>,
) -> CustomerResult<ApiResponse<Customer>> {
    let customer = service.find_one(id, &params).await?;
    Ok(ApiResponse::ok("Customer retrieved successfully", customer))
}

/// Update a customer (partial)
#[utoipa::path(
    put,
    path = "/{id}",
    tag = TAG,
    params(("id" = Uuid, Path, description = "Customer ID")),
    request_body = UpdateCustomer,
    responses(
        (status = 200, description = "Customer updated successfully", body = ApiResponse<Customer>),
        (status = 401, response = UnauthorizedResponse),
        (status = 422, response = UnprocessableResponse),
        (status = 500, response = InternalServerErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
async fn update_customer<R: CustomerRepository>(
    State(service): State<Arc<CustomerService<R>>>,
    UuidPath(id): UuidPath,
    ValidatedJson(input): ValidatedJson<UpdateCustomer>,
) -> CustomerResult<ApiResponse<Customer>> {
    let customer = service.update(id, input).await?;
    Ok(ApiResponse::ok("Customer updated successfully", customer))
}

/// Soft delete a customer
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = TAG,
    params(("id" = Uuid, Path, description = "Customer ID")),
    responses(
        (status = 200, description = "Customer soft deleted successfully", body = ApiResponse<Vec<String>>),
        (status = 401, response = UnauthorizedResponse),
        (status = 422, response = UnprocessableResponse),
        (status = 500, response = InternalServerErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
async fn delete_customer<R: CustomerRepository>(
    State(service): State<Arc<CustomerService<R>>>,
    UuidPath(id): UuidPath,
) -> CustomerResult<ApiResponse<Vec<Value>>> {
    service.delete(id).await?;
    Ok(ApiResponse::empty("Customer soft deleted successfully"))
}
