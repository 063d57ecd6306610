//! Reusable OpenAPI response types for the failure envelope.

use super::ErrorResponse;
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Validation failed or the record does not exist",
    content_type = "application/json",
    example = json!({
        "success": false,
        "message": "Validation error",
        "errors": { "slug": ["The slug has already been taken."] }
    })
)]
pub struct UnprocessableResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Missing or invalid bearer token",
    content_type = "application/json",
    example = json!({ "success": false, "message": "Unauthenticated" })
)]
pub struct UnauthorizedResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error",
    content_type = "application/json",
    example = json!({ "success": false, "message": "An unexpected error occurred." })
)]
pub struct InternalServerErrorResponse(pub ErrorResponse);
