use axum::{
    Router,
    extract::{DefaultBodyLimit, Multipart, State, multipart::MultipartRejection},
    routing::{get, post},
};
use axum_helpers::{
    ApiResponse, UuidPath,
    errors::responses::{InternalServerErrorResponse, UnauthorizedResponse, UnprocessableResponse},
};
use std::sync::Arc;

use super::upload::{IMAGE_REQUIRED, IMAGE_TOO_LARGE, MAX_IMAGE_BYTES};
use super::{ImageService, ImageUpload, MediaRepository, ProductImage};
use crate::error::{ProductError, ProductResult};
use crate::handlers::TAG;
use crate::repository::ProductRepository;

/// Multipart field carrying the file.
pub const IMAGE_FIELD: &str = "image";

/// Room for the multipart framing around a maximum-size image.
const BODY_LIMIT: usize = MAX_IMAGE_BYTES + 64 * 1024;

/// Multipart body of an image upload (documentation only)
#[derive(utoipa::ToSchema)]
#[allow(dead_code)]
pub struct ImageForm {
    #[schema(value_type = String, format = Binary)]
    image: Vec<u8>,
}

/// Routes under `/products/{id}`, merged into the product router.
pub fn image_router<R, M>(service: ImageService<R, M>) -> Router
where
    R: ProductRepository + 'static,
    M: MediaRepository + 'static,
{
    Router::new()
        .route(
            "/{id}/upload-image",
            post(upload_image).layer(DefaultBodyLimit::max(BODY_LIMIT)),
        )
        .route("/{id}/image", get(get_image))
        .with_state(Arc::new(service))
}

/// Upload the product image
///
/// Replaces the current image, if any.
#[utoipa::path(
    post,
    path = "/{id}/upload-image",
    tag = TAG,
    params(("id" = Uuid, Path, description = "Product ID")),
    request_body(content = ImageForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Image uploaded successfully", body = ApiResponse<ProductImage>),
        (status = 401, response = UnauthorizedResponse),
        (status = 422, response = UnprocessableResponse),
        (status = 500, response = InternalServerErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn upload_image<R: ProductRepository, M: MediaRepository>(
    State(service): State<Arc<ImageService<R, M>>>,
    UuidPath(id): UuidPath,
    multipart: Result<Multipart, MultipartRejection>,
) -> ProductResult<ApiResponse<ProductImage>> {
    let multipart =
        multipart.map_err(|_| ProductError::InvalidImage(IMAGE_REQUIRED.to_string()))?;
    let upload = read_image_field(multipart).await?;
    let image = service.upload(id, upload).await?;
    Ok(ApiResponse::ok("Image uploaded successfully", image))
}

/// Get the product image
#[utoipa::path(
    get,
    path = "/{id}/image",
    tag = TAG,
    params(("id" = Uuid, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Image retrieved successfully", body = ApiResponse<ProductImage>),
        (status = 401, response = UnauthorizedResponse),
        (status = 422, response = UnprocessableResponse),
        (status = 500, response = InternalServerErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_image<R: ProductRepository, M: MediaRepository>(
    State(service): State<Arc<ImageService<R, M>>>,
    UuidPath(id): UuidPath,
) -> ProductResult<ApiResponse<ProductImage>> {
    let image = service.current(id).await?;
    Ok(ApiResponse::ok("Image retrieved successfully", image))
}

/// Reads the `image` field with a hard size limit; other fields are skipped.
async fn read_image_field(mut multipart: Multipart) -> ProductResult<ImageUpload> {
    let invalid = |msg: &str| ProductError::InvalidImage(msg.to_string());

    loop {
        let Some(mut field) = multipart
            .next_field()
            .await
            .map_err(|_| invalid(IMAGE_REQUIRED))?
        else {
            return Err(invalid(IMAGE_REQUIRED));
        };
        if field.name() != Some(IMAGE_FIELD) {
            continue;
        }

        let file_name = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);

        let mut bytes = Vec::new();
        while let Some(chunk) = field.chunk().await.map_err(|_| invalid(IMAGE_TOO_LARGE))? {
            if bytes.len() + chunk.len() > MAX_IMAGE_BYTES {
                return Err(invalid(IMAGE_TOO_LARGE));
            }
            bytes.extend_from_slice(&chunk);
        }

        return Ok(ImageUpload {
            file_name,
            content_type,
            bytes,
        });
    }
}
