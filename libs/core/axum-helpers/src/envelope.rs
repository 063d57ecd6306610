//! Success envelope shared by every endpoint.
//!
//! Every successful response is `{"success": true, "message": ..., "data": ...}`.
//! Listings put a [`Paginated`] page in `data`.

use axum::{
    Json,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: String,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data,
        }
    }
}

impl ApiResponse<Vec<serde_json::Value>> {
    /// `data: []`, used by deletes.
    pub fn empty(message: impl Into<String>) -> Self {
        Self::ok(message, Vec::new())
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

/// One page of a listing, with navigation links.
///
/// Links are built from the request path as `{path}?page=N`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Paginated<T> {
    pub current_page: u64,
    pub data: Vec<T>,
    pub first_page_url: String,
    /// 1-based position of the first item, `null` on an empty page.
    pub from: Option<u64>,
    pub last_page: u64,
    pub last_page_url: String,
    pub next_page_url: Option<String>,
    pub path: String,
    pub per_page: u64,
    pub prev_page_url: Option<String>,
    pub to: Option<u64>,
    pub total: u64,
}

impl<T> Paginated<T> {
    pub fn new(data: Vec<T>, total: u64, current_page: u64, per_page: u64, path: &str) -> Self {
        let current_page = current_page.max(1);
        let per_page = per_page.max(1);
        let last_page = total.div_ceil(per_page).max(1);
        let url = |page: u64| format!("{path}?page={page}");

        let offset = (current_page - 1).saturating_mul(per_page);
        let (from, to) = if data.is_empty() {
            (None, None)
        } else {
            (
                Some(offset.saturating_add(1)),
                Some(offset.saturating_add(data.len() as u64)),
            )
        };

        Self {
            current_page,
            first_page_url: url(1),
            from,
            last_page,
            last_page_url: url(last_page),
            next_page_url: (current_page < last_page).then(|| url(current_page + 1)),
            path: path.to_string(),
            per_page,
            prev_page_url: (current_page > 1).then(|| url(current_page - 1)),
            to,
            total,
            data,
        }
    }
}
