//! Listing search handlers: URL-query and JSON-body variants.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::api::dto::ListingListResponse;
use crate::app_state::AppState;
use crate::error::{ErrorResponse, ListingsError};
use crate::filters::RawFilters;

/// `GET /listings` — Search listings with filters in the URL query.
///
/// # Errors
///
/// Returns [`ListingsError`] on invalid filters or backend failure.
#[utoipa::path(
    get,
    path = "/api/v1/listings",
    tag = "Listings",
    summary = "Search listings by query parameters",
    description = "Returns properties with their current sale status. `status` accepts a comma-separated list of codes.",
    params(
        ("city" = Option<String>, Query, description = "Exact city match"),
        ("construction_year" = Option<i32>, Query, description = "Exact construction year"),
        ("status" = Option<String>, Query, description = "Comma-separated status codes: pre_sale, for_sale, sold"),
    ),
    responses(
        (status = 200, description = "Matching listings", body = ListingListResponse),
        (status = 400, description = "Invalid filters", body = ErrorResponse),
        (status = 500, description = "Backend failure", body = ErrorResponse),
    )
)]
pub async fn search_by_query(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<impl IntoResponse, ListingsError> {
    let Query(pairs) = query.map_err(|e| ListingsError::InvalidType(e.body_text()))?;
    let raw = RawFilters::from_query_pairs(pairs)?;
    let listings = state.listing_service.search(&raw).await?;
    Ok(Json(ListingListResponse::from(listings)))
}

/// `POST /listings/search` — Search listings with filters in a JSON body.
///
/// # Errors
///
/// Returns [`ListingsError`] on a malformed body, invalid filters, or
/// backend failure.
#[utoipa::path(
    post,
    path = "/api/v1/listings/search",
    tag = "Listings",
    summary = "Search listings by JSON body",
    description = "Same search as `GET /api/v1/listings` with filters sent as a JSON object; `status` is an array of codes.",
    request_body = serde_json::Value,
    responses(
        (status = 200, description = "Matching listings", body = ListingListResponse),
        (status = 400, description = "Invalid filters or body", body = ErrorResponse),
        (status = 500, description = "Backend failure", body = ErrorResponse),
    )
)]
pub async fn search_by_body(
    State(state): State<AppState>,
    body: Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<impl IntoResponse, ListingsError> {
    let Json(value) = body.map_err(|e| ListingsError::InvalidType(e.body_text()))?;
    let raw = RawFilters::from_json(value)?;
    let listings = state.listing_service.search(&raw).await?;
    Ok(Json(ListingListResponse::from(listings)))
}

/// Listing search routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/listings", get(search_by_query))
        .route("/listings/search", post(search_by_body))
}
