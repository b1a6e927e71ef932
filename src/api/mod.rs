//! REST API layer: route handlers, DTOs, OpenAPI document, and router
//! composition.
//!
//! All resource endpoints are mounted under `/api/v1`.

pub mod dto;
pub mod handlers;

use axum::Router;
use utoipa::OpenApi;

use crate::app_state::AppState;

/// OpenAPI document for every REST endpoint.
#[derive(Debug, OpenApi)]
#[openapi(
    info(
        title = "listings-gateway",
        description = "Real-estate listings filtered by city, construction year and current sale status."
    ),
    paths(
        handlers::listings::search_by_query,
        handlers::listings::search_by_body,
        handlers::likes::add_like,
        handlers::likes::property_likes,
        handlers::system::health_handler,
        handlers::system::statuses_handler,
    ),
    components(schemas(
        dto::ListingDto,
        dto::ListingListResponse,
        dto::LikeRequest,
        dto::LikeResponse,
        dto::PropertyLikesResponse,
        handlers::system::HealthResponse,
        handlers::system::StatusInfo,
        crate::domain::SaleStatus,
        crate::error::ErrorResponse,
        crate::error::ErrorBody,
    )),
    tags(
        (name = "Listings", description = "Listing search"),
        (name = "Likes", description = "Property likes"),
        (name = "System", description = "Health and catalog endpoints"),
    )
)]
pub struct ApiDoc;

/// Builds the complete API router with all REST endpoints.
pub fn build_router() -> Router<AppState> {
    Router::new()
        .nest("/api/v1", handlers::routes())
        .merge(handlers::system::routes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn openapi_lists_search_paths() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/api/v1/listings"));
        assert!(doc.paths.paths.contains_key("/api/v1/listings/search"));
        assert!(doc.paths.paths.contains_key("/api/v1/likes"));
    }
}
