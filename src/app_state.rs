//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::domain::LikeRegistry;
use crate::service::ListingService;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Listing search service.
    pub listing_service: Arc<ListingService>,
    /// In-memory likes store.
    pub likes: Arc<LikeRegistry>,
}
