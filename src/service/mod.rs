//! Service layer: business logic orchestration.
//!
//! [`ListingService`] validates raw filters against the configured policy
//! and delegates the query to the [`crate::persistence::ListingStore`].

pub mod listing_service;

pub use listing_service::ListingService;
