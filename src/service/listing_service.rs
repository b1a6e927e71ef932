//! Listing service: validates raw filters and runs the listings query.

use crate::domain::Listing;
use crate::error::ListingsError;
use crate::filters::{RawFilters, ValidationPolicy, validate};
use crate::persistence::ListingStore;

/// Orchestration layer for listing searches.
///
/// Stateless apart from the store handle and the request-path policy; every
/// search follows: validate → build query → collect rows.
#[derive(Debug, Clone)]
pub struct ListingService {
    store: ListingStore,
    policy: ValidationPolicy,
}

impl ListingService {
    /// Creates a service applying `policy` to externally received filters.
    #[must_use]
    pub fn new(store: ListingStore, policy: ValidationPolicy) -> Self {
        Self { store, policy }
    }

    /// Returns the inner [`ListingStore`].
    #[must_use]
    pub fn store(&self) -> &ListingStore {
        &self.store
    }

    /// Searches with the configured request-path policy.
    ///
    /// # Errors
    ///
    /// Returns [`ListingsError::InvalidType`] or
    /// [`ListingsError::InvalidValue`] for bad filters, and
    /// [`ListingsError::BackendFailure`] when the query fails.
    pub async fn search(&self, raw: &RawFilters) -> Result<Vec<Listing>, ListingsError> {
        self.search_with_policy(raw, self.policy).await
    }

    /// Searches with an explicit policy, e.g. [`ValidationPolicy::INTERNAL`]
    /// for in-process callers.
    ///
    /// # Errors
    ///
    /// Same as [`ListingService::search`].
    pub async fn search_with_policy(
        &self,
        raw: &RawFilters,
        policy: ValidationPolicy,
    ) -> Result<Vec<Listing>, ListingsError> {
        let filters = validate(raw, policy).inspect_err(|err| {
            tracing::debug!(error = %err, "filter validation failed");
        })?;

        let listings = self.store.fetch_listings(&filters).await?;
        tracing::info!(
            city = filters.city.as_deref(),
            construction_year = filters.construction_year,
            statuses = ?filters.statuses,
            count = listings.len(),
            "listings query completed"
        );
        Ok(listings)
    }
}
