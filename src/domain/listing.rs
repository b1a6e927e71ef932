//! Listing rows: a property joined with its current status.

use chrono::NaiveDateTime;

/// One property together with its resolved current status.
///
/// Column names match the aliases produced by
/// [`crate::persistence::ListingQuery`].
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Listing {
    /// Property identity.
    pub property_id: i64,
    /// Street address.
    pub address: String,
    /// City name as stored.
    pub city: String,
    /// Code of the current status (e.g. `"for_sale"`).
    pub status_code: String,
    /// Human-readable label of the current status.
    pub status_label: String,
    /// Sale price in whole currency units.
    pub sale_price: i64,
    /// Construction year.
    pub construction_year: i64,
    /// Timestamp of the current status event, if recorded.
    pub last_update: Option<NaiveDateTime>,
}
