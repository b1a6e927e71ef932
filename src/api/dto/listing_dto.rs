//! Listing search DTOs.

use chrono::NaiveDateTime;
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::Listing;

/// One listing in a search response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ListingDto {
    /// Property identifier.
    pub property_id: i64,
    /// Street address.
    pub address: String,
    /// City.
    pub city: String,
    /// Current status code (`pre_sale`, `for_sale` or `sold`).
    pub status_code: String,
    /// Current status label.
    pub status_label: String,
    /// Sale price.
    pub sale_price: i64,
    /// Construction year.
    pub construction_year: i64,
    /// When the current status was recorded, if known.
    pub last_update_timestamp: Option<NaiveDateTime>,
}

impl From<Listing> for ListingDto {
    fn from(listing: Listing) -> Self {
        Self {
            property_id: listing.property_id,
            address: listing.address,
            city: listing.city,
            status_code: listing.status_code,
            status_label: listing.status_label,
            sale_price: listing.sale_price,
            construction_year: listing.construction_year,
            last_update_timestamp: listing.last_update,
        }
    }
}

/// Response body for listing searches.
#[derive(Debug, Serialize, ToSchema)]
pub struct ListingListResponse {
    /// Matching listings ordered by property id.
    pub data: Vec<ListingDto>,
    /// Number of listings in `data`.
    pub count: usize,
}

impl From<Vec<Listing>> for ListingListResponse {
    fn from(listings: Vec<Listing>) -> Self {
        let data: Vec<ListingDto> = listings.into_iter().map(ListingDto::from).collect();
        Self {
            count: data.len(),
            data,
        }
    }
}
