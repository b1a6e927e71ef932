//! Domain layer: status enumeration, filters, listing rows, and likes.
//!
//! This module contains the types shared by the validator, the query
//! builder, and the HTTP layer.

pub mod filter_set;
pub mod like_registry;
pub mod listing;
pub mod sale_status;

pub use filter_set::FilterSet;
pub use like_registry::{LikeRecord, LikeRegistry};
pub use listing::Listing;
pub use sale_status::{SaleStatus, UnknownStatus};
