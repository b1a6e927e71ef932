//! # listings-gateway
//!
//! REST API exposing real-estate listings filtered by city, construction
//! year, and current sale status.
//!
//! Raw filters from a URL query or a JSON body are validated against a
//! declared schema into a typed [`domain::FilterSet`], which is turned into
//! a parameterized SQL query that resolves each property's most recent
//! status event.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP)
//!     │
//!     ├── REST Handlers (api/)
//!     │
//!     ├── ListingService (service/)
//!     ├── Filter validation (filters/)
//!     │
//!     ├── ListingQuery + ListingStore (persistence/)
//!     │
//!     └── SQLite (property, status, status_history)
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod filters;
pub mod persistence;
pub mod service;

#[cfg(test)]
pub(crate) mod test_support;
