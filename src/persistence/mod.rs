//! Persistence layer: read-only listing queries over SQLite.
//!
//! [`ListingQuery`] assembles the latest-status SQL with bound predicates;
//! [`ListingStore`] runs it on a `sqlx::SqlitePool` and streams the rows.

pub mod query;
pub mod store;

pub use query::ListingQuery;
pub use store::ListingStore;
