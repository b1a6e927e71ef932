//! SQLite-backed listing store.

use std::str::FromStr;
use std::time::Duration;

use futures_util::stream::{self, BoxStream};
use futures_util::{StreamExt, TryStreamExt};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use super::query::ListingQuery;
use crate::config::ListingsConfig;
use crate::domain::{FilterSet, Listing};
use crate::error::ListingsError;

/// Read-only access to listings through a `sqlx::SqlitePool`.
///
/// Connections are checked out per query and returned to the pool when the
/// row stream is dropped, on success and failure alike.
#[derive(Debug, Clone)]
pub struct ListingStore {
    pool: SqlitePool,
    query_timeout: Duration,
}

impl ListingStore {
    /// Creates a store over an existing pool.
    #[must_use]
    pub fn new(pool: SqlitePool, query_timeout: Duration) -> Self {
        Self {
            pool,
            query_timeout,
        }
    }

    /// Opens a read-only pool using the database settings in `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ListingsError::BackendFailure`] if the URL is invalid or
    /// the database cannot be opened.
    pub async fn connect(config: &ListingsConfig) -> Result<Self, ListingsError> {
        let connect_timeout = Duration::from_secs(config.database_connect_timeout_secs);
        let options = SqliteConnectOptions::from_str(&config.database_url)?
            .read_only(true)
            .busy_timeout(connect_timeout);

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database_max_connections)
            .min_connections(config.database_min_connections)
            .acquire_timeout(connect_timeout)
            .connect_with(options)
            .await?;

        tracing::debug!(url = %config.database_url, "listing store connected");
        Ok(Self::new(pool, config.query_timeout()))
    }

    /// Returns the underlying pool.
    #[must_use]
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Returns the per-call timeout.
    #[must_use]
    pub const fn query_timeout(&self) -> Duration {
        self.query_timeout
    }

    /// Streams the rows of `query` lazily, in property id order.
    ///
    /// The stream can be consumed once. Streaming an already-executed query
    /// yields a single [`ListingsError::Internal`].
    pub fn stream<'a>(
        &'a self,
        query: &'a mut ListingQuery,
    ) -> BoxStream<'a, Result<Listing, ListingsError>> {
        match query.take_builder() {
            Some(builder) => builder
                .build_query_as::<Listing>()
                .fetch(&self.pool)
                .map_err(ListingsError::from)
                .boxed(),
            None => stream::once(async {
                Err::<Listing, _>(ListingsError::Internal(
                    "listing query already executed".to_string(),
                ))
            })
            .boxed(),
        }
    }

    /// Runs the listings query for `filters` and collects every row.
    ///
    /// Either every matching row is returned or an error; never a partial
    /// result.
    ///
    /// # Errors
    ///
    /// Returns [`ListingsError::BackendFailure`] on any data-access failure,
    /// including exceeding the query timeout.
    pub async fn fetch_listings(&self, filters: &FilterSet) -> Result<Vec<Listing>, ListingsError> {
        let mut query = ListingQuery::new(filters);
        let rows = self.stream(&mut query).try_collect::<Vec<_>>();

        match tokio::time::timeout(self.query_timeout, rows).await {
            Ok(result) => result,
            Err(_) => Err(ListingsError::BackendFailure(format!(
                "listing query timed out after {} ms",
                self.query_timeout.as_millis()
            ))),
        }
    }

    /// Checks that a connection can be acquired and used.
    ///
    /// # Errors
    ///
    /// Returns [`ListingsError::BackendFailure`] if the database is
    /// unreachable or does not answer within the query timeout.
    pub async fn ping(&self) -> Result<(), ListingsError> {
        let probe = sqlx::query_scalar::<_, i64>("SELECT 1").fetch_one(&self.pool);
        match tokio::time::timeout(self.query_timeout, probe).await {
            Ok(result) => result.map(|_| ()).map_err(ListingsError::from),
            Err(_) => Err(ListingsError::BackendFailure(
                "database ping timed out".to_string(),
            )),
        }
    }
}
