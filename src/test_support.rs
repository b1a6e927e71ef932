//! In-memory SQLite fixtures shared by unit tests.

#![allow(clippy::panic)]

use std::sync::Arc;
use std::time::Duration;

use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;

use crate::app_state::AppState;
use crate::domain::LikeRegistry;
use crate::filters::ValidationPolicy;
use crate::persistence::ListingStore;
use crate::service::ListingService;

/// Listing tables as the service expects to find them.
pub(crate) const SCHEMA: &str = r#"
CREATE TABLE property (
    id INTEGER PRIMARY KEY,
    address TEXT NOT NULL,
    city TEXT NOT NULL,
    price INTEGER NOT NULL,
    year INTEGER NOT NULL
);
CREATE TABLE status (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL UNIQUE,
    label TEXT NOT NULL
);
CREATE TABLE status_history (
    id INTEGER PRIMARY KEY,
    property_id INTEGER NOT NULL REFERENCES property(id),
    status_id INTEGER NOT NULL REFERENCES status(id),
    update_date TEXT
);
"#;

/// Seed data:
///
/// | id | city     | year | history (id: status @ date)                    | current  |
/// |----|----------|------|------------------------------------------------|----------|
/// | 1  | Bogota   | 2015 | 1: for_sale @ 01-01, 2: sold @ 06-01           | sold     |
/// | 2  | Bogota   | 2018 | 3: pre_sale @ 03-01                            | pre_sale |
/// | 3  | Medellin | 2018 | 4: for_sale @ 02-01                            | for_sale |
/// | 4  | Bogota   | 2020 | 5: pre_sale, 6: for_sale, same timestamp       | for_sale |
/// | 5  | Medellin | 2018 | 7: for_sale @ 01-15, 8: sold @ 04-01           | sold     |
/// | 6  | Cali     | 2010 | 9: pre_sale @ 07-01, 10: sold @ NULL           | pre_sale |
/// | 7  | Cali     | 2018 | none                                           | excluded |
pub(crate) const SEED: &str = r#"
INSERT INTO status (id, name, label) VALUES
    (1, 'pre_sale', 'Pre-sale'),
    (2, 'for_sale', 'For sale'),
    (3, 'sold', 'Sold');
INSERT INTO property (id, address, city, price, year) VALUES
    (1, 'Calle 19 #4-20', 'Bogota', 300000000, 2015),
    (2, 'Carrera 7 #45-10', 'Bogota', 250000000, 2018),
    (3, 'Calle 10 #43-12', 'Medellin', 180000000, 2018),
    (4, 'Avenida 68 #22-31', 'Bogota', 400000000, 2020),
    (5, 'Calle 50 #70-05', 'Medellin', 150000000, 2018),
    (6, 'Calle 80 #11-40', 'Cali', 90000000, 2010),
    (7, 'Calle 99 #3-01', 'Cali', 120000000, 2018);
INSERT INTO status_history (id, property_id, status_id, update_date) VALUES
    (6, 4, 2, '2021-05-05 12:00:00'),
    (5, 4, 1, '2021-05-05 12:00:00'),
    (1, 1, 2, '2021-01-01 09:00:00'),
    (2, 1, 3, '2021-06-01 10:00:00'),
    (3, 2, 1, '2021-03-01 08:30:00'),
    (4, 3, 2, '2021-02-01 16:45:00'),
    (7, 5, 2, '2021-01-15 11:00:00'),
    (8, 5, 3, '2021-04-01 11:00:00'),
    (9, 6, 1, '2021-07-01 14:00:00'),
    (10, 6, 3, NULL);
"#;

/// A single-connection in-memory database with no tables.
///
/// The connection is never recycled; each in-memory connection is its own
/// database.
pub(crate) async fn memory_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await;
    let Ok(pool) = pool else {
        panic!("in-memory sqlite should open");
    };
    pool
}

/// A store over the seeded fixture database.
pub(crate) async fn seeded_store() -> ListingStore {
    let pool = memory_pool().await;
    for script in [SCHEMA, SEED] {
        if let Err(err) = sqlx::raw_sql(script).execute(&pool).await {
            panic!("fixture script failed: {err}");
        }
    }
    ListingStore::new(pool, Duration::from_secs(5))
}

/// Application state over the seeded fixture database.
pub(crate) async fn seeded_state(policy: ValidationPolicy) -> AppState {
    AppState {
        listing_service: Arc::new(ListingService::new(seeded_store().await, policy)),
        likes: Arc::new(LikeRegistry::new()),
    }
}
