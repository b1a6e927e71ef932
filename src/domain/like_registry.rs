//! In-memory store of property likes.
//!
//! [`LikeRegistry`] keeps one [`LikeRecord`] per `(user_id, property_id)`
//! pair behind a [`tokio::sync::RwLock`]. Adding is an atomic
//! check-and-insert under the write lock, so concurrent duplicates resolve
//! to exactly one success. Records live only as long as the process.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::ListingsError;

/// A single like of a property by a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LikeRecord {
    /// Unique like identifier (UUID v4).
    pub like_id: Uuid,
    /// User who liked the property.
    pub user_id: i64,
    /// Liked property.
    pub property_id: i64,
    /// When the like was recorded.
    pub created_at: DateTime<Utc>,
}

/// Owned, synchronized store of likes keyed by `(user_id, property_id)`.
#[derive(Debug, Default)]
pub struct LikeRegistry {
    likes: RwLock<HashMap<(i64, i64), LikeRecord>>,
}

impl LikeRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a like if the user has not liked the property yet.
    ///
    /// # Errors
    ///
    /// Returns [`ListingsError::AlreadyLiked`] if the pair already exists.
    pub async fn add(&self, user_id: i64, property_id: i64) -> Result<LikeRecord, ListingsError> {
        let mut map = self.likes.write().await;
        if map.contains_key(&(user_id, property_id)) {
            return Err(ListingsError::AlreadyLiked {
                user_id,
                property_id,
            });
        }
        let record = LikeRecord {
            like_id: Uuid::new_v4(),
            user_id,
            property_id,
            created_at: Utc::now(),
        };
        map.insert((user_id, property_id), record.clone());
        tracing::debug!(user_id, property_id, "like recorded");
        Ok(record)
    }

    /// Returns the like history of a property, oldest first.
    pub async fn for_property(&self, property_id: i64) -> Vec<LikeRecord> {
        let map = self.likes.read().await;
        let mut records: Vec<LikeRecord> = map
            .values()
            .filter(|r| r.property_id == property_id)
            .cloned()
            .collect();
        records.sort_by_key(|r| (r.created_at, r.user_id));
        records
    }

    /// Returns the total number of likes.
    pub async fn len(&self) -> usize {
        self.likes.read().await.len()
    }

    /// Returns `true` if no like has been recorded.
    pub async fn is_empty(&self) -> bool {
        self.likes.read().await.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use std::sync::Arc;

    use super::*;

    #[tokio::test]
    async fn add_records_like() {
        let registry = LikeRegistry::new();
        let Ok(record) = registry.add(1, 100).await else {
            panic!("first like should succeed");
        };
        assert_eq!(record.user_id, 1);
        assert_eq!(record.property_id, 100);
        assert_eq!(registry.len().await, 1);
    }

    #[tokio::test]
    async fn duplicate_like_is_rejected() {
        let registry = LikeRegistry::new();
        let _ = registry.add(1, 100).await;
        let result = registry.add(1, 100).await;
        assert!(matches!(
            result,
            Err(ListingsError::AlreadyLiked {
                user_id: 1,
                property_id: 100
            })
        ));
        assert_eq!(registry.len().await, 1);
    }

    #[tokio::test]
    async fn history_keeps_every_user() {
        let registry = LikeRegistry::new();
        let _ = registry.add(1, 100).await;
        let _ = registry.add(2, 100).await;
        let _ = registry.add(2, 200).await;

        let history = registry.for_property(100).await;
        assert_eq!(history.len(), 2);
        assert!(history.iter().all(|r| r.property_id == 100));
        assert!(registry.for_property(300).await.is_empty());
    }

    #[tokio::test]
    async fn concurrent_duplicates_succeed_once() {
        let registry = Arc::new(LikeRegistry::new());
        let mut handles = Vec::new();
        for _ in 0..16 {
            let registry = Arc::clone(&registry);
            handles.push(tokio::spawn(async move { registry.add(7, 42).await.is_ok() }));
        }

        let mut successes = 0;
        for handle in handles {
            if matches!(handle.await, Ok(true)) {
                successes += 1;
            }
        }
        assert_eq!(successes, 1);
        assert_eq!(registry.len().await, 1);
    }

    #[tokio::test]
    async fn new_registry_is_empty() {
        assert!(LikeRegistry::new().is_empty().await);
    }
}
