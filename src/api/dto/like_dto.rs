//! Like DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::LikeRecord;

/// Request body for `POST /likes`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct LikeRequest {
    /// User giving the like.
    pub user_id: i64,
    /// Property being liked.
    pub property_id: i64,
}

/// A recorded like.
#[derive(Debug, Serialize, ToSchema)]
pub struct LikeResponse {
    /// Like identifier.
    pub like_id: Uuid,
    /// User who liked the property.
    pub user_id: i64,
    /// Liked property.
    pub property_id: i64,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl From<LikeRecord> for LikeResponse {
    fn from(record: LikeRecord) -> Self {
        Self {
            like_id: record.like_id,
            user_id: record.user_id,
            property_id: record.property_id,
            created_at: record.created_at,
        }
    }
}

/// Response body for `GET /properties/:id/likes`.
#[derive(Debug, Serialize, ToSchema)]
pub struct PropertyLikesResponse {
    /// Property identifier.
    pub property_id: i64,
    /// Number of likes.
    pub total: usize,
    /// Likes, oldest first.
    pub likes: Vec<LikeResponse>,
}
