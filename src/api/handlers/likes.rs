//! Like handlers: record a like, list a property's likes.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::api::dto::{LikeRequest, LikeResponse, PropertyLikesResponse};
use crate::app_state::AppState;
use crate::error::{ErrorResponse, ListingsError};

/// `POST /likes` — Record that a user likes a property.
///
/// # Errors
///
/// Returns [`ListingsError::InvalidType`] if the body is not a valid like
/// request, or [`ListingsError::AlreadyLiked`] if the user already liked the
/// property.
#[utoipa::path(
    post,
    path = "/api/v1/likes",
    tag = "Likes",
    summary = "Like a property",
    description = "Records a like for the (user, property) pair. Each pair can like a property once.",
    request_body = LikeRequest,
    responses(
        (status = 201, description = "Like recorded", body = LikeResponse),
        (status = 400, description = "Malformed request body", body = ErrorResponse),
        (status = 409, description = "Already liked", body = ErrorResponse),
    )
)]
pub async fn add_like(
    State(state): State<AppState>,
    body: Result<Json<LikeRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ListingsError> {
    let Json(req) = body.map_err(|e| ListingsError::InvalidType(e.body_text()))?;
    let record = state.likes.add(req.user_id, req.property_id).await?;
    Ok((StatusCode::CREATED, Json(LikeResponse::from(record))))
}

/// `GET /properties/:id/likes` — Like history of a property.
#[utoipa::path(
    get,
    path = "/api/v1/properties/{id}/likes",
    tag = "Likes",
    summary = "List likes of a property",
    description = "Returns every like recorded for the property, oldest first.",
    params(
        ("id" = i64, Path, description = "Property id"),
    ),
    responses(
        (status = 200, description = "Like history", body = PropertyLikesResponse),
    )
)]
pub async fn property_likes(
    State(state): State<AppState>,
    Path(property_id): Path<i64>,
) -> impl IntoResponse {
    let likes: Vec<LikeResponse> = state
        .likes
        .for_property(property_id)
        .await
        .into_iter()
        .map(LikeResponse::from)
        .collect();

    Json(PropertyLikesResponse {
        property_id,
        total: likes.len(),
        likes,
    })
}

/// Like routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/likes", post(add_like))
        .route("/properties/{id}/likes", get(property_likes))
}
