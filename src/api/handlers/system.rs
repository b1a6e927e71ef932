//! System endpoints: health check and status catalog.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use serde::Serialize;
use utoipa::ToSchema;

use crate::app_state::AppState;
use crate::domain::SaleStatus;

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    status: String,
    database: String,
    timestamp: String,
    version: String,
}

/// `GET /health` — Service health status.
#[utoipa::path(
    get,
    path = "/health",
    tag = "System",
    summary = "Health check",
    description = "Returns service health, database reachability, version, and current timestamp.",
    responses(
        (status = 200, description = "Service health", body = HealthResponse),
    )
)]
pub async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    let (status, database) = match state.listing_service.store().ping().await {
        Ok(()) => ("healthy", "reachable".to_string()),
        Err(err) => {
            tracing::warn!(error = %err, "database health check failed");
            ("degraded", err.to_string())
        }
    };

    (
        StatusCode::OK,
        Json(HealthResponse {
            status: status.to_string(),
            database,
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }),
    )
}

/// Supported status info.
#[derive(Debug, Serialize, ToSchema)]
pub struct StatusInfo {
    code: SaleStatus,
    label: &'static str,
}

/// `GET /config/statuses` — List accepted status codes.
#[utoipa::path(
    get,
    path = "/config/statuses",
    tag = "System",
    summary = "List status codes",
    description = "Returns every status code accepted by the `status` filter.",
    responses(
        (status = 200, description = "Status catalog", body = Vec<StatusInfo>),
    )
)]
pub async fn statuses_handler() -> impl IntoResponse {
    let statuses: Vec<StatusInfo> = SaleStatus::ALL
        .into_iter()
        .map(|code| StatusInfo {
            code,
            label: code.label(),
        })
        .collect();
    (StatusCode::OK, Json(statuses))
}

/// System routes mounted at the root level (not under /api/v1).
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_handler))
        .route("/config/statuses", get(statuses_handler))
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use axum::body::Body;
    use axum::http::Request;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use super::*;
    use crate::api::build_router;
    use crate::filters::ValidationPolicy;
    use crate::test_support::seeded_state;

    async fn get_json(state: AppState, uri: &str) -> Value {
        let Ok(request) = Request::get(uri).body(Body::empty()) else {
            panic!("valid request");
        };
        let Ok(response) = build_router().with_state(state).oneshot(request).await;
        assert_eq!(response.status(), StatusCode::OK);
        let Ok(bytes) = axum::body::to_bytes(response.into_body(), usize::MAX).await else {
            panic!("body should be readable");
        };
        let Ok(value) = serde_json::from_slice(&bytes) else {
            panic!("body should be JSON");
        };
        value
    }

    #[tokio::test]
    async fn health_reports_reachable_database() {
        let state = seeded_state(ValidationPolicy::EXTERNAL).await;
        let body = get_json(state, "/health").await;
        assert_eq!(body["status"], json!("healthy"));
    }

    #[tokio::test]
    async fn health_degrades_when_pool_is_closed() {
        let state = seeded_state(ValidationPolicy::EXTERNAL).await;
        state.listing_service.store().pool().close().await;
        let body = get_json(state, "/health").await;
        assert_eq!(body["status"], json!("degraded"));
    }

    #[tokio::test]
    async fn statuses_lists_the_enumeration() {
        let state = seeded_state(ValidationPolicy::EXTERNAL).await;
        let body = get_json(state, "/config/statuses").await;
        assert_eq!(
            body,
            json!([
                {"code": "pre_sale", "label": "Pre-sale"},
                {"code": "for_sale", "label": "For sale"},
                {"code": "sold", "label": "Sold"},
            ])
        );
    }
}
