//! listings-gateway server entry point.
//!
//! Starts the Axum HTTP server with the listing and like endpoints.

use std::sync::Arc;

use anyhow::Context;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use listings_gateway::api;
use listings_gateway::app_state::AppState;
use listings_gateway::config::{ListingsConfig, LogFormat};
use listings_gateway::domain::LikeRegistry;
use listings_gateway::persistence::ListingStore;
use listings_gateway::service::ListingService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = ListingsConfig::from_env().context("loading configuration")?;

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match config.log_format {
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init(),
        LogFormat::Pretty => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }
    tracing::info!(addr = %config.listen_addr, "starting listings-gateway");

    // Build persistence and service layers
    let store = ListingStore::connect(&config)
        .await
        .with_context(|| format!("connecting to {}", config.database_url))?;
    let listing_service = Arc::new(ListingService::new(store, config.filter_policy));
    tracing::info!(policy = ?config.filter_policy, "filter policy configured");

    // Build application state
    let app_state = AppState {
        listing_service,
        likes: Arc::new(LikeRegistry::new()),
    };

    // Build router
    let app = Router::new().merge(api::build_router());

    #[cfg(feature = "swagger-ui")]
    let app = {
        use utoipa::OpenApi;
        use utoipa_swagger_ui::SwaggerUi;
        app.merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api::ApiDoc::openapi()))
    };

    let app = app
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(TimeoutLayer::new(config.request_timeout()))
                .layer(CorsLayer::permissive()),
        )
        .with_state(app_state);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr)
        .await
        .with_context(|| format!("binding {}", config.listen_addr))?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
