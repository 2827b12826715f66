//! Axum server setup and routing.

use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::api;
use crate::state::AppState;

/// Create the Axum router with all routes.
pub fn create_router(state: Arc<AppState>) -> Router {
    let api_routes = Router::new()
        .route("/health", get(api::health::health))
        .route("/results", get(api::results::raw_results))
        .route("/dashboard", get(api::dashboard::dashboard_model));

    Router::new()
        .nest("/api", api_routes)
        .route("/", get(api::dashboard::dashboard_page))
        .route("/index.html", get(api::dashboard::dashboard_page))
        .layer(CompressionLayer::new())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind and serve until the process is stopped.
pub async fn serve(state: Arc<AppState>) -> std::io::Result<()> {
    let bind_addr = state.config.bind_address;
    let app = create_router(state);

    tracing::info!("Starting VQE dashboard at http://{}", bind_addr);
    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app).await
}
