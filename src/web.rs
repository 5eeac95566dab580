use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::api;
use crate::state::AppState;

/// Full application router: the JSON API nested under `/api`, everything else
/// served from the frontend bundle.
pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .nest("/api", api::router())
        .with_state(state)
        .fallback_service(ServeDir::new("frontend/dist"))
        .layer(cors)
}

pub async fn run(state: Arc<AppState>, port: u16) -> Result<()> {
    let app = router(state);

    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("ShoreSquad running at http://localhost:{port}");
    axum::serve(listener, app)
        .await
        .with_context(|| "Server error")?;
    Ok(())
}
