use crate::{handlers::*, services::StatsStore};
use axum::{routing::get, Router};
use std::path::Path;
use std::sync::Arc;
use tower_http::{
    cors::CorsLayer,
    services::ServeDir,
    trace::{DefaultMakeSpan, TraceLayer},
};

/// Builds the full application router.
///
/// - `GET /api/stats`, `POST /api/stats` -- game statistics
/// - `GET /health` -- liveness and uptime
/// - anything else -- files from `frontend_dir`, `/` resolving to `index.html`
pub fn build_router(store: Arc<StatsStore>, frontend_dir: impl AsRef<Path>) -> Router {
    let assets = ServeDir::new(frontend_dir.as_ref());

    Router::new()
        .route("/api/stats", get(get_stats).post(update_stats))
        .route("/health", get(health_check))
        .with_state(store)
        .fallback_service(assets)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
        .layer(CorsLayer::permissive())
}
