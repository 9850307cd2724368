use crate::{
    error::StatsError,
    models::{GameStats, StatsUpdate, UpdateResponse},
    services::StatsStore,
};
use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    Json,
};
use std::sync::Arc;

pub async fn get_stats(
    State(store): State<Arc<StatsStore>>,
) -> Result<Json<GameStats>, StatsError> {
    let stats = store.snapshot()?;
    Ok(Json(stats))
}

// Takes the raw body so a missing, unreadable or oversized payload is
// answered with the API's own error shape rather than axum's rejection.
pub async fn update_stats(
    State(store): State<Arc<StatsStore>>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<UpdateResponse>, StatsError> {
    let body = body.map_err(|rejection| {
        tracing::warn!("Failed to read stats body: {}", rejection.body_text());
        StatsError::no_json_data()
    })?;
    let update = StatsUpdate::from_body(&body)?;
    let stats = store.apply(&update)?;

    Ok(Json(UpdateResponse::updated(stats)))
}
