use crate::{error::StatsError, models::HealthStatus, services::StatsStore};
use axum::{extract::State, Json};
use chrono::Utc;
use std::sync::Arc;

pub async fn health_check(
    State(store): State<Arc<StatsStore>>,
) -> Result<Json<HealthStatus>, StatsError> {
    let stats = store.snapshot()?;

    Ok(Json(HealthStatus {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: store.uptime_seconds(),
        total_games: stats.total_games,
        timestamp: Utc::now(),
    }))
}
