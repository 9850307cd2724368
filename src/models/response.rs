use super::GameStats;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const STATS_UPDATED: &str = "Stats updated!";

#[derive(Serialize, Deserialize, Debug)]
pub struct UpdateResponse {
    pub message: String,
    pub stats: GameStats,
}

impl UpdateResponse {
    pub fn updated(stats: GameStats) -> Self {
        Self {
            message: STATS_UPDATED.to_string(),
            stats,
        }
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub total_games: u64,
    pub timestamp: DateTime<Utc>,
}
