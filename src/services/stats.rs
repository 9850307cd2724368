use crate::{
    error::StatsError,
    models::{GameStats, StatsUpdate},
};
use std::sync::{Mutex, MutexGuard};
use std::time::Instant;

/// Process-wide game statistics.
///
/// The record lives behind a single mutex so that each update is applied
/// as one critical section.
pub struct StatsStore {
    stats: Mutex<GameStats>,
    start_time: Instant,
}

impl StatsStore {
    pub fn new() -> Self {
        Self {
            stats: Mutex::new(GameStats::default()),
            start_time: Instant::now(),
        }
    }

    pub fn snapshot(&self) -> Result<GameStats, StatsError> {
        Ok(*self.lock()?)
    }

    pub fn apply(&self, update: &StatsUpdate) -> Result<GameStats, StatsError> {
        let mut stats = self.lock()?;
        let next = stats.apply(update)?;
        *stats = next;
        drop(stats);

        match &update.result {
            Some(result) => tracing::info!(
                "Game recorded: {} (total {}, highest score {})",
                result,
                next.total_games,
                next.highest_score
            ),
            None => tracing::debug!(
                "Stats update without result, highest score {}",
                next.highest_score
            ),
        }

        Ok(next)
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }

    fn lock(&self) -> Result<MutexGuard<'_, GameStats>, StatsError> {
        self.stats
            .lock()
            .map_err(|e| StatsError::Internal(format!("stats lock poisoned: {}", e)))
    }
}

impl Default for StatsStore {
    fn default() -> Self {
        Self::new()
    }
}
