use std::time::Duration;

use tokio::task::JoinHandle;

use crate::models::AppState;

/// Periodically drops idle dashboard sessions. The first sweep runs one
/// `every` after start.
pub fn spawn_session_sweeper(state: AppState, every: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval_at(tokio::time::Instant::now() + every, every);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            let dropped = state.sweep_idle_sessions();
            if dropped > 0 {
                tracing::info!(dropped, remaining = state.pages.len(), "Swept idle sessions");
            } else {
                tracing::debug!(remaining = state.pages.len(), "No idle sessions to sweep");
            }
        }
    })
}
