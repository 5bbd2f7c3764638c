use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::api::ApiConnection;
use crate::config::{DEFAULT_MAX_SESSIONS, DEFAULT_SESSION_IDLE_SECS};
use crate::dashboard::DashboardPage;
use crate::models::page_store::PageStore;
use crate::models::projects_state::ProjectStore;

#[derive(Clone)]
pub struct AppState {
    /// Dashboard page state keyed by session id.
    pub pages: PageStore,
    pub flash_store: Arc<Mutex<HashMap<String, Vec<String>>>>,
    pub projects: ProjectStore,
    pub api: ApiConnection,
    pub public_base_url: String,
    pub custom_css: Option<String>,
    pub session_idle_timeout: Duration,
}

impl AppState {
    pub fn new(api: ApiConnection, public_base_url: String) -> Self {
        Self::with_session_limits(
            api,
            public_base_url,
            DEFAULT_MAX_SESSIONS,
            Duration::from_secs(DEFAULT_SESSION_IDLE_SECS),
        )
    }

    pub fn with_session_limits(
        api: ApiConnection,
        public_base_url: String,
        max_sessions: usize,
        session_idle_timeout: Duration,
    ) -> Self {
        Self {
            pages: PageStore::new(max_sessions),
            flash_store: Arc::new(Mutex::new(HashMap::new())),
            projects: ProjectStore::new(),
            api,
            public_base_url,
            custom_css: None,
            session_idle_timeout,
        }
    }

    pub fn has_page(&self, session_id: &str) -> bool {
        self.pages.contains(session_id)
    }

    /// Stores the session's page and forgets everything held for sessions
    /// evicted to make room.
    pub fn mount_page(&self, session_id: &str, page: DashboardPage) {
        let evicted = self.pages.insert(session_id, page);
        if !evicted.is_empty() {
            tracing::info!(count = evicted.len(), "Evicted least recently used sessions");
            self.forget_flash(&evicted);
        }
    }

    /// Drops idle sessions along with their pending flash messages. Flash
    /// entries for sessions with no page left are dropped too.
    pub fn sweep_idle_sessions(&self) -> usize {
        let dropped = self.pages.sweep_idle(self.session_idle_timeout);
        // The page lock is taken before the flash lock elsewhere, so never
        // hold the flash lock while asking the page store.
        let flashed: Vec<String> = self.flash_store.lock().unwrap().keys().cloned().collect();
        let orphaned: Vec<String> = flashed.into_iter().filter(|sid| !self.pages.contains(sid)).collect();
        self.forget_flash(&orphaned);
        dropped.len()
    }

    fn forget_flash(&self, session_ids: &[String]) {
        let mut flash = self.flash_store.lock().unwrap();
        for sid in session_ids {
            flash.remove(sid);
        }
    }
}
