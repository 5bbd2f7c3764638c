use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use crate::dashboard::DashboardPage;

#[derive(Debug)]
struct PageEntry {
    page: DashboardPage,
    last_seen: Instant,
}

/// Mounted dashboard pages keyed by session id.
///
/// Holds at most `max_sessions` pages; mounting past the cap evicts the
/// least recently used session. Every access refreshes a session's
/// `last_seen`.
#[derive(Debug, Clone)]
pub struct PageStore {
    inner: Arc<Mutex<HashMap<String, PageEntry>>>,
    max_sessions: usize,
}

impl PageStore {
    pub fn new(max_sessions: usize) -> Self {
        Self {
            inner: Arc::new(Mutex::new(HashMap::new())),
            max_sessions: max_sessions.max(1),
        }
    }

    /// Stores a freshly mounted page, replacing any earlier one for the same
    /// session. Returns the session ids evicted to stay under the cap.
    pub fn insert(&self, session_id: &str, page: DashboardPage) -> Vec<String> {
        let mut pages = self.inner.lock().unwrap();
        pages.insert(
            session_id.to_string(),
            PageEntry {
                page,
                last_seen: Instant::now(),
            },
        );

        let mut evicted = Vec::new();
        while pages.len() > self.max_sessions {
            let oldest = pages
                .iter()
                .filter(|(sid, _)| sid.as_str() != session_id)
                .min_by_key(|(_, entry)| entry.last_seen)
                .map(|(sid, _)| sid.clone());
            match oldest {
                Some(sid) => {
                    pages.remove(&sid);
                    evicted.push(sid);
                }
                None => break,
            }
        }
        evicted
    }

    pub fn contains(&self, session_id: &str) -> bool {
        self.inner.lock().unwrap().contains_key(session_id)
    }

    /// Runs `f` against the session's page, if it has one.
    pub fn with_page<R>(&self, session_id: &str, f: impl FnOnce(&mut DashboardPage) -> R) -> Option<R> {
        let mut pages = self.inner.lock().unwrap();
        let entry = pages.get_mut(session_id)?;
        entry.last_seen = Instant::now();
        Some(f(&mut entry.page))
    }

    /// Drops every page unused for longer than `max_idle` and returns the
    /// dropped session ids.
    pub fn sweep_idle(&self, max_idle: Duration) -> Vec<String> {
        let now = Instant::now();
        let mut pages = self.inner.lock().unwrap();
        let stale: Vec<String> = pages
            .iter()
            .filter(|(_, entry)| now.duration_since(entry.last_seen) >= max_idle)
            .map(|(sid, _)| sid.clone())
            .collect();
        for sid in &stale {
            pages.remove(sid);
        }
        stale
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
