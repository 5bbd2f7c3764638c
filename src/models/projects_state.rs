use std::sync::{Arc, Mutex};

use super::project::Project;

/// Shared project list the dashboard reads from.
#[derive(Debug, Clone)]
pub struct ProjectsState {
    pub is_fetching: bool,
    pub items: Vec<Project>,
}

impl Default for ProjectsState {
    fn default() -> Self {
        // Nothing has been fetched yet, so the list starts out loading.
        Self {
            is_fetching: true,
            items: Vec::new(),
        }
    }
}

#[derive(Debug, Default)]
struct StoreInner {
    state: ProjectsState,
    /// Generation handed to the most recent `begin_fetch`.
    started: u64,
    /// Generation whose items are currently stored.
    applied: u64,
}

/// Cloneable handle to the shared `ProjectsState`.
///
/// Every fetch gets a generation number. Results from a fetch older than the
/// one already applied are dropped, and the list only stops loading once the
/// newest fetch has settled.
#[derive(Debug, Clone, Default)]
pub struct ProjectStore {
    inner: Arc<Mutex<StoreInner>>,
}

impl ProjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_fetch(&self) -> u64 {
        let mut inner = self.inner.lock().unwrap();
        inner.started += 1;
        inner.state.is_fetching = true;
        inner.started
    }

    /// Stores `items` unless a newer fetch already landed. Returns whether the
    /// items were applied.
    pub fn finish_fetch(&self, generation: u64, items: Vec<Project>) -> bool {
        let mut inner = self.inner.lock().unwrap();
        let applied = generation > inner.applied;
        if applied {
            inner.applied = generation;
            inner.state.items = items;
        }
        if generation >= inner.started {
            inner.state.is_fetching = false;
        }
        applied
    }

    /// A failed fetch keeps whatever items were there before.
    pub fn fail_fetch(&self, generation: u64) {
        let mut inner = self.inner.lock().unwrap();
        if generation >= inner.started {
            inner.state.is_fetching = false;
        }
    }

    pub fn snapshot(&self) -> ProjectsState {
        self.inner.lock().unwrap().state.clone()
    }
}
