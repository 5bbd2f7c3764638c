use async_trait::async_trait;

use crate::api::{load_projects, ApiConnection};
use crate::models::ProjectStore;
use crate::services::ListFetch;

/// Refreshes the shared `ProjectStore` from the backend.
#[derive(Clone)]
pub struct StoreListFetcher {
    store: ProjectStore,
    api: ApiConnection,
}

impl StoreListFetcher {
    pub fn new(store: ProjectStore, api: ApiConnection) -> Self {
        Self { store, api }
    }
}

#[async_trait]
impl ListFetch for StoreListFetcher {
    async fn trigger_list_fetch(&self) {
        let generation = self.store.begin_fetch();
        match load_projects(&self.api).await {
            Ok(items) => {
                let count = items.len();
                if self.store.finish_fetch(generation, items) {
                    tracing::info!(count, generation, "Project list refreshed");
                } else {
                    tracing::debug!(generation, "Dropped stale project list");
                }
            }
            Err(e) => {
                tracing::error!(%e, generation, "Failed to refresh project list");
                self.store.fail_fetch(generation);
            }
        }
    }
}

/// For callers with no shared list to refresh (the CLI).
#[derive(Clone, Copy, Default)]
pub struct NoopListFetch;

#[async_trait]
impl ListFetch for NoopListFetch {
    async fn trigger_list_fetch(&self) {}
}
