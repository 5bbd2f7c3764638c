//! Narrow contracts between the dashboard page and the rest of the console.
//!
//! The page only ever sees these traits, so the web server and the CLI can
//! both drive it.

use async_trait::async_trait;

use crate::error::ApiError;
use crate::models::{FormInput, Project, Provider};

/// Refreshes the shared project list. The result lands in the shared store;
/// callers only learn that the refresh has settled.
#[async_trait]
pub trait ListFetch: Send + Sync {
    async fn trigger_list_fetch(&self);
}

/// Shows a one-off message to the user.
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str);
}

#[async_trait]
pub trait ProjectService: Send + Sync {
    async fn create(&self, input: &FormInput) -> Result<Project, ApiError>;
}

#[async_trait]
pub trait AccountProviderService: Send + Sync {
    async fn index(&self) -> Result<Vec<Provider>, ApiError>;
}
