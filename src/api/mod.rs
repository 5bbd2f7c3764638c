// Backend API modules
pub mod client;
pub mod projects;
pub mod account_providers;

// Re-export commonly used items
pub use client::{api_call, set_silent, ApiConnection};
pub use projects::{create_project, load_projects};
pub use account_providers::load_account_providers;
