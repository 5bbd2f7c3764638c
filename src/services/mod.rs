pub mod capabilities;
pub mod list_fetch_service;
pub mod notify_service;
pub mod session_service;

// Re-export commonly used items
pub use capabilities::{AccountProviderService, ListFetch, Notifier, ProjectService};
pub use list_fetch_service::{NoopListFetch, StoreListFetcher};
pub use notify_service::{FlashNotifier, TerminalNotifier};
pub use session_service::random_session_id;
