pub mod app_state;
pub mod form_input;
pub mod page_store;
pub mod project;
pub mod projects_state;
pub mod provider;
pub mod record_id;
pub mod validation_errors;

pub use app_state::AppState;
pub use form_input::{form_change_events, is_checked_value, ChangeEvent, FieldValue, FormInput, InputKind, CHECKBOX_MARKER};
pub use page_store::PageStore;
pub use project::Project;
pub use projects_state::{ProjectStore, ProjectsState};
pub use provider::{granted_providers, Provider};
pub use record_id::RecordId;
pub use validation_errors::{flatten_validation_errors, ValidationErrors};
