//! The project dashboard: page state, its event handlers and the pure view
//! it renders to.

pub mod page;
pub mod view;

pub use page::{DashboardPage, SubmitOutcome};
pub use view::{render_dashboard, CreateProjectForm, DashboardView, ListPanel, ProjectRow, ProviderOption};
