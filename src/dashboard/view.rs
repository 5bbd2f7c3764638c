use std::collections::HashSet;

use crate::models::{FormInput, Project, Provider, RecordId, ValidationErrors};

/// One line of the projects table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRow {
    pub id: String,
    pub name: String,
    pub repository: String,
    pub provider: String,
}

impl From<&Project> for ProjectRow {
    fn from(p: &Project) -> Self {
        Self {
            id: p.id.to_string(),
            name: p.display_name(),
            repository: p.display_repository(),
            provider: p.display_provider(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListPanel {
    Loading,
    Empty,
    Table(Vec<ProjectRow>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderOption {
    pub id: String,
    pub name: String,
    pub checked: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateProjectForm {
    pub open: bool,
    pub errors: Vec<String>,
    pub name: String,
    pub repository: String,
    pub providers: Vec<ProviderOption>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardView {
    pub panel: ListPanel,
    pub form: CreateProjectForm,
}

/// Builds the dashboard view from the shared list and the page's own state.
///
/// Records created on this page are listed after the shared items unless the
/// shared list already holds a project with the same id. A refresh in flight
/// only shows the loading panel while there is nothing to list yet.
pub fn render_dashboard(
    is_fetching: bool,
    items: &[Project],
    created: &[Project],
    errors: &ValidationErrors,
    providers: &[Provider],
    input: &FormInput,
    modal_open: bool,
) -> DashboardView {
    let known: HashSet<&RecordId> = items.iter().map(|p| &p.id).collect();
    let rows: Vec<ProjectRow> = items
        .iter()
        .chain(created.iter().filter(|p| !known.contains(&p.id)))
        .map(ProjectRow::from)
        .collect();

    let panel = if !rows.is_empty() {
        ListPanel::Table(rows)
    } else if is_fetching {
        ListPanel::Loading
    } else {
        ListPanel::Empty
    };

    let selected_provider = input.get("provider_id").and_then(|v| v.as_text()).unwrap_or("");
    let providers = providers
        .iter()
        .map(|p| {
            let id = p.id.to_string();
            ProviderOption {
                checked: !selected_provider.is_empty() && id == selected_provider,
                name: p.display_name(),
                id,
            }
        })
        .collect();

    DashboardView {
        panel,
        form: CreateProjectForm {
            open: modal_open,
            errors: errors.messages().to_vec(),
            name: input.text("name").to_string(),
            repository: input.text("repository").to_string(),
            providers,
        },
    }
}
