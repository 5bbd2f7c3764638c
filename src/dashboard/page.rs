use futures_util::future::join;

use crate::config::PROJECT_CREATED_MESSAGE;
use crate::error::{ApiError, DashboardError};
use crate::models::{
    flatten_validation_errors, granted_providers, ChangeEvent, FormInput, Project, ProjectsState, Provider,
    ValidationErrors,
};
use crate::services::{AccountProviderService, ListFetch, Notifier, ProjectService};

use super::view::{render_dashboard, DashboardView};

/// What a submit did to the page when the backend gave a usable answer.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Created(Project),
    Rejected(ValidationErrors),
}

/// Local state of one mounted dashboard.
#[derive(Debug, Clone, Default)]
pub struct DashboardPage {
    projects: Vec<Project>,
    granted_providers: Vec<Provider>,
    errors: ValidationErrors,
    input: FormInput,
    modal_open: bool,
}

impl DashboardPage {
    /// Mounts a fresh page: refreshes the shared list and loads the providers
    /// that may host a project. Both requests run concurrently and the page is
    /// returned once both have settled.
    ///
    /// A failed provider query leaves the page with no selectable provider.
    pub async fn mount<L, P>(list: &L, providers: &P) -> Self
    where
        L: ListFetch + ?Sized,
        P: AccountProviderService + ?Sized,
    {
        let ((), listed) = join(list.trigger_list_fetch(), providers.index()).await;

        let granted = match listed {
            Ok(all) => granted_providers(all),
            Err(e) => {
                tracing::warn!(%e, "Could not load account providers");
                Vec::new()
            }
        };

        Self {
            granted_providers: granted,
            ..Self::default()
        }
    }

    pub fn handle_input_change(&mut self, event: &ChangeEvent) {
        self.input = self.input.apply(event);
    }

    /// Payload the next submit will send.
    pub fn submission(&self) -> FormInput {
        self.input.clone()
    }

    /// Applies the create service's answer to the page.
    ///
    /// Anything other than a created record or a field-error body is handed
    /// back to the caller and leaves the page as it was. A rejection naming no
    /// field at all counts as malformed.
    pub fn apply_submit_outcome<N>(
        &mut self,
        outcome: Result<Project, ApiError>,
        notifier: &N,
    ) -> Result<SubmitOutcome, DashboardError>
    where
        N: Notifier + ?Sized,
    {
        match outcome {
            Ok(project) => {
                tracing::info!(project_id = %project.id, "Project created");
                notifier.notify(PROJECT_CREATED_MESSAGE);
                self.modal_open = false;
                self.projects.push(project.clone());
                self.errors = ValidationErrors::default();
                Ok(SubmitOutcome::Created(project))
            }
            Err(ApiError::Rejected { status, body }) => {
                let errors = flatten_validation_errors(&body)?;
                if errors.is_empty() {
                    return Err(DashboardError::MalformedValidationPayload(format!(
                        "status {} rejection names no field: {}",
                        status, body
                    )));
                }
                tracing::info!(status, fields = errors.len(), "Project rejected by backend");
                self.errors = errors.clone();
                self.modal_open = true;
                Ok(SubmitOutcome::Rejected(errors))
            }
            Err(e) => Err(e.into()),
        }
    }

    pub async fn submit<S, N>(&mut self, service: &S, notifier: &N) -> Result<SubmitOutcome, DashboardError>
    where
        S: ProjectService + ?Sized,
        N: Notifier + ?Sized,
    {
        let input = self.submission();
        let outcome = service.create(&input).await;
        self.apply_submit_outcome(outcome, notifier)
    }

    pub fn dismiss(&mut self) {
        self.errors = ValidationErrors::default();
        self.modal_open = false;
    }

    pub fn render(&self, store: &ProjectsState) -> DashboardView {
        render_dashboard(
            store.is_fetching,
            &store.items,
            &self.projects,
            &self.errors,
            &self.granted_providers,
            &self.input,
            self.modal_open,
        )
    }

    pub fn input(&self) -> &FormInput {
        &self.input
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn granted_providers(&self) -> &[Provider] {
        &self.granted_providers
    }

    /// Records created from this page, in creation order.
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal_open
    }
}
