use axum::{
    body::Bytes,
    extract::{Form, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;

use crate::dashboard::DashboardPage;
use crate::handlers::helpers::{build_template_globals, ensure_session, plain_html, render_template, session_id_from_jar};
use crate::models::{form_change_events, is_checked_value, AppState, ChangeEvent, InputKind};
use crate::services::{FlashNotifier, StoreListFetcher};
use crate::templates::DashboardTemplate;
use crate::utils::parse_urlencoded_body;

#[derive(Deserialize, Debug)]
pub struct FieldChangeForm {
    name: String,
    #[serde(default)]
    value: String,
    #[serde(rename = "type")]
    kind: Option<String>,
    checked: Option<String>,
}

impl FieldChangeForm {
    fn into_event(self) -> ChangeEvent {
        let kind = self.kind.as_deref().map(InputKind::from_html_type).unwrap_or_default();
        let checked = self.checked.as_deref().map(is_checked_value).unwrap_or(false);
        ChangeEvent {
            name: self.name,
            kind,
            value: self.value,
            checked,
        }
    }
}

fn short_sid(sid: &str) -> &str {
    &sid[..sid.len().min(8)]
}

fn render_page(state: &AppState, session_id: &str) -> Response {
    let store = state.projects.snapshot();
    let Some(view) = state.pages.with_page(session_id, |page| page.render(&store)) else {
        return Redirect::to("/").into_response();
    };
    let globals = build_template_globals(state, session_id);
    render_template(DashboardTemplate { globals, view })
}

/// Mounts a fresh dashboard for the session and renders it. Reloading the
/// page starts over with an empty form.
pub async fn dashboard_get(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    let (jar, sid) = ensure_session(jar);
    let fetcher = StoreListFetcher::new(state.projects.clone(), state.api.clone());
    let page = DashboardPage::mount(&fetcher, &state.api).await;
    tracing::info!(
        session = short_sid(&sid),
        providers = page.granted_providers().len(),
        "Dashboard mounted"
    );
    state.mount_page(&sid, page);
    (jar, render_page(&state, &sid)).into_response()
}

pub async fn field_change_post(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<FieldChangeForm>,
) -> impl IntoResponse {
    let Some(sid) = session_id_from_jar(&jar) else {
        return Redirect::to("/").into_response();
    };
    let event = form.into_event();
    state.pages.with_page(&sid, |page| page.handle_input_change(&event));
    StatusCode::NO_CONTENT.into_response()
}

/// Takes the submitted form fields as change events, then creates the project.
/// Checkboxes named in the `_checkboxes` field are applied as flags.
pub async fn project_create_post(State(state): State<AppState>, jar: CookieJar, body: Bytes) -> impl IntoResponse {
    let Some(sid) = session_id_from_jar(&jar) else {
        return Redirect::to("/").into_response();
    };

    let events = form_change_events(parse_urlencoded_body(&body));
    let submission = state.pages.with_page(&sid, |page| {
        for event in &events {
            page.handle_input_change(event);
        }
        page.submission()
    });
    let Some(submission) = submission else {
        return Redirect::to("/").into_response();
    };

    // The lock is released while the backend works; a concurrent submit from
    // the same session is not blocked.
    let outcome = crate::api::create_project(&state.api, &submission).await;

    let notifier = FlashNotifier::new(state.flash_store.clone(), sid.clone());
    let Some(applied) = state
        .pages
        .with_page(&sid, |page| page.apply_submit_outcome(outcome, &notifier))
    else {
        return Redirect::to("/").into_response();
    };

    if let Err(e) = applied {
        tracing::error!(%e, session = short_sid(&sid), "Project submission failed");
        return plain_html(StatusCode::BAD_GATEWAY, format!("Could not create the project: {}", e));
    }
    render_page(&state, &sid)
}

pub async fn project_dismiss_post(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    let Some(sid) = session_id_from_jar(&jar) else {
        return Redirect::to("/").into_response();
    };
    state.pages.with_page(&sid, DashboardPage::dismiss);
    render_page(&state, &sid)
}
