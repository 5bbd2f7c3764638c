use askama::Template;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar};

use crate::models::AppState;
use crate::services::random_session_id;

pub const SESSION_COOKIE: &str = "session_id";

pub fn session_id_from_jar(jar: &CookieJar) -> Option<String> {
    jar.get(SESSION_COOKIE)
        .map(|c| c.value().to_string())
        .filter(|v| !v.is_empty())
}

/// Returns the session id carried by the jar, minting a new cookie when the
/// browser has none yet.
pub fn ensure_session(jar: CookieJar) -> (CookieJar, String) {
    if let Some(sid) = session_id_from_jar(&jar) {
        return (jar, sid);
    }
    let sid = random_session_id();
    let mut cookie = Cookie::new(SESSION_COOKIE, sid.clone());
    cookie.set_path("/");
    cookie.set_http_only(true);
    (jar.add(cookie), sid)
}

pub fn take_flash_messages(state: &AppState, session_id: &str) -> Vec<String> {
    state
        .flash_store
        .lock()
        .unwrap()
        .remove(session_id)
        .unwrap_or_default()
}

/// Values every page template needs.
#[derive(Debug, Default)]
pub struct TemplateGlobals {
    pub api_hostname: String,
    pub base_url: String,
    pub flash_messages: Vec<String>,
    pub has_flash_messages: bool,
}

pub fn build_template_globals(state: &AppState, session_id: &str) -> TemplateGlobals {
    let flash_messages = take_flash_messages(state, session_id);
    let has_flash_messages = !flash_messages.is_empty();
    TemplateGlobals {
        api_hostname: crate::utils::hostname_from_url(&state.api.api_base_url),
        base_url: state.public_base_url.clone(),
        flash_messages,
        has_flash_messages,
    }
}

pub fn plain_html<S: AsRef<str>>(status: StatusCode, s: S) -> Response {
    let body = format!(
        "<!DOCTYPE html><html><body><p>{}</p><p><a href=\"/\">Back to projects</a></p></body></html>",
        s.as_ref()
    );
    (status, Html(body)).into_response()
}

pub fn render_template<T: Template>(t: T) -> Response {
    match t.render() {
        Ok(body) => Html(body).into_response(),
        Err(e) => {
            tracing::error!(%e, "Template render error");
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
        }
    }
}
