use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;

use crate::handlers::helpers::session_id_from_jar;
use crate::models::AppState;

/// Page actions only make sense for a mounted dashboard; everyone else is
/// sent to `/` to mount one.
pub async fn require_mounted_page(
    State(state): State<AppState>,
    jar: CookieJar,
    request: Request,
    next: Next,
) -> Response {
    match session_id_from_jar(&jar) {
        Some(sid) if state.has_page(&sid) => next.run(request).await,
        _ => Redirect::to("/").into_response(),
    }
}
