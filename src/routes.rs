use axum::{
    http::{
        header::{CACHE_CONTROL, CONTENT_TYPE},
        HeaderValue,
    },
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::models::AppState;

// Embed the default assets in the binary
const DEFAULT_STYLESHEET: &str = include_str!("../static/styles.css");
const DASHBOARD_SCRIPT: &str = include_str!("../static/dashboard.js");

fn static_routes(stylesheet: String) -> Router<AppState> {
    Router::new()
        .route(
            "/static/styles.css",
            get(move || {
                let css = stylesheet.clone();
                async move { ([(CONTENT_TYPE, "text/css")], css) }
            }),
        )
        .route(
            "/static/dashboard.js",
            get(|| async { ([(CONTENT_TYPE, "application/javascript")], DASHBOARD_SCRIPT) }),
        )
        .layer(ServiceBuilder::new().layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static("public, max-age=3600"),
        )))
}

pub fn build_router(state: AppState) -> Router {
    let page_routes = Router::new()
        .route("/projects", post(handlers::dashboard::project_create_post))
        .route("/projects/field", post(handlers::dashboard::field_change_post))
        .route("/projects/dismiss", post(handlers::dashboard::project_dismiss_post))
        .route_layer(axum::middleware::from_fn_with_state(
            state.clone(),
            handlers::middleware::require_mounted_page,
        ));

    // Serve the custom stylesheet when one was provided, the embedded one otherwise
    let stylesheet = state
        .custom_css
        .clone()
        .unwrap_or_else(|| DEFAULT_STYLESHEET.to_string());

    Router::new()
        .route("/", get(handlers::dashboard::dashboard_get))
        .merge(page_routes)
        .merge(static_routes(stylesheet))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
