//! In-process stand-in for the deployment backend.
#![allow(dead_code)]

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Clone, Default)]
pub struct Backend {
    /// Authorization headers seen, in request order.
    pub auth_headers: Arc<Mutex<Vec<String>>>,
    pub created: Arc<Mutex<Vec<Value>>>,
    /// Bodies posted to the project store, in request order.
    pub payloads: Arc<Mutex<Vec<Value>>>,
    /// How long the project index takes to answer.
    pub projects_delay: Duration,
    /// Replaces the default provider list when set.
    pub providers: Option<Value>,
}

async fn providers_index(State(backend): State<Backend>, headers: HeaderMap) -> impl IntoResponse {
    if let Some(auth) = headers.get("authorization").and_then(|v| v.to_str().ok()) {
        backend.auth_headers.lock().unwrap().push(auth.to_string());
    }
    Json(backend.providers.clone().unwrap_or_else(|| {
        json!([
            {"id": 1, "name": "gh", "deploy_access_token": "x"},
            {"id": 2, "name": "gl", "deploy_access_token": null}
        ])
    }))
}

async fn projects_index(State(backend): State<Backend>) -> impl IntoResponse {
    if !backend.projects_delay.is_zero() {
        tokio::time::sleep(backend.projects_delay).await;
    }
    let mut items = vec![json!({"id": 1, "name": "api", "repository": "acme/api", "provider_id": 1})];
    items.extend(backend.created.lock().unwrap().iter().cloned());
    Json(json!({"data": items}))
}

/// Special names: "legacy" gets a flat error map, "empty" a rejection with no
/// fields, "boom" a JSON 500, "down" a plain-text 503 and "slug" a string id.
async fn projects_store(State(backend): State<Backend>, Json(input): Json<Value>) -> Response {
    backend.payloads.lock().unwrap().push(input.clone());
    let name = input.get("name").and_then(Value::as_str).unwrap_or("").trim().to_string();
    if name.is_empty() {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({
                "message": "The given data was invalid.",
                "errors": {"name": ["The name field is required.", "The name must be a string."]}
            })),
        )
            .into_response();
    }
    match name.as_str() {
        "legacy" => {
            return (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({"repository": ["The repository format is invalid."]})),
            )
                .into_response()
        }
        "empty" => return (StatusCode::UNPROCESSABLE_ENTITY, Json(json!({"errors": {}}))).into_response(),
        "boom" => return (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({"message": "Server Error"}))).into_response(),
        "down" => return (StatusCode::SERVICE_UNAVAILABLE, "Service Unavailable").into_response(),
        _ => {}
    }
    let mut created = backend.created.lock().unwrap();
    let id = if name == "slug" {
        json!("a1b2")
    } else {
        json!(9 + created.len() as u64)
    };
    let record = json!({
        "id": id,
        "name": name,
        "repository": input.get("repository").cloned().unwrap_or(Value::Null),
        "provider_id": input.get("provider_id").cloned().unwrap_or(Value::Null),
        "created_at": "2026-10-19 12:00:00"
    });
    created.push(record.clone());
    (StatusCode::CREATED, Json(record)).into_response()
}

/// Starts the fake backend and returns its base URL.
pub async fn spawn_backend(backend: Backend) -> String {
    let app = Router::new()
        .route("/api/account-providers", get(providers_index))
        .route("/api/projects", get(projects_index).post(projects_store))
        .with_state(backend);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}
