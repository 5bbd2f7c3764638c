mod common;

use keel::api::{self, ApiConnection};
use keel::models::{granted_providers, FormInput, RecordId};
use keel::ApiError;
use serde_json::json;
use std::time::Duration;

use common::{spawn_backend, Backend};

#[tokio::test]
async fn test_load_providers_sends_bearer_token() {
    api::set_silent(true);
    let backend = Backend::default();
    let base = spawn_backend(backend.clone()).await;
    let conn = ApiConnection::new(base, "s3cret").unwrap();

    let providers = api::load_account_providers(&conn).await.unwrap();

    assert_eq!(providers.len(), 2);
    assert_eq!(granted_providers(providers)[0].display_name(), "gh");
    assert_eq!(*backend.auth_headers.lock().unwrap(), vec!["Bearer s3cret"]);
}

#[tokio::test]
async fn test_load_projects_unwraps_data_envelope() {
    api::set_silent(true);
    let base = spawn_backend(Backend::default()).await;
    let conn = ApiConnection::new(base, "").unwrap();

    let projects = api::load_projects(&conn).await.unwrap();

    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0].display_repository(), "acme/api");
    assert_eq!(projects[0].display_provider(), "1");
}

#[tokio::test]
async fn test_create_project_returns_record_with_extra_fields() {
    api::set_silent(true);
    let base = spawn_backend(Backend::default()).await;
    let conn = ApiConnection::new(base, "").unwrap();
    let input = FormInput::new()
        .with_field("name", "Foo")
        .with_field("repository", "acme/foo")
        .with_field("provider_id", "1");

    let project = api::create_project(&conn, &input).await.unwrap();

    assert_eq!(project.id, RecordId::Number(9));
    assert_eq!(project.name.as_deref(), Some("Foo"));
    assert_eq!(project.extra.get("created_at"), Some(&json!("2026-10-19 12:00:00")));
}

#[tokio::test]
async fn test_create_project_rejection_carries_body() {
    api::set_silent(true);
    let base = spawn_backend(Backend::default()).await;
    let conn = ApiConnection::new(base, "").unwrap();

    let err = api::create_project(&conn, &FormInput::new()).await.unwrap_err();

    match err {
        ApiError::Rejected { status, body } => {
            assert_eq!(status, 422);
            assert_eq!(body["errors"]["name"][0], "The name field is required.");
        }
        other => panic!("expected a rejection, got {:?}", other),
    }
}

#[tokio::test]
async fn test_unreachable_backend_is_a_network_error() {
    api::set_silent(true);
    // Grab a free port, then close it again so nothing is listening.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let conn = ApiConnection::new(format!("http://{}", addr), "").unwrap();

    let err = api::load_projects(&conn).await.unwrap_err();

    assert!(matches!(err, ApiError::Network(_)));
}

#[tokio::test]
async fn test_create_project_accepts_string_id() {
    api::set_silent(true);
    let base = spawn_backend(Backend::default()).await;
    let conn = ApiConnection::new(base, "").unwrap();

    let project = api::create_project(&conn, &FormInput::new().with_field("name", "slug"))
        .await
        .unwrap();

    assert_eq!(project.id, RecordId::from("a1b2"));
    assert_eq!(project.id.to_string(), "a1b2");
}

#[tokio::test]
async fn test_provider_with_null_name_keeps_the_list() {
    api::set_silent(true);
    let backend = Backend {
        providers: Some(json!([
            {"id": "prov-7", "name": null, "deploy_access_token": "x"},
            {"id": 8, "deploy_access_token": "y"}
        ])),
        ..Backend::default()
    };
    let base = spawn_backend(backend).await;
    let conn = ApiConnection::new(base, "").unwrap();

    let providers = granted_providers(api::load_account_providers(&conn).await.unwrap());

    assert_eq!(providers.len(), 2);
    assert_eq!(providers[0].id, RecordId::from("prov-7"));
    assert_eq!(providers[0].display_name(), "Provider prov-7");
    assert_eq!(providers[1].display_name(), "Provider 8");
}

#[tokio::test]
async fn test_non_json_error_is_unexpected_status() {
    api::set_silent(true);
    let base = spawn_backend(Backend::default()).await;
    let conn = ApiConnection::new(base, "").unwrap();

    let err = api::create_project(&conn, &FormInput::new().with_field("name", "down"))
        .await
        .unwrap_err();

    match err {
        ApiError::UnexpectedStatus { status, body } => {
            assert_eq!(status, 503);
            assert_eq!(body, "Service Unavailable");
        }
        other => panic!("expected an unexpected status, got {:?}", other),
    }
}

#[tokio::test]
async fn test_json_server_error_stays_a_rejection() {
    api::set_silent(true);
    let base = spawn_backend(Backend::default()).await;
    let conn = ApiConnection::new(base, "").unwrap();

    let err = api::create_project(&conn, &FormInput::new().with_field("name", "boom"))
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Rejected { status: 500, .. }));
}

#[tokio::test]
async fn test_slow_project_index_still_answers() {
    api::set_silent(true);
    let backend = Backend {
        projects_delay: Duration::from_millis(30),
        ..Backend::default()
    };
    let base = spawn_backend(backend).await;
    let conn = ApiConnection::new(base, "").unwrap();

    assert_eq!(api::load_projects(&conn).await.unwrap().len(), 1);
}
