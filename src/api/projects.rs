use async_trait::async_trait;
use reqwest::Method;

use super::client::{api_call, unwrap_collection, unwrap_record, ApiConnection};
use crate::config::PROJECTS_ENDPOINT;
use crate::error::ApiError;
use crate::models::{FormInput, Project};
use crate::services::ProjectService;

/// Load every project visible to the configured token.
pub async fn load_projects(conn: &ApiConnection) -> Result<Vec<Project>, ApiError> {
    let payload = api_call(conn, Method::GET, PROJECTS_ENDPOINT, None).await?;
    serde_json::from_value(unwrap_collection(payload)).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Create a project from the form payload.
pub async fn create_project(conn: &ApiConnection, input: &FormInput) -> Result<Project, ApiError> {
    let body = input.to_json();
    let payload = api_call(conn, Method::POST, PROJECTS_ENDPOINT, Some(&body)).await?;
    serde_json::from_value(unwrap_record(payload)).map_err(|e| ApiError::Decode(e.to_string()))
}

#[async_trait]
impl ProjectService for ApiConnection {
    async fn create(&self, input: &FormInput) -> Result<Project, ApiError> {
        create_project(self, input).await
    }
}
