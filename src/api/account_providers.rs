use async_trait::async_trait;
use reqwest::Method;

use super::client::{api_call, unwrap_collection, ApiConnection};
use crate::config::ACCOUNT_PROVIDERS_ENDPOINT;
use crate::error::ApiError;
use crate::models::Provider;
use crate::services::AccountProviderService;

/// Load all source-control providers linked to the account, granted or not.
pub async fn load_account_providers(conn: &ApiConnection) -> Result<Vec<Provider>, ApiError> {
    let payload = api_call(conn, Method::GET, ACCOUNT_PROVIDERS_ENDPOINT, None).await?;
    serde_json::from_value(unwrap_collection(payload)).map_err(|e| ApiError::Decode(e.to_string()))
}

#[async_trait]
impl AccountProviderService for ApiConnection {
    async fn index(&self) -> Result<Vec<Provider>, ApiError> {
        load_account_providers(self).await
    }
}
