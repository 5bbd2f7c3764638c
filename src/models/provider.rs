use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::record_id::RecordId;
use crate::utils::is_truthy;

/// A source-control account linked to the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Provider {
    pub id: RecordId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub deploy_access_token: Option<Value>,
}

impl Provider {
    /// Only providers that were granted deploy access can host a project.
    pub fn has_deploy_access(&self) -> bool {
        self.deploy_access_token.as_ref().map(is_truthy).unwrap_or(false)
    }

    pub fn display_name(&self) -> String {
        self.name
            .clone()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| format!("Provider {}", self.id))
    }
}

pub fn granted_providers(providers: Vec<Provider>) -> Vec<Provider> {
    providers.into_iter().filter(Provider::has_deploy_access).collect()
}
