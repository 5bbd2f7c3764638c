use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::record_id::RecordId;
use crate::utils::value_to_short_string;

/// A project as returned by the backend. Only `id` is guaranteed; everything
/// we do not model explicitly is kept in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: RecordId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub repository: Option<String>,
    #[serde(default)]
    pub provider_id: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Project {
    pub fn display_name(&self) -> String {
        self.name
            .clone()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| format!("Project {}", self.id))
    }

    pub fn display_repository(&self) -> String {
        self.repository.clone().unwrap_or_default()
    }

    pub fn display_provider(&self) -> String {
        self.provider_id
            .as_ref()
            .map(value_to_short_string)
            .unwrap_or_default()
    }
}
