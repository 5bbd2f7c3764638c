use serde::Serialize;
use serde_json::Value;

use crate::error::DashboardError;

/// Display-ready list holding the first error message of each invalid field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<String>);

impl ValidationErrors {
    pub fn new(messages: Vec<String>) -> Self {
        Self(messages)
    }

    pub fn messages(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }
}

impl From<ValidationErrors> for Vec<String> {
    fn from(errors: ValidationErrors) -> Self {
        errors.0
    }
}

/// Flattens a validation body into one message per field.
///
/// Accepts both `{"field": ["msg", ...]}` and the same map wrapped under an
/// `errors` key. Fields keep the order they have in the body.
pub fn flatten_validation_errors(body: &Value) -> Result<ValidationErrors, DashboardError> {
    let fields = match body.as_object().and_then(|obj| obj.get("errors")) {
        Some(inner) => inner,
        None => body,
    };
    let fields = fields.as_object().ok_or_else(|| {
        DashboardError::MalformedValidationPayload(format!("expected an object of fields, got {}", fields))
    })?;

    let mut messages = Vec::with_capacity(fields.len());
    for (field, value) in fields {
        let first = value
            .as_array()
            .and_then(|list| list.first())
            .and_then(Value::as_str)
            .ok_or_else(|| {
                DashboardError::MalformedValidationPayload(format!(
                    "field `{}` has no message list: {}",
                    field, value
                ))
            })?;
        messages.push(first.to_string());
    }
    Ok(ValidationErrors(messages))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn keeps_field_order_from_body() {
        let body = json!({"repository": ["Repository is invalid"], "name": ["Name is required"]});
        let errors = flatten_validation_errors(&body).unwrap();
        assert_eq!(errors.messages(), ["Repository is invalid", "Name is required"]);
    }

    #[test]
    fn empty_map_yields_no_messages() {
        assert!(flatten_validation_errors(&json!({})).unwrap().is_empty());
        assert!(flatten_validation_errors(&json!({"errors": {}})).unwrap().is_empty());
    }
}
