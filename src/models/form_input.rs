use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Value held by a single form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Flag(bool),
    Text(String),
}

impl FieldValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            FieldValue::Flag(_) => None,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Flag(b)
    }
}

/// HTML input kind of the element that fired a change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputKind {
    #[default]
    Text,
    Radio,
    Checkbox,
}

impl InputKind {
    /// Maps an HTML `type` attribute onto the kinds the form cares about.
    pub fn from_html_type(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "checkbox" => InputKind::Checkbox,
            "radio" => InputKind::Radio,
            _ => InputKind::Text,
        }
    }
}

/// A single field change coming from the create-project form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEvent {
    pub name: String,
    pub kind: InputKind,
    pub value: String,
    pub checked: bool,
}

impl ChangeEvent {
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: InputKind::Text,
            value: value.into(),
            checked: false,
        }
    }

    pub fn radio(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            kind: InputKind::Radio,
            checked: true,
            ..Self::text(name, value)
        }
    }

    pub fn checkbox(name: impl Into<String>, checked: bool) -> Self {
        Self {
            name: name.into(),
            kind: InputKind::Checkbox,
            value: String::new(),
            checked,
        }
    }

    /// Checkboxes report their checked state, everything else its string value.
    pub fn field_value(&self) -> FieldValue {
        match self.kind {
            InputKind::Checkbox => FieldValue::Flag(self.checked),
            InputKind::Text | InputKind::Radio => FieldValue::Text(self.value.clone()),
        }
    }
}

/// Hidden field listing the checkbox names a form carries. Browsers leave an
/// unchecked box out of the body entirely, so this is how a submit can tell
/// "unchecked" from "not on this form".
pub const CHECKBOX_MARKER: &str = "_checkboxes";

/// Whether a submitted checkbox value means "checked".
pub fn is_checked_value(raw: &str) -> bool {
    matches!(raw.trim().to_ascii_lowercase().as_str(), "on" | "true" | "1")
}

/// Turns a submitted urlencoded form into change events.
///
/// Names listed under `CHECKBOX_MARKER` become checkbox events, unchecked when
/// absent from the body. Every other field is a text event carrying its last
/// value.
pub fn form_change_events(mut form: BTreeMap<String, Vec<String>>) -> Vec<ChangeEvent> {
    let checkboxes: Vec<String> = form
        .remove(CHECKBOX_MARKER)
        .unwrap_or_default()
        .iter()
        .flat_map(|list| list.split(','))
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect();

    let mut events = Vec::with_capacity(form.len() + checkboxes.len());
    for name in &checkboxes {
        let checked = form
            .remove(name)
            .map(|values| values.iter().any(|v| is_checked_value(v)))
            .unwrap_or(false);
        events.push(ChangeEvent::checkbox(name.clone(), checked));
    }
    for (name, values) in form {
        if let Some(value) = values.into_iter().last() {
            events.push(ChangeEvent::text(name, value));
        }
    }
    events
}

/// Key-value state backing the create-project form.
///
/// Updates never touch the current map: every change produces a fresh
/// `FormInput` and the caller swaps it in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FormInput {
    fields: BTreeMap<String, FieldValue>,
}

impl FormInput {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_field(&self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        let mut fields = self.fields.clone();
        fields.insert(name.into(), value.into());
        Self { fields }
    }

    #[must_use]
    pub fn apply(&self, event: &ChangeEvent) -> Self {
        self.with_field(event.name.clone(), event.field_value())
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    /// String value of a field, or "" when unset or not textual.
    pub fn text(&self, name: &str) -> &str {
        self.get(name).and_then(FieldValue::as_text).unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &FieldValue)> {
        self.fields.iter()
    }

    /// JSON object sent as the create-project payload.
    pub fn to_json(&self) -> Value {
        let map = self
            .fields
            .iter()
            .map(|(k, v)| {
                let value = match v {
                    FieldValue::Flag(b) => Value::Bool(*b),
                    FieldValue::Text(s) => Value::String(s.clone()),
                };
                (k.clone(), value)
            })
            .collect();
        Value::Object(map)
    }
}

impl<K: Into<String>, V: Into<FieldValue>> FromIterator<(K, V)> for FormInput {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}
