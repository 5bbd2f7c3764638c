use keel::models::{form_change_events, is_checked_value, ChangeEvent, FieldValue, FormInput, InputKind};
use std::collections::BTreeMap;
use serde_json::json;

#[test]
fn test_last_value_per_field_wins() {
    let events = [
        ChangeEvent::text("name", "F"),
        ChangeEvent::text("repository", "acme/web"),
        ChangeEvent::text("name", "Foo"),
        ChangeEvent::radio("provider_id", "2"),
        ChangeEvent::radio("provider_id", "1"),
    ];
    let input = events.iter().fold(FormInput::new(), |acc, e| acc.apply(e));

    assert_eq!(input.text("name"), "Foo");
    assert_eq!(input.text("repository"), "acme/web");
    assert_eq!(input.text("provider_id"), "1");
    assert_eq!(input.len(), 3);
}

#[test]
fn test_order_of_distinct_keys_does_not_matter() {
    let a = ChangeEvent::text("name", "Foo");
    let b = ChangeEvent::text("repository", "acme/web");
    let c = ChangeEvent::checkbox("auto_deploy", true);

    let forward = FormInput::new().apply(&a).apply(&b).apply(&c);
    let backward = FormInput::new().apply(&c).apply(&b).apply(&a);

    assert_eq!(forward, backward);
}

#[test]
fn test_update_leaves_previous_map_untouched() {
    let before = FormInput::new().with_field("name", "Foo");
    let after = before.with_field("name", "Bar");

    assert_eq!(before.text("name"), "Foo");
    assert_eq!(after.text("name"), "Bar");
}

#[test]
fn test_checkbox_records_checked_state() {
    let input = FormInput::new()
        .apply(&ChangeEvent::checkbox("auto_deploy", true))
        .apply(&ChangeEvent::checkbox("notify", false));

    assert_eq!(input.get("auto_deploy"), Some(&FieldValue::Flag(true)));
    assert_eq!(input.get("notify"), Some(&FieldValue::Flag(false)));
    // Flags have no text form
    assert_eq!(input.text("auto_deploy"), "");
}

#[test]
fn test_input_kind_from_html_type() {
    assert_eq!(InputKind::from_html_type("checkbox"), InputKind::Checkbox);
    assert_eq!(InputKind::from_html_type("RADIO"), InputKind::Radio);
    assert_eq!(InputKind::from_html_type("email"), InputKind::Text);
}

#[test]
fn test_payload_is_flat_json_object() {
    let input: FormInput = [("name", FieldValue::from("Foo")), ("auto_deploy", FieldValue::from(true))]
        .into_iter()
        .collect();

    assert_eq!(input.to_json(), json!({"auto_deploy": true, "name": "Foo"}));
    assert_eq!(serde_json::to_value(&input).unwrap(), input.to_json());
}

fn submitted(pairs: &[(&str, &str)]) -> BTreeMap<String, Vec<String>> {
    let mut form: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for (k, v) in pairs {
        form.entry(k.to_string()).or_default().push(v.to_string());
    }
    form
}

#[test]
fn test_submitted_checkboxes_become_flags() {
    let form = submitted(&[
        ("_checkboxes", "auto_deploy,private"),
        ("auto_deploy", "on"),
        ("name", "Foo"),
    ]);

    let input = form_change_events(form).iter().fold(FormInput::new(), |acc, e| acc.apply(e));

    assert_eq!(input.get("auto_deploy"), Some(&FieldValue::Flag(true)));
    assert_eq!(input.get("private"), Some(&FieldValue::Flag(false)));
    assert_eq!(input.text("name"), "Foo");
    assert!(input.get("_checkboxes").is_none());
    assert_eq!(input.to_json(), json!({"auto_deploy": true, "name": "Foo", "private": false}));
}

#[test]
fn test_unchecked_submit_clears_a_checked_box() {
    let before = FormInput::new().apply(&ChangeEvent::checkbox("auto_deploy", true));
    let form = submitted(&[("_checkboxes", "auto_deploy")]);

    let after = form_change_events(form).iter().fold(before, |acc, e| acc.apply(e));

    assert_eq!(after.get("auto_deploy"), Some(&FieldValue::Flag(false)));
}

#[test]
fn test_fields_without_marker_stay_text() {
    let events = form_change_events(submitted(&[("auto_deploy", "on"), ("name", "a"), ("name", "b")]));

    assert_eq!(events, vec![ChangeEvent::text("auto_deploy", "on"), ChangeEvent::text("name", "b")]);
}

#[test]
fn test_checked_values() {
    for raw in ["on", "true", "1", " ON "] {
        assert!(is_checked_value(raw), "{raw}");
    }
    for raw in ["", "off", "false", "0", "yes"] {
        assert!(!is_checked_value(raw), "{raw}");
    }
}
