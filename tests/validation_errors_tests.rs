use keel::models::flatten_validation_errors;
use keel::DashboardError;
use serde_json::json;

#[test]
fn test_wrapped_errors_are_unwrapped() {
    let body = json!({"message": "The given data was invalid.", "errors": {"name": ["Name is required"]}});
    let errors = flatten_validation_errors(&body).unwrap();
    assert_eq!(errors.messages(), ["Name is required"]);
}

#[test]
fn test_flat_errors_keep_first_message_only() {
    let body = json!({"name": ["Name is required", "Name too short"]});
    let errors = flatten_validation_errors(&body).unwrap();
    assert_eq!(errors.messages(), ["Name is required"]);
}

#[test]
fn test_one_message_per_field() {
    let body = json!({"errors": {
        "name": ["Name is required"],
        "provider_id": ["Pick a provider", "Provider is invalid"],
        "repository": ["Repository is required"]
    }});
    let errors: Vec<String> = flatten_validation_errors(&body).unwrap().into();
    assert_eq!(errors, vec!["Name is required", "Pick a provider", "Repository is required"]);
}

#[test]
fn test_non_object_body_is_rejected() {
    let err = flatten_validation_errors(&json!("Server Error")).unwrap_err();
    assert!(matches!(err, DashboardError::MalformedValidationPayload(_)));
}

#[test]
fn test_field_without_message_list_is_rejected() {
    let err = flatten_validation_errors(&json!({"message": "Server Error"})).unwrap_err();
    assert!(matches!(err, DashboardError::MalformedValidationPayload(_)));

    let err = flatten_validation_errors(&json!({"errors": {"name": []}})).unwrap_err();
    assert!(matches!(err, DashboardError::MalformedValidationPayload(_)));
}
