use super::*;
use serde_json::json;

#[test]
fn exact_draft_accepts_complete_payload() {
    let draft = exact_draft(&json!({
        "name": "queries",
        "text": "",
        "createdAt": 1,
        "updatedAt": 2,
    }))
    .expect("valid draft");

    assert_eq!(draft.name.as_deref(), Some("queries"));
    assert_eq!(draft.updated_at, 2);
    assert!(!draft.is_scratch_pad);
}

#[test]
fn exact_draft_rejects_unknown_field() {
    let err = exact_draft(&json!({
        "text": "",
        "createdAt": 1,
        "updatedAt": 1,
        "owner": "someone",
    }))
    .unwrap_err();

    assert_eq!(err, ValidationError::UnknownField("owner".to_string()));
    assert_eq!(err.field(), Some("owner"));
}

#[test]
fn exact_draft_rejects_id() {
    let err = exact_draft(&json!({
        "id": "x",
        "text": "",
        "createdAt": 1,
        "updatedAt": 1,
    }))
    .unwrap_err();

    assert_eq!(err.field(), Some("id"));
}

#[test]
fn exact_draft_names_missing_field() {
    let err = exact_draft(&json!({ "text": "", "updatedAt": 1 })).unwrap_err();
    assert_eq!(err, ValidationError::MissingField("createdAt"));
}

#[test]
fn exact_draft_names_field_with_wrong_type() {
    let err = exact_draft(&json!({
        "text": 42,
        "createdAt": 1,
        "updatedAt": 1,
    }))
    .unwrap_err();

    assert_eq!(
        err,
        ValidationError::InvalidType {
            field: "text",
            expected: "string"
        }
    );
}

#[test]
fn exact_draft_rejects_non_object() {
    assert_eq!(exact_draft(&json!([1, 2])).unwrap_err(), ValidationError::NotAnObject);
}

#[test]
fn exact_patch_requires_id_only() {
    let patch = exact_patch(&json!({ "id": "a", "name": "renamed" })).expect("valid patch");
    assert_eq!(patch.id, "a");
    assert_eq!(patch.name.as_deref(), Some("renamed"));
    assert!(patch.text.is_none());

    let err = exact_patch(&json!({ "name": "renamed" })).unwrap_err();
    assert_eq!(err, ValidationError::MissingField("id"));
}

#[test]
fn exact_patch_rejects_unknown_field_and_empty_id() {
    let err = exact_patch(&json!({ "id": "a", "color": "red" })).unwrap_err();
    assert_eq!(err.field(), Some("color"));

    let err = exact_patch(&json!({ "id": "" })).unwrap_err();
    assert_eq!(err, ValidationError::Empty("id"));
}

#[test]
fn null_optional_fields_are_treated_as_absent() {
    let draft = exact_draft(&json!({
        "name": null,
        "text": "",
        "createdAt": 1,
        "updatedAt": 1,
    }))
    .expect("valid draft");
    assert!(draft.name.is_none());
}

#[test]
fn negative_timestamps_are_rejected() {
    let err = exact_draft(&json!({
        "text": "",
        "createdAt": -1,
        "updatedAt": 1,
    }))
    .unwrap_err();
    assert_eq!(err.field(), Some("createdAt"));
}
