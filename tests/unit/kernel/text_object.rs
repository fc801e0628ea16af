use super::*;

fn sample() -> TextObject {
    TextObject {
        id: "a".to_string(),
        name: Some("queries".to_string()),
        text: "GET _cat/indices".to_string(),
        created_at: 10,
        updated_at: 10,
        is_scratch_pad: false,
    }
}

#[test]
fn display_name_falls_back_to_untitled() {
    let mut obj = sample();
    assert_eq!(obj.display_name(), "queries");

    obj.name = None;
    assert_eq!(obj.display_name(), UNTITLED_LABEL);

    obj.name = Some(String::new());
    assert_eq!(obj.display_name(), UNTITLED_LABEL);
}

#[test]
fn scratch_pad_label_ignores_name() {
    let mut obj = sample();
    obj.is_scratch_pad = true;
    assert_eq!(obj.display_name(), SCRATCH_PAD_LABEL);
}

#[test]
fn merge_applies_only_present_fields() {
    let mut obj = sample();
    let changed = obj.merge(&TextObjectPatch::new("a").with_name("renamed"));

    assert!(changed);
    assert_eq!(obj.name.as_deref(), Some("renamed"));
    assert_eq!(obj.text, "GET _cat/indices");
    assert_eq!(obj.created_at, 10);
}

#[test]
fn merge_reports_no_change_for_identical_values() {
    let mut obj = sample();
    assert!(!obj.merge(&TextObjectPatch::new("a").with_name("queries")));
}

#[test]
fn json_uses_camel_case_and_omits_defaults() {
    let json = serde_json::to_value(sample()).expect("serialize");
    assert_eq!(json["createdAt"], 10);
    assert_eq!(json["updatedAt"], 10);
    assert!(json.get("isScratchPad").is_none());

    let scratch = TextObject::from_draft("s".to_string(), TextObjectDraft::scratch_pad(5));
    let json = serde_json::to_value(&scratch).expect("serialize");
    assert_eq!(json["isScratchPad"], true);
    assert!(json.get("name").is_none());
}
