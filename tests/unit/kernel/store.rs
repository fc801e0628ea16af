use super::*;
use crate::kernel::{TextObject, TextObjectAction};

fn obj(id: &str) -> TextObject {
    TextObject {
        id: id.to_string(),
        name: None,
        text: String::new(),
        created_at: 1,
        updated_at: 1,
        is_scratch_pad: false,
    }
}

#[test]
fn dispatch_reports_state_changed() {
    let mut store = Store::default();

    let result = store.dispatch(TextObjectAction::Upsert(obj("a")).into());
    assert!(result.state_changed);

    let result = store.dispatch(TextObjectAction::Upsert(obj("a")).into());
    assert!(!result.state_changed);
}

#[test]
fn set_input_editor_twice_changes_once() {
    let mut store = Store::default();

    assert!(store.dispatch(Action::SetInputEditor { attached: true }).state_changed);
    assert!(!store.dispatch(Action::SetInputEditor { attached: true }).state_changed);
    assert!(store.state().ready);
}

#[test]
fn dispatches_apply_in_issue_order() {
    let mut store = Store::default();
    store.dispatch(TextObjectAction::SetCurrent("a".to_string()).into());
    store.dispatch(TextObjectAction::SetCurrent("b".to_string()).into());

    assert_eq!(store.into_state().current_text_object_id, "b");
}
