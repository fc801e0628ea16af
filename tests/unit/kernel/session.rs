use super::*;
use crate::kernel::services::adapters::MemoryStorage;
use crate::kernel::text_object::{TextObject, DEFAULT_SCRATCH_PAD_TEXT};

fn named(id: &str, created_at: i64) -> TextObject {
    TextObject {
        id: id.to_string(),
        name: Some(id.to_string()),
        text: String::new(),
        created_at,
        updated_at: created_at,
        is_scratch_pad: false,
    }
}

#[tokio::test]
async fn bootstrap_creates_and_selects_scratch_pad_on_empty_storage() {
    let storage = Arc::new(MemoryStorage::new());
    let mut session = EditorSession::new(Arc::clone(&storage) as Arc<dyn TextObjectStorage>);

    session.bootstrap().await.expect("bootstrap");

    let current = session.state().current_text_object().expect("current object");
    assert!(current.is_scratch_pad);
    assert_eq!(current.text, DEFAULT_SCRATCH_PAD_TEXT);
    assert_eq!(storage.len(), 1);
}

#[tokio::test]
async fn bootstrap_reuses_existing_scratch_pad() {
    let mut scratch = named("scratch", 0);
    scratch.name = None;
    scratch.is_scratch_pad = true;
    let storage = Arc::new(MemoryStorage::with_objects([scratch, named("a", 5)]));
    let mut session = EditorSession::new(Arc::clone(&storage) as Arc<dyn TextObjectStorage>);

    session.bootstrap().await.expect("bootstrap");

    assert_eq!(session.state().current_text_object_id, "scratch");
    assert_eq!(session.state().text_objects.len(), 2);
    assert_eq!(storage.len(), 2);
}

#[tokio::test]
async fn bootstrap_selects_earliest_of_several_scratch_pads() {
    let pads = (0..20).rev().map(|i| {
        let mut pad = named(&format!("s{i:02}"), i);
        pad.is_scratch_pad = true;
        pad
    });
    let storage = Arc::new(MemoryStorage::with_objects(pads));
    let mut session = EditorSession::new(Arc::clone(&storage) as Arc<dyn TextObjectStorage>);

    session.bootstrap().await.expect("bootstrap");

    assert_eq!(session.state().current_text_object_id, "s00");
    assert_eq!(
        session.state().scratch_pad().map(|o| o.id.as_str()),
        Some("s00")
    );
    assert_eq!(storage.len(), 20);
}

#[tokio::test]
async fn crud_dispatches_reach_store_only_after_pump() {
    let mut session = EditorSession::new(Arc::new(MemoryStorage::new()));

    let created = session
        .crud()
        .create(CreateTextObjectArgs::new(TextObjectDraft::named("x", 1)))
        .await
        .expect("create");
    assert!(session.state().text_objects.is_empty());

    assert!(session.pump());
    assert_eq!(session.state().current_text_object_id, created.id);
    assert!(!session.pump());
}

#[test]
fn attach_and_settings_apply_immediately() {
    let mut session = EditorSession::new(Arc::new(MemoryStorage::new()));

    assert!(session.attach_input_editor());
    assert!(session.state().ready);

    assert!(session.update_settings(Settings::default()));
    assert!(!session.update_settings(Settings::default()));
}
