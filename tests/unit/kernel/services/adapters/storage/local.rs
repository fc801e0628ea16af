use super::*;
use tempfile::tempdir;

#[tokio::test]
async fn objects_survive_a_fresh_adapter() {
    let dir = tempdir().expect("tempdir");
    let storage = LocalStorage::open(dir.path()).await.expect("open");
    let created = storage
        .create(TextObjectDraft::scratch_pad(7))
        .await
        .expect("create");
    drop(storage);

    let reopened = LocalStorage::open(dir.path()).await.expect("reopen");
    let all = reopened.find_all().await.expect("find_all");
    assert_eq!(all, vec![created]);
}

#[tokio::test]
async fn open_creates_missing_directory() {
    let dir = tempdir().expect("tempdir");
    let root = dir.path().join("nested").join("objects");

    let storage = LocalStorage::open(&root).await.expect("open");
    assert!(storage.root().is_dir());
}

#[tokio::test]
async fn update_merges_present_fields() {
    let dir = tempdir().expect("tempdir");
    let storage = LocalStorage::open(dir.path()).await.expect("open");
    let created = storage
        .create(TextObjectDraft::named("before", 1))
        .await
        .expect("create");

    storage
        .update(TextObjectPatch::new(created.id.clone()).with_name("after"))
        .await
        .expect("update");

    let all = storage.find_all().await.expect("find_all");
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].name.as_deref(), Some("after"));
    assert_eq!(all[0].created_at, 1);
}

#[tokio::test]
async fn missing_objects_are_not_found() {
    let dir = tempdir().expect("tempdir");
    let storage = LocalStorage::open(dir.path()).await.expect("open");

    assert!(matches!(
        storage.update(TextObjectPatch::new("ghost")).await,
        Err(StorageError::NotFound(_))
    ));
    assert!(matches!(
        storage.delete("ghost").await,
        Err(StorageError::NotFound(_))
    ));
}

#[tokio::test]
async fn path_like_ids_are_refused() {
    let dir = tempdir().expect("tempdir");
    let storage = LocalStorage::open(dir.path()).await.expect("open");

    assert!(matches!(
        storage.delete("../outside").await,
        Err(StorageError::NotFound(_))
    ));
}

#[tokio::test]
async fn find_all_skips_foreign_and_malformed_files() {
    let dir = tempdir().expect("tempdir");
    let storage = LocalStorage::open(dir.path()).await.expect("open");
    storage
        .create(TextObjectDraft::named("kept", 1))
        .await
        .expect("create");
    std::fs::write(dir.path().join("notes.txt"), "hello").expect("write txt");
    std::fs::write(dir.path().join("broken.json"), "{ nope").expect("write json");

    let all = storage.find_all().await.expect("find_all");
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].name.as_deref(), Some("kept"));
}

#[tokio::test]
async fn delete_removes_file() {
    let dir = tempdir().expect("tempdir");
    let storage = LocalStorage::open(dir.path()).await.expect("open");
    let created = storage
        .create(TextObjectDraft::named("gone", 1))
        .await
        .expect("create");

    storage.delete(&created.id).await.expect("delete");
    assert!(storage.find_all().await.expect("find_all").is_empty());
}
