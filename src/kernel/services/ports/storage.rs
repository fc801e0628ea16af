use async_trait::async_trait;
use std::io;

use crate::kernel::text_object::{TextObject, TextObjectDraft, TextObjectPatch};

pub type Result<T> = std::result::Result<T, StorageError>;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("text object not found: {0}")]
    NotFound(String),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Remote object store for text objects.
///
/// Ids are assigned by the implementation on `create`. Callers treat it as
/// opaque: transport, retries and error shapes beyond [`StorageError`] are
/// the implementation's business.
#[async_trait]
pub trait TextObjectStorage: Send + Sync {
    async fn create(&self, draft: TextObjectDraft) -> Result<TextObject>;

    /// Applies the present fields of `patch` to the stored object.
    async fn update(&self, patch: TextObjectPatch) -> Result<()>;

    async fn delete(&self, id: &str) -> Result<()>;

    async fn find_all(&self) -> Result<Vec<TextObject>>;
}
