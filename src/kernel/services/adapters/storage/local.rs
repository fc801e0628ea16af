//! Text objects stored as one JSON file per object under a directory.

use async_trait::async_trait;
use std::io;
use std::path::{Path, PathBuf};

use crate::kernel::services::ports::storage::{Result, StorageError, TextObjectStorage};
use crate::kernel::text_object::{TextObject, TextObjectDraft, TextObjectPatch};

const EXTENSION: &str = "json";

pub struct LocalStorage {
    root: PathBuf,
}

impl LocalStorage {
    /// Opens `root`, creating it if needed.
    pub async fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        tokio::fs::create_dir_all(&root).await?;
        tracing::debug!(root = %root.display(), "local text object storage opened");
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, id: &str) -> Result<PathBuf> {
        // Ids become file names; refuse anything that could escape the root.
        if id.is_empty() || id.contains(['/', '\\']) || id.starts_with('.') {
            return Err(StorageError::NotFound(id.to_string()));
        }
        Ok(self.root.join(format!("{id}.{EXTENSION}")))
    }

    async fn read(&self, id: &str) -> Result<TextObject> {
        let path = self.path_for(id)?;
        let data = match tokio::fs::read(&path).await {
            Ok(data) => data,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(StorageError::NotFound(id.to_string()));
            }
            Err(e) => return Err(e.into()),
        };
        Ok(serde_json::from_slice(&data)?)
    }

    async fn write(&self, obj: &TextObject) -> Result<()> {
        let path = self.path_for(&obj.id)?;
        let data = serde_json::to_vec_pretty(obj)?;
        let tmp = path.with_extension("json.tmp");
        tokio::fs::write(&tmp, data).await?;
        tokio::fs::rename(&tmp, &path).await?;
        Ok(())
    }
}

#[async_trait]
impl TextObjectStorage for LocalStorage {
    async fn create(&self, draft: TextObjectDraft) -> Result<TextObject> {
        let obj = TextObject::from_draft(super::new_id(), draft);
        self.write(&obj).await?;
        tracing::debug!(id = %obj.id, "text object created");
        Ok(obj)
    }

    async fn update(&self, patch: TextObjectPatch) -> Result<()> {
        let mut obj = self.read(&patch.id).await?;
        if obj.merge(&patch) {
            self.write(&obj).await?;
        }
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let path = self.path_for(id)?;
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                Err(StorageError::NotFound(id.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn find_all(&self) -> Result<Vec<TextObject>> {
        let mut entries = tokio::fs::read_dir(&self.root).await?;
        let mut result = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(EXTENSION) {
                continue;
            }
            let data = match tokio::fs::read(&path).await {
                Ok(data) => data,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "skipping unreadable text object");
                    continue;
                }
            };
            match serde_json::from_slice::<TextObject>(&data) {
                Ok(obj) => result.push(obj),
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "skipping malformed text object");
                }
            }
        }
        Ok(result)
    }
}

#[cfg(test)]
#[path = "../../../../../tests/unit/kernel/services/adapters/storage/local.rs"]
mod tests;
