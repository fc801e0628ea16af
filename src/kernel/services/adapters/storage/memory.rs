use async_trait::async_trait;
use parking_lot::Mutex;
use rustc_hash::FxHashMap;

use crate::kernel::services::ports::storage::{Result, StorageError, TextObjectStorage};
use crate::kernel::text_object::{TextObject, TextObjectDraft, TextObjectPatch};

/// Process-local storage. Nothing survives the process.
#[derive(Default)]
pub struct MemoryStorage {
    objects: Mutex<FxHashMap<String, TextObject>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_objects(objects: impl IntoIterator<Item = TextObject>) -> Self {
        let map = objects
            .into_iter()
            .map(|obj| (obj.id.clone(), obj))
            .collect();
        Self {
            objects: Mutex::new(map),
        }
    }

    pub fn get(&self, id: &str) -> Option<TextObject> {
        self.objects.lock().get(id).cloned()
    }

    pub fn len(&self) -> usize {
        self.objects.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.lock().is_empty()
    }
}

#[async_trait]
impl TextObjectStorage for MemoryStorage {
    async fn create(&self, draft: TextObjectDraft) -> Result<TextObject> {
        let obj = TextObject::from_draft(super::new_id(), draft);
        self.objects.lock().insert(obj.id.clone(), obj.clone());
        Ok(obj)
    }

    async fn update(&self, patch: TextObjectPatch) -> Result<()> {
        let mut objects = self.objects.lock();
        let obj = objects
            .get_mut(&patch.id)
            .ok_or_else(|| StorageError::NotFound(patch.id.clone()))?;
        obj.merge(&patch);
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<()> {
        self.objects
            .lock()
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| StorageError::NotFound(id.to_string()))
    }

    async fn find_all(&self) -> Result<Vec<TextObject>> {
        Ok(self.objects.lock().values().cloned().collect())
    }
}

#[cfg(test)]
#[path = "../../../../../tests/unit/kernel/services/adapters/storage/memory.rs"]
mod tests;
