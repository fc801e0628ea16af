use rustc_hash::FxHashMap;

use super::action::{Action, TextObjectAction};
use super::services::ports::Settings;
use super::text_object::TextObject;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditorState {
    pub ready: bool,
    pub settings: Option<Settings>,
    /// May name an id that is not (or no longer) in `text_objects`.
    pub current_text_object_id: String,
    pub text_objects: FxHashMap<String, TextObject>,
    pub text_objects_save_error: FxHashMap<String, String>,
}

impl EditorState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_text_object(&self) -> Option<&TextObject> {
        self.text_objects.get(&self.current_text_object_id)
    }

    /// The earliest-created scratch pad, ties broken by id.
    pub fn scratch_pad(&self) -> Option<&TextObject> {
        self.text_objects
            .values()
            .filter(|obj| obj.is_scratch_pad)
            .min_by(|a, b| {
                a.created_at
                    .cmp(&b.created_at)
                    .then_with(|| a.id.cmp(&b.id))
            })
    }

    pub fn save_error(&self, id: &str) -> Option<&str> {
        self.text_objects_save_error.get(id).map(String::as_str)
    }

    /// Applies `action` in place. Returns whether anything changed.
    pub fn apply(&mut self, action: Action) -> bool {
        match action {
            Action::SetInputEditor { attached } => {
                if !attached || self.ready {
                    return false;
                }
                self.ready = true;
                true
            }
            Action::UpdateSettings(settings) => {
                let changed = self.settings.as_ref() != Some(&settings);
                self.settings = Some(settings);
                changed
            }
            Action::TextObject(action) => self.apply_text_object(action),
        }
    }

    fn apply_text_object(&mut self, action: TextObjectAction) -> bool {
        match action {
            TextObjectAction::SetCurrent(id) => self.set_current(id),
            TextObjectAction::UpsertAndSetCurrent(obj) => {
                let id = obj.id.clone();
                let upserted = self.upsert(obj);
                self.set_current(id) || upserted
            }
            TextObjectAction::Upsert(obj) => self.upsert(obj),
            TextObjectAction::UpsertMany(objs) => {
                let mut changed = false;
                for obj in objs {
                    changed |= self.upsert(obj);
                }
                changed
            }
            TextObjectAction::Patch(patch) => match self.text_objects.get_mut(&patch.id) {
                Some(obj) => obj.merge(&patch),
                None => {
                    tracing::debug!(id = %patch.id, "patch for unknown text object ignored");
                    false
                }
            },
            TextObjectAction::Delete(id) => {
                let removed = self.text_objects.remove(&id).is_some();
                let cleared = self.text_objects_save_error.remove(&id).is_some();
                removed || cleared
            }
            TextObjectAction::SetSaveError { id, error } => {
                let prev = self.text_objects_save_error.insert(id, error.clone());
                prev.as_deref() != Some(error.as_str())
            }
            TextObjectAction::ClearSaveError(id) => {
                self.text_objects_save_error.remove(&id).is_some()
            }
        }
    }

    fn set_current(&mut self, id: String) -> bool {
        if self.current_text_object_id == id {
            return false;
        }
        self.current_text_object_id = id;
        true
    }

    fn upsert(&mut self, obj: TextObject) -> bool {
        match self.text_objects.get(&obj.id) {
            Some(existing) if *existing == obj => false,
            _ => {
                self.text_objects.insert(obj.id.clone(), obj);
                true
            }
        }
    }
}

/// Pure transition: consumes `state` and returns the state after `action`.
pub fn reduce(mut state: EditorState, action: Action) -> EditorState {
    state.apply(action);
    state
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/state.rs"]
mod tests;
