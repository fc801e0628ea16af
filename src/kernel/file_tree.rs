//! File tree container: the ordered entry list plus the user intents that
//! go through [`TextObjectsCrud`].

use std::cmp::Ordering;

use super::action::TextObjectAction;
use super::crud::{CreateTextObjectArgs, CrudError, TextObjectsCrud};
use super::state::EditorState;
use super::text_object::{now_millis, TextObject, TextObjectDraft, TextObjectPatch, UNTITLED_LABEL};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileAction {
    Create,
    Rename,
    Delete,
}

/// Lifecycle of the last file action: `Idle -> Pending -> Succeeded | Failed`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PendingAction {
    #[default]
    Idle,
    Pending(FileAction),
    Succeeded(FileAction),
    Failed { action: FileAction, error: String },
}

impl PendingAction {
    pub fn is_pending(&self) -> bool {
        matches!(self, PendingAction::Pending(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileTreeEntry {
    pub id: String,
    pub label: String,
    pub is_scratch_pad: bool,
    pub is_selected: bool,
    pub can_delete: bool,
    pub can_rename: bool,
    pub save_error: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum FileTreeError {
    #[error("a {0:?} action is already in progress")]
    ActionInProgress(FileAction),
    #[error("the scratch pad cannot be renamed or deleted")]
    ScratchPadLocked,
    #[error("no text object is selected")]
    NoCurrentTextObject,
    #[error("no text object is waiting for delete confirmation")]
    NothingToDelete,
    #[error(transparent)]
    Crud(#[from] CrudError),
}

pub struct FileTree {
    crud: TextObjectsCrud,
    search_filter: Option<String>,
    show_search_bar: bool,
    pending: PendingAction,
    id_to_delete: Option<String>,
}

impl FileTree {
    pub fn new(crud: TextObjectsCrud) -> Self {
        Self {
            crud,
            search_filter: None,
            show_search_bar: false,
            pending: PendingAction::Idle,
            id_to_delete: None,
        }
    }

    pub fn pending(&self) -> &PendingAction {
        &self.pending
    }

    /// True while an action is in flight; intents are refused until it settles.
    pub fn is_busy(&self) -> bool {
        self.pending.is_pending()
    }

    pub fn search_filter(&self) -> Option<&str> {
        self.search_filter.as_deref()
    }

    pub fn show_search_bar(&self) -> bool {
        self.show_search_bar
    }

    pub fn id_to_delete(&self) -> Option<&str> {
        self.id_to_delete.as_deref()
    }

    pub fn toggle_search_bar(&mut self) {
        self.show_search_bar = !self.show_search_bar;
    }

    pub fn set_search_filter(&mut self, filter: impl Into<String>) {
        let filter = filter.into();
        self.search_filter = if filter.is_empty() {
            None
        } else {
            Some(filter)
        };
    }

    /// Entries after filtering, ordered by creation time with the scratch pad last.
    pub fn entries(&self, state: &EditorState) -> Vec<FileTreeEntry> {
        let needle = self.search_filter.as_deref().map(str::to_lowercase);
        let mut objects: Vec<&TextObject> = state
            .text_objects
            .values()
            .filter(|obj| match &needle {
                Some(needle) => obj.display_name().to_lowercase().contains(needle.as_str()),
                None => true,
            })
            .collect();
        objects.sort_by(|a, b| compare_entries(a, b));

        objects
            .into_iter()
            .map(|obj| FileTreeEntry {
                id: obj.id.clone(),
                label: obj.display_name().to_string(),
                is_scratch_pad: obj.is_scratch_pad,
                is_selected: obj.id == state.current_text_object_id,
                can_delete: !obj.is_scratch_pad,
                can_rename: !obj.is_scratch_pad,
                save_error: state.save_error(&obj.id).map(str::to_string),
            })
            .collect()
    }

    pub fn select(&self, id: impl Into<String>) {
        self.crud
            .context()
            .dispatch(TextObjectAction::SetCurrent(id.into()).into());
    }

    pub async fn create(&mut self, name: impl Into<String>) -> Result<TextObject, FileTreeError> {
        let guard = PendingGuard::begin(&mut self.pending, FileAction::Create)?;
        let draft = TextObjectDraft::named(name, now_millis());
        let result = self.crud.create(CreateTextObjectArgs::new(draft)).await;
        guard.settle(result)
    }

    pub async fn rename_current(
        &mut self,
        state: &EditorState,
        name: impl Into<String>,
    ) -> Result<(), FileTreeError> {
        let current = state
            .current_text_object()
            .ok_or(FileTreeError::NoCurrentTextObject)?;
        if current.is_scratch_pad {
            return Err(FileTreeError::ScratchPadLocked);
        }
        let id = current.id.clone();

        let guard = PendingGuard::begin(&mut self.pending, FileAction::Rename)?;
        let patch = TextObjectPatch::new(id.clone())
            .with_name(name)
            .with_updated_at(now_millis());
        let result = self.crud.update(patch).await;

        let ctx = self.crud.context();
        match &result {
            Ok(()) => ctx.dispatch(TextObjectAction::ClearSaveError(id).into()),
            Err(e) => ctx.dispatch(
                TextObjectAction::SetSaveError {
                    id,
                    error: e.to_string(),
                }
                .into(),
            ),
        }
        guard.settle(result)
    }

    /// Marks `id` for deletion; [`confirm_delete`](Self::confirm_delete) performs it.
    pub fn request_delete(
        &mut self,
        state: &EditorState,
        id: impl Into<String>,
    ) -> Result<(), FileTreeError> {
        if let PendingAction::Pending(action) = self.pending {
            return Err(FileTreeError::ActionInProgress(action));
        }
        let id = id.into();
        if state.text_objects.get(&id).is_some_and(|obj| obj.is_scratch_pad) {
            return Err(FileTreeError::ScratchPadLocked);
        }
        self.id_to_delete = Some(id);
        Ok(())
    }

    pub fn cancel_delete(&mut self) {
        self.id_to_delete = None;
    }

    /// Name shown in the delete confirmation.
    pub fn delete_label(&self, state: &EditorState) -> Option<String> {
        let id = self.id_to_delete.as_ref()?;
        let name = state
            .text_objects
            .get(id)
            .and_then(|obj| obj.name.clone())
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| UNTITLED_LABEL.to_string());
        Some(name)
    }

    pub async fn confirm_delete(&mut self, state: &EditorState) -> Result<(), FileTreeError> {
        let id = self.id_to_delete.clone().ok_or(FileTreeError::NothingToDelete)?;

        let guard = PendingGuard::begin(&mut self.pending, FileAction::Delete)?;
        self.id_to_delete = None;
        let result = self.crud.delete(&id).await;

        if result.is_ok() && state.current_text_object_id == id {
            if let Some(scratch_pad) = state.scratch_pad() {
                self.crud
                    .context()
                    .dispatch(TextObjectAction::SetCurrent(scratch_pad.id.clone()).into());
            }
        }
        guard.settle(result)
    }
}

/// Holds the tree in `Pending` for one action. Settling records the outcome;
/// dropping it unsettled (the intent future was cancelled) returns to `Idle`.
struct PendingGuard<'a> {
    pending: &'a mut PendingAction,
    action: FileAction,
    settled: bool,
}

impl<'a> PendingGuard<'a> {
    fn begin(pending: &'a mut PendingAction, action: FileAction) -> Result<Self, FileTreeError> {
        if let PendingAction::Pending(current) = *pending {
            return Err(FileTreeError::ActionInProgress(current));
        }
        *pending = PendingAction::Pending(action);
        Ok(Self {
            pending,
            action,
            settled: false,
        })
    }

    fn settle<T>(mut self, result: Result<T, CrudError>) -> Result<T, FileTreeError> {
        self.settled = true;
        let action = self.action;
        match result {
            Ok(value) => {
                *self.pending = PendingAction::Succeeded(action);
                Ok(value)
            }
            Err(e) => {
                tracing::warn!(?action, error = %e, "file action failed");
                *self.pending = PendingAction::Failed {
                    action,
                    error: e.to_string(),
                };
                Err(e.into())
            }
        }
    }
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        if !self.settled {
            tracing::debug!(action = ?self.action, "file action cancelled before settling");
            *self.pending = PendingAction::Idle;
        }
    }
}

fn compare_entries(a: &TextObject, b: &TextObject) -> Ordering {
    a.is_scratch_pad
        .cmp(&b.is_scratch_pad)
        .then_with(|| a.created_at.cmp(&b.created_at))
        .then_with(|| a.id.cmp(&b.id))
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/file_tree.rs"]
mod tests;
