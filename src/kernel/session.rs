use std::sync::mpsc::TryRecvError;
use std::sync::Arc;

use super::action::{Action, TextObjectAction};
use super::crud::{CreateTextObjectArgs, CrudError, TextObjectsCrud};
use super::services::ports::{Settings, TextObjectStorage};
use super::services::{KernelMessage, KernelServiceContext, KernelServiceHost};
use super::text_object::{now_millis, TextObjectDraft};
use super::{EditorState, Store};

/// One mounted editor: the store, plus the bus that feeds it.
///
/// Asynchronous work dispatches through [`KernelServiceContext`]; nothing
/// reaches the store until [`pump`](Self::pump) drains the bus, so all state
/// transitions happen on the owner's thread in arrival order.
pub struct EditorSession {
    store: Store,
    host: KernelServiceHost,
}

impl EditorSession {
    pub fn new(storage: Arc<dyn TextObjectStorage>) -> Self {
        Self {
            store: Store::default(),
            host: KernelServiceHost::new(storage),
        }
    }

    pub fn state(&self) -> &EditorState {
        self.store.state()
    }

    pub fn context(&self) -> KernelServiceContext {
        self.host.context()
    }

    pub fn crud(&self) -> TextObjectsCrud {
        TextObjectsCrud::new(self.host.context())
    }

    /// Applies an action directly, bypassing the bus.
    pub fn dispatch(&mut self, action: Action) -> bool {
        self.store.dispatch(action).state_changed
    }

    /// Drains every queued action into the store. Returns whether any of them
    /// changed state.
    pub fn pump(&mut self) -> bool {
        let mut state_changed = false;
        loop {
            match self.host.try_recv() {
                Ok(KernelMessage::Action(action)) => {
                    state_changed |= self.store.dispatch(action).state_changed;
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => break,
            }
        }
        state_changed
    }

    pub fn attach_input_editor(&mut self) -> bool {
        self.dispatch(Action::SetInputEditor { attached: true })
    }

    pub fn update_settings(&mut self, settings: Settings) -> bool {
        self.dispatch(Action::UpdateSettings(settings))
    }

    /// Loads every stored text object, creates the scratch pad when storage
    /// has none, and selects it.
    pub async fn bootstrap(&mut self) -> Result<(), CrudError> {
        let objects = self.host.storage().find_all().await?;
        tracing::info!(count = objects.len(), "text objects loaded");

        self.dispatch(TextObjectAction::UpsertMany(objects).into());

        let scratch_pad_id = self.state().scratch_pad().map(|obj| obj.id.clone());
        match scratch_pad_id {
            Some(id) => {
                self.dispatch(TextObjectAction::SetCurrent(id).into());
            }
            None => {
                let created = self
                    .crud()
                    .create(CreateTextObjectArgs::new(TextObjectDraft::scratch_pad(
                        now_millis(),
                    )))
                    .await?;
                tracing::info!(id = %created.id, "scratch pad created");
            }
        }

        self.pump();
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/session.rs"]
mod tests;
