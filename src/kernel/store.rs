use super::{Action, EditorState};

pub struct DispatchResult {
    pub state_changed: bool,
}

pub struct Store {
    state: EditorState,
}

impl Store {
    pub fn new(state: EditorState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        tracing::trace!(?action, "dispatch");
        DispatchResult {
            state_changed: self.state.apply(action),
        }
    }

    pub fn into_state(self) -> EditorState {
        self.state
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new(EditorState::new())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/store.rs"]
mod tests;
