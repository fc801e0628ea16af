use crate::kernel::services::ports::Settings;
use crate::kernel::text_object::{TextObject, TextObjectPatch};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// The input editor attached (`true`) or reported nothing (`false`).
    SetInputEditor { attached: bool },
    UpdateSettings(Settings),
    TextObject(TextObjectAction),
}

#[derive(Debug, Clone, PartialEq)]
pub enum TextObjectAction {
    SetCurrent(String),
    Upsert(TextObject),
    UpsertMany(Vec<TextObject>),
    UpsertAndSetCurrent(TextObject),
    /// Merges the present fields into an existing entry.
    Patch(TextObjectPatch),
    Delete(String),
    SetSaveError { id: String, error: String },
    ClearSaveError(String),
}

impl From<TextObjectAction> for Action {
    fn from(action: TextObjectAction) -> Self {
        Action::TextObject(action)
    }
}
