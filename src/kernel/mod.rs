//! Headless console core (state/action/services).

pub mod action;
pub mod crud;
pub mod file_tree;
pub mod schema;
pub mod services;
pub mod session;
pub mod state;
pub mod store;
pub mod text_object;

pub use action::{Action, TextObjectAction};
pub use crud::{CreateTextObjectArgs, CrudError, TextObjectsCrud};
pub use file_tree::{FileAction, FileTree, FileTreeEntry, FileTreeError, PendingAction};
pub use schema::ValidationError;
pub use session::EditorSession;
pub use state::{reduce, EditorState};
pub use store::{DispatchResult, Store};
pub use text_object::{TextObject, TextObjectDraft, TextObjectPatch};
