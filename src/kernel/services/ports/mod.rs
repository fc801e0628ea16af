//! Service ports: traits + data contracts.

pub mod settings;
pub mod storage;

pub use settings::{AutocompleteSettings, Settings};
pub use storage::{Result as StorageResult, StorageError, TextObjectStorage};
