//! console_editor - state core of a query console's file panel
//!
//! Module layout:
//! - kernel: text objects, store/reducer, CRUD, file tree, session
//! - kernel::services: storage and settings ports plus their adapters
//! - ui: view-size registry

pub mod kernel;
pub mod ui;
