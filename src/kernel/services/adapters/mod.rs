//! Service adapters: OS/runtime specific implementations (IO/async).

pub mod paths;
pub mod settings;
pub mod storage;

pub use paths::{ensure_log_dir, get_log_dir, get_text_objects_dir};
pub use settings::{
    ensure_settings_file, get_settings_path, load_settings, load_settings_or_default,
    SettingsError,
};
pub use storage::{LocalStorage, MemoryStorage};
