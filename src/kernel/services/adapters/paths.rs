//! Per-user directories:
//! - data: `<data_local_dir>/console_editor/` (text objects, logs)
//! - config: `<config_dir>/console_editor/settings.json`

use std::path::PathBuf;

pub const APP_NAME: &str = "console_editor";
const TEXT_OBJECTS_DIR: &str = "text_objects";
const LOG_DIR: &str = "logs";

fn app_data_dir() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join(APP_NAME))
}

pub fn app_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_NAME))
}

pub fn get_text_objects_dir() -> Option<PathBuf> {
    app_data_dir().map(|dir| dir.join(TEXT_OBJECTS_DIR))
}

pub fn get_log_dir() -> Option<PathBuf> {
    app_data_dir().map(|dir| dir.join(LOG_DIR))
}

pub fn ensure_log_dir() -> std::io::Result<PathBuf> {
    let dir = get_log_dir().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Cannot determine log directory",
        )
    })?;
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
