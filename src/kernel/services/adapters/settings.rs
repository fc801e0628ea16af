use crate::kernel::services::ports::settings::Settings;
use std::path::{Path, PathBuf};

use super::paths::app_config_dir;

const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("cannot determine settings directory")]
    NoConfigDir,
    #[error("failed to access settings file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse settings file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub fn get_settings_path() -> Option<PathBuf> {
    app_config_dir().map(|dir| dir.join(SETTINGS_FILE))
}

/// Writes default settings to `path` unless a file is already there.
pub fn ensure_settings_file(path: &Path) -> Result<(), SettingsError> {
    let io_err = |source| SettingsError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        if !parent.exists() {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
    }
    if !path.exists() {
        let content = serde_json::to_string_pretty(&Settings::default()).map_err(|source| {
            SettingsError::Parse {
                path: path.to_path_buf(),
                source,
            }
        })?;
        std::fs::write(path, content).map_err(io_err)?;
        tracing::info!(path = %path.display(), "default settings written");
    }
    Ok(())
}

pub fn load_settings(path: &Path) -> Result<Settings, SettingsError> {
    let data = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&data).map_err(|source| SettingsError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads `path` if given, otherwise the per-user settings file. A missing
/// file yields the defaults; a malformed one is an error.
pub fn load_settings_or_default(path: Option<&Path>) -> Result<Settings, SettingsError> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => match get_settings_path() {
            Some(path) => path,
            None => return Ok(Settings::default()),
        },
    };
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no settings file, using defaults");
        return Ok(Settings::default());
    }
    load_settings(&path)
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/settings.rs"]
mod tests;
