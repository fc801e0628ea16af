use serde::{Deserialize, Serialize};

/// Console settings, stored as JSON in camelCase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub font_size: u16,
    pub wrap_mode: bool,
    pub triple_quotes: bool,
    pub history_disabled: bool,
    pub polling: bool,
    pub poll_interval: u64,
    pub autocomplete: AutocompleteSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutocompleteSettings {
    pub fields: bool,
    pub indices: bool,
    pub templates: bool,
}

impl Default for AutocompleteSettings {
    fn default() -> Self {
        Self {
            fields: true,
            indices: true,
            templates: true,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            font_size: 14,
            wrap_mode: true,
            triple_quotes: true,
            history_disabled: false,
            polling: true,
            poll_interval: 60_000,
            autocomplete: AutocompleteSettings::default(),
        }
    }
}

impl Settings {
    /// Whether any autocomplete source is enabled.
    pub fn autocomplete_enabled(&self) -> bool {
        self.autocomplete.fields || self.autocomplete.indices || self.autocomplete.templates
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/ports/settings.rs"]
mod tests;
