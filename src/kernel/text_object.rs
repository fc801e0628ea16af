use serde::{Deserialize, Serialize};

pub const UNTITLED_LABEL: &str = "Untitled";
pub const SCRATCH_PAD_LABEL: &str = "Scratch Pad";

pub const DEFAULT_SCRATCH_PAD_TEXT: &str = "GET _search\n{\n  \"query\": {\n    \"match_all\": {}\n  }\n}";

/// A named document edited in the console.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextObject {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub text: String,
    pub created_at: i64,
    pub updated_at: i64,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_scratch_pad: bool,
}

impl TextObject {
    pub fn from_draft(id: String, draft: TextObjectDraft) -> Self {
        Self {
            id,
            name: draft.name,
            text: draft.text,
            created_at: draft.created_at,
            updated_at: draft.updated_at,
            is_scratch_pad: draft.is_scratch_pad,
        }
    }

    /// Label shown in the file tree.
    pub fn display_name(&self) -> &str {
        if self.is_scratch_pad {
            return SCRATCH_PAD_LABEL;
        }
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => UNTITLED_LABEL,
        }
    }

    /// Applies the fields present in `patch`. Returns whether anything changed.
    pub fn merge(&mut self, patch: &TextObjectPatch) -> bool {
        let before = self.clone();
        if let Some(name) = &patch.name {
            self.name = Some(name.clone());
        }
        if let Some(text) = &patch.text {
            self.text = text.clone();
        }
        if let Some(created_at) = patch.created_at {
            self.created_at = created_at;
        }
        if let Some(updated_at) = patch.updated_at {
            self.updated_at = updated_at;
        }
        if let Some(is_scratch_pad) = patch.is_scratch_pad {
            self.is_scratch_pad = is_scratch_pad;
        }
        *self != before
    }
}

/// Create payload: everything but the id, which the storage backend assigns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextObjectDraft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub text: String,
    pub created_at: i64,
    pub updated_at: i64,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_scratch_pad: bool,
}

impl TextObjectDraft {
    pub fn named(name: impl Into<String>, now: i64) -> Self {
        Self {
            name: Some(name.into()),
            text: String::new(),
            created_at: now,
            updated_at: now,
            is_scratch_pad: false,
        }
    }

    pub fn scratch_pad(now: i64) -> Self {
        Self {
            name: None,
            text: DEFAULT_SCRATCH_PAD_TEXT.to_string(),
            created_at: now,
            updated_at: now,
            is_scratch_pad: true,
        }
    }
}

/// Update payload: an id plus any subset of the mutable fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextObjectPatch {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_scratch_pad: Option<bool>,
}

impl TextObjectPatch {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_updated_at(mut self, updated_at: i64) -> Self {
        self.updated_at = Some(updated_at);
        self
    }
}

/// Milliseconds since the unix epoch, as stamped on created/updated objects.
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/text_object.rs"]
mod tests;
