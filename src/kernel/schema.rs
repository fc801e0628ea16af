//! Shape checks for untyped text object payloads.
//!
//! Both schemas are exact: a field the schema does not name is rejected, and
//! the error names the offending field.

use serde_json::{Map, Value};

use super::text_object::{TextObjectDraft, TextObjectPatch};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    String,
    Integer,
    Bool,
}

impl FieldKind {
    fn name(self) -> &'static str {
        match self {
            FieldKind::String => "string",
            FieldKind::Integer => "integer",
            FieldKind::Bool => "boolean",
        }
    }

    fn accepts(self, value: &Value) -> bool {
        match self {
            FieldKind::String => value.is_string(),
            FieldKind::Integer => value.is_i64(),
            FieldKind::Bool => value.is_boolean(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("expected a JSON object")]
    NotAnObject,
    #[error("unknown field `{0}`")]
    UnknownField(String),
    #[error("missing required field `{0}`")]
    MissingField(&'static str),
    #[error("field `{field}` must be a {expected}")]
    InvalidType {
        field: &'static str,
        expected: &'static str,
    },
    #[error("field `{0}` must not be empty")]
    Empty(&'static str),
}

impl ValidationError {
    /// The field the error refers to, if any.
    pub fn field(&self) -> Option<&str> {
        match self {
            ValidationError::NotAnObject => None,
            ValidationError::UnknownField(field) => Some(field.as_str()),
            ValidationError::MissingField(field)
            | ValidationError::InvalidType { field, .. }
            | ValidationError::Empty(field) => Some(*field),
        }
    }
}

struct Field {
    name: &'static str,
    kind: FieldKind,
    required: bool,
}

const fn field(name: &'static str, kind: FieldKind, required: bool) -> Field {
    Field {
        name,
        kind,
        required,
    }
}

const DRAFT_FIELDS: &[Field] = &[
    field("name", FieldKind::String, false),
    field("text", FieldKind::String, true),
    field("createdAt", FieldKind::Integer, true),
    field("updatedAt", FieldKind::Integer, true),
    field("isScratchPad", FieldKind::Bool, false),
];

const PATCH_FIELDS: &[Field] = &[
    field("id", FieldKind::String, true),
    field("name", FieldKind::String, false),
    field("text", FieldKind::String, false),
    field("createdAt", FieldKind::Integer, false),
    field("updatedAt", FieldKind::Integer, false),
    field("isScratchPad", FieldKind::Bool, false),
];

fn check_exact(value: &Value, fields: &[Field]) -> Result<(), ValidationError> {
    let Value::Object(map) = value else {
        return Err(ValidationError::NotAnObject);
    };

    // Unknown keys first, sorted.
    let mut keys: Vec<&String> = map.keys().collect();
    keys.sort();
    if let Some(unknown) = keys
        .into_iter()
        .find(|key| !fields.iter().any(|f| f.name == key.as_str()))
    {
        return Err(ValidationError::UnknownField(unknown.clone()));
    }

    for f in fields {
        match map.get(f.name) {
            None | Some(Value::Null) if f.required => {
                return Err(ValidationError::MissingField(f.name));
            }
            None | Some(Value::Null) => {}
            Some(v) if !f.kind.accepts(v) => {
                return Err(ValidationError::InvalidType {
                    field: f.name,
                    expected: f.kind.name(),
                });
            }
            Some(_) => {}
        }
    }

    Ok(())
}

fn strip_nulls(value: &Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.iter()
                .filter(|(_, v)| !v.is_null())
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect::<Map<String, Value>>(),
        ),
        other => other.clone(),
    }
}

/// Validates `value` against the exact create schema and decodes it.
pub fn exact_draft(value: &Value) -> Result<TextObjectDraft, ValidationError> {
    check_exact(value, DRAFT_FIELDS)?;
    let draft: TextObjectDraft =
        serde_json::from_value(strip_nulls(value)).map_err(|_| ValidationError::NotAnObject)?;
    validate_draft(&draft)?;
    Ok(draft)
}

/// Validates `value` against the exact partial schema (id required) and decodes it.
pub fn exact_patch(value: &Value) -> Result<TextObjectPatch, ValidationError> {
    check_exact(value, PATCH_FIELDS)?;
    let patch: TextObjectPatch =
        serde_json::from_value(strip_nulls(value)).map_err(|_| ValidationError::NotAnObject)?;
    validate_patch(&patch)?;
    Ok(patch)
}

pub fn validate_draft(draft: &TextObjectDraft) -> Result<(), ValidationError> {
    if draft.created_at < 0 {
        return Err(ValidationError::InvalidType {
            field: "createdAt",
            expected: "non-negative integer",
        });
    }
    if draft.updated_at < 0 {
        return Err(ValidationError::InvalidType {
            field: "updatedAt",
            expected: "non-negative integer",
        });
    }
    Ok(())
}

pub fn validate_patch(patch: &TextObjectPatch) -> Result<(), ValidationError> {
    if patch.id.is_empty() {
        return Err(ValidationError::Empty("id"));
    }
    if patch.created_at.is_some_and(|t| t < 0) {
        return Err(ValidationError::InvalidType {
            field: "createdAt",
            expected: "non-negative integer",
        });
    }
    if patch.updated_at.is_some_and(|t| t < 0) {
        return Err(ValidationError::InvalidType {
            field: "updatedAt",
            expected: "non-negative integer",
        });
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/schema.rs"]
mod tests;
