//! Create, update and delete text objects.
//!
//! Every operation validates first, then calls the storage port, and only
//! after the remote call succeeds dispatches the matching store action.
//! Storage failures are handed back untouched; nothing is dispatched on that
//! path and nothing is retried.

use serde_json::Value;

use super::action::TextObjectAction;
use super::schema::{self, ValidationError};
use super::services::ports::StorageError;
use super::services::KernelServiceContext;
use super::text_object::{TextObject, TextObjectDraft, TextObjectPatch};

#[derive(Debug, thiserror::Error)]
pub enum CrudError {
    #[error("invalid text object: {0}")]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

#[derive(Debug, Clone)]
pub struct CreateTextObjectArgs {
    pub text_object: TextObjectDraft,
    /// Select the new object once created.
    pub create_and_select: bool,
}

impl CreateTextObjectArgs {
    pub fn new(text_object: TextObjectDraft) -> Self {
        Self {
            text_object,
            create_and_select: true,
        }
    }

    pub fn without_select(mut self) -> Self {
        self.create_and_select = false;
        self
    }
}

#[derive(Clone)]
pub struct TextObjectsCrud {
    ctx: KernelServiceContext,
}

impl TextObjectsCrud {
    pub fn new(ctx: KernelServiceContext) -> Self {
        Self { ctx }
    }

    pub fn context(&self) -> &KernelServiceContext {
        &self.ctx
    }

    pub async fn create(&self, args: CreateTextObjectArgs) -> Result<TextObject, CrudError> {
        schema::validate_draft(&args.text_object)?;

        let result = self.ctx.storage().create(args.text_object).await?;
        tracing::debug!(id = %result.id, select = args.create_and_select, "text object created");

        let action = if args.create_and_select {
            TextObjectAction::UpsertAndSetCurrent(result.clone())
        } else {
            TextObjectAction::Upsert(result.clone())
        };
        self.ctx.dispatch(action.into());
        Ok(result)
    }

    /// Like [`create`](Self::create), for an untyped payload checked against
    /// the exact create schema.
    pub async fn create_from_json(
        &self,
        value: &Value,
        create_and_select: bool,
    ) -> Result<TextObject, CrudError> {
        let draft = schema::exact_draft(value)?;
        self.create(CreateTextObjectArgs {
            text_object: draft,
            create_and_select,
        })
        .await
    }

    pub async fn update(&self, patch: TextObjectPatch) -> Result<(), CrudError> {
        schema::validate_patch(&patch)?;

        self.ctx.storage().update(patch.clone()).await?;
        tracing::debug!(id = %patch.id, "text object updated");

        self.ctx.dispatch(TextObjectAction::Patch(patch).into());
        Ok(())
    }

    pub async fn update_from_json(&self, value: &Value) -> Result<(), CrudError> {
        let patch = schema::exact_patch(value)?;
        self.update(patch).await
    }

    pub async fn delete(&self, id: &str) -> Result<(), CrudError> {
        if id.is_empty() {
            return Err(ValidationError::Empty("id").into());
        }

        self.ctx.storage().delete(id).await?;
        tracing::debug!(id, "text object deleted");

        self.ctx
            .dispatch(TextObjectAction::Delete(id.to_string()).into());
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/crud.rs"]
mod tests;
