use std::mem;

use onboard_domain::{Field, ProfileDraft};
use tracing::debug;

use crate::CoreError;

/// Holds the current draft and applies single-field edits.
///
/// No validation happens here; any text is accepted. Each edit swaps in a new
/// draft built from the previous one, so untouched fields are carried over.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormStore {
    draft: ProfileDraft,
}

impl FormStore {
    pub fn new(draft: ProfileDraft) -> Self {
        Self { draft }
    }

    pub fn draft(&self) -> &ProfileDraft {
        &self.draft
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        debug!(field = field.key(), len = value.chars().count(), "Draft field updated");
        let current = mem::take(&mut self.draft);
        self.draft = current.with_field(field, value);
    }

    /// Resolves `name` against the draft schema before editing.
    ///
    /// Unknown names are rejected and leave the draft untouched.
    pub fn set_field_by_name(
        &mut self,
        name: &str,
        value: impl Into<String>,
    ) -> Result<Field, CoreError> {
        let field =
            Field::from_name(name).ok_or_else(|| CoreError::UnknownField(name.to_string()))?;
        self.set_field(field, value);
        Ok(field)
    }

    pub fn into_draft(self) -> ProfileDraft {
        self.draft
    }
}
