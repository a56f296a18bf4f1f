use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::branch::{NewBranch, UpdateBranch};
use crate::forms::sanitize_inline_text;

/// Maximum length allowed for a branch name.
const NAME_MAX_LEN: u64 = 128;

/// Maximum length allowed for address and contact fields.
const TEXT_MAX_LEN: u64 = 512;

/// Result type returned by the branch form helpers.
pub type BranchFormResult<T> = Result<T, BranchFormError>;

/// Errors that can occur while processing branch forms.
#[derive(Debug, Error)]
pub enum BranchFormError {
    /// Validation failures from the `validator` crate.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    /// The provided name is empty after sanitization.
    #[error("branch name cannot be empty")]
    EmptyName,
}

/// Form payload emitted when submitting the "Add branch" form.
#[derive(Debug, Deserialize, Validate)]
pub struct AddBranchForm {
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub name: String,
    #[validate(length(max = TEXT_MAX_LEN))]
    #[serde(default)]
    pub address: Option<String>,
    #[validate(length(max = TEXT_MAX_LEN))]
    #[serde(default)]
    pub contact: Option<String>,
    #[serde(default)]
    pub is_active: bool,
}

impl AddBranchForm {
    /// Validates and sanitizes the payload into a domain `NewBranch`.
    pub fn into_new_branch(self) -> BranchFormResult<NewBranch> {
        self.validate()?;

        let name = sanitize_inline_text(&self.name);
        if name.is_empty() {
            return Err(BranchFormError::EmptyName);
        }

        let address = self
            .address
            .as_deref()
            .map(sanitize_inline_text)
            .unwrap_or_default();
        let contact = self
            .contact
            .as_deref()
            .map(sanitize_inline_text)
            .unwrap_or_default();

        Ok(NewBranch::new(name, address)
            .with_contact(contact)
            .with_active(self.is_active))
    }
}

/// Normalized payload produced by the "Edit branch" form.
#[derive(Debug)]
pub struct EditBranchPayload {
    pub branch_id: i32,
    pub update: UpdateBranch,
}

/// Form payload emitted when editing an existing branch.
#[derive(Debug, Deserialize, Validate)]
pub struct EditBranchForm {
    #[validate(range(min = 1))]
    pub branch_id: i32,
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub name: String,
    #[validate(length(max = TEXT_MAX_LEN))]
    #[serde(default)]
    pub address: Option<String>,
    #[validate(length(max = TEXT_MAX_LEN))]
    #[serde(default)]
    pub contact: Option<String>,
    #[serde(default)]
    pub is_active: bool,
}

impl EditBranchForm {
    /// Validates and sanitizes the payload into a domain `UpdateBranch`.
    pub fn into_update_branch(self) -> BranchFormResult<EditBranchPayload> {
        self.validate()?;

        let EditBranchForm {
            branch_id,
            name,
            address,
            contact,
            is_active,
        } = self;

        let name = {
            let sanitized = sanitize_inline_text(&name);
            if sanitized.is_empty() {
                return Err(BranchFormError::EmptyName);
            }
            sanitized
        };

        let address = address
            .as_deref()
            .map(sanitize_inline_text)
            .unwrap_or_default();
        let contact = contact
            .as_deref()
            .map(sanitize_inline_text)
            .unwrap_or_default();

        let update = UpdateBranch::new(name, address, contact, is_active);

        Ok(EditBranchPayload { branch_id, update })
    }
}
