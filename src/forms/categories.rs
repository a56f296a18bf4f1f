use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::category::{NewCategory, UpdateCategory};
use crate::forms::sanitize_inline_text;

/// Maximum length allowed for a category name.
const NAME_MAX_LEN: u64 = 128;

/// Maximum length allowed for a category icon identifier.
const ICON_MAX_LEN: u64 = 64;

/// Result type returned by the category form helpers.
pub type CategoryFormResult<T> = Result<T, CategoryFormError>;

/// Errors that can occur while processing category forms.
#[derive(Debug, Error)]
pub enum CategoryFormError {
    /// Validation failures from the `validator` crate.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    /// The provided name is empty after sanitization.
    #[error("category name cannot be empty")]
    EmptyName,
}

/// Form payload emitted when submitting the "Add category" form.
#[derive(Debug, Deserialize, Validate)]
pub struct AddCategoryForm {
    /// Name entered by the user.
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub name: String,
    /// Icon identifier shown next to the name.
    #[validate(length(max = ICON_MAX_LEN))]
    #[serde(default)]
    pub icon: Option<String>,
    /// Position of the category in menus.
    #[validate(range(min = 0))]
    #[serde(default)]
    pub display_order: i32,
}

impl AddCategoryForm {
    /// Validates and sanitizes the payload into a domain `NewCategory`.
    pub fn into_new_category(self) -> CategoryFormResult<NewCategory> {
        self.validate()?;

        let sanitized_name = sanitize_inline_text(&self.name);
        if sanitized_name.is_empty() {
            return Err(CategoryFormError::EmptyName);
        }

        let icon = self
            .icon
            .as_deref()
            .map(str::trim)
            .unwrap_or_default()
            .to_string();

        Ok(NewCategory::new(sanitized_name, icon, self.display_order))
    }
}

/// Normalized payload produced by the "Edit category" form.
#[derive(Debug)]
pub struct EditCategoryPayload {
    /// Identifier of the category to update.
    pub category_id: i32,
    /// Patch data that should be applied to the category.
    pub update: UpdateCategory,
}

/// Form payload emitted when editing an existing category.
#[derive(Debug, Deserialize, Validate)]
pub struct EditCategoryForm {
    /// Identifier of the category to update.
    #[validate(range(min = 1))]
    pub category_id: i32,
    /// Name submitted by the user.
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub name: String,
    /// Icon identifier shown next to the name.
    #[validate(length(max = ICON_MAX_LEN))]
    #[serde(default)]
    pub icon: Option<String>,
    /// Position of the category in menus.
    #[validate(range(min = 0))]
    #[serde(default)]
    pub display_order: i32,
}

impl EditCategoryForm {
    /// Validates and sanitizes the payload into a domain `UpdateCategory`.
    pub fn into_update_category(self) -> CategoryFormResult<EditCategoryPayload> {
        self.validate()?;

        let EditCategoryForm {
            category_id,
            name,
            icon,
            display_order,
        } = self;

        let name = {
            let sanitized = sanitize_inline_text(&name);
            if sanitized.is_empty() {
                return Err(CategoryFormError::EmptyName);
            }
            sanitized
        };

        let icon = icon
            .as_deref()
            .map(str::trim)
            .unwrap_or_default()
            .to_string();

        let update = UpdateCategory::new(name, icon, display_order);

        Ok(EditCategoryPayload {
            category_id,
            update,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_category_form_sanitizes_and_converts() {
        let form = AddCategoryForm {
            name: "  Tandoori   Specials  ".to_string(),
            icon: Some(" flame ".to_string()),
            display_order: 4,
        };

        let new_category = form
            .into_new_category()
            .expect("expected conversion to succeed");

        assert_eq!(new_category.name, "Tandoori Specials");
        assert_eq!(new_category.icon, "flame");
        assert_eq!(new_category.display_order, 4);
    }

    #[test]
    fn add_category_form_rejects_empty_name() {
        let form = AddCategoryForm {
            name: "   ".to_string(),
            icon: None,
            display_order: 0,
        };

        let result = form.into_new_category();

        assert!(matches!(result, Err(CategoryFormError::EmptyName)));
    }

    #[test]
    fn add_category_form_rejects_negative_display_order() {
        let form = AddCategoryForm {
            name: "Starters".to_string(),
            icon: None,
            display_order: -1,
        };

        let result = form.into_new_category();

        assert!(matches!(result, Err(CategoryFormError::Validation(_))));
    }

    #[test]
    fn edit_category_form_builds_payload() {
        let form = EditCategoryForm {
            category_id: 42,
            name: "  Desserts  ".to_string(),
            icon: None,
            display_order: 9,
        };

        let payload = form
            .into_update_category()
            .expect("expected payload conversion to succeed");

        assert_eq!(payload.category_id, 42);
        assert_eq!(payload.update.name, "Desserts");
        assert_eq!(payload.update.icon, "");
        assert_eq!(payload.update.display_order, 9);
    }
}
