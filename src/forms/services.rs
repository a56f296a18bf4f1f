use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::service::{NewService, UpdateService};
use crate::forms::{sanitize_inline_text, sanitize_multiline_text};

/// Maximum length allowed for a service name.
const NAME_MAX_LEN: u64 = 128;

/// Maximum length allowed for a service description.
const DESCRIPTION_MAX_LEN: u64 = 2048;

/// Maximum length allowed for pricing text and image urls.
const TEXT_MAX_LEN: u64 = 512;

/// Result type returned by the service form helpers.
pub type ServiceFormResult<T> = Result<T, ServiceFormError>;

/// Errors that can occur while processing service forms.
#[derive(Debug, Error)]
pub enum ServiceFormError {
    /// Validation failures from the `validator` crate.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    /// The provided name is empty after sanitization.
    #[error("service name cannot be empty")]
    EmptyName,
}

/// Form payload emitted when submitting the "Add service" form.
#[derive(Debug, Deserialize, Validate)]
pub struct AddServiceForm {
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub name: String,
    #[validate(length(max = DESCRIPTION_MAX_LEN))]
    #[serde(default)]
    pub description: Option<String>,
    #[validate(length(max = TEXT_MAX_LEN))]
    #[serde(default)]
    pub pricing: Option<String>,
    #[validate(length(max = TEXT_MAX_LEN))]
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub is_active: bool,
}

impl AddServiceForm {
    /// Validates and sanitizes the payload into a domain `NewService`.
    pub fn into_new_service(self) -> ServiceFormResult<NewService> {
        self.validate()?;

        let name = sanitize_inline_text(&self.name);
        if name.is_empty() {
            return Err(ServiceFormError::EmptyName);
        }

        Ok(NewService::new(name)
            .with_description(
                self.description
                    .as_deref()
                    .map(sanitize_multiline_text)
                    .unwrap_or_default(),
            )
            .with_pricing(
                self.pricing
                    .as_deref()
                    .map(sanitize_inline_text)
                    .unwrap_or_default(),
            )
            .with_image_url(
                self.image_url
                    .as_deref()
                    .map(str::trim)
                    .unwrap_or_default(),
            )
            .with_active(self.is_active))
    }
}

/// Normalized payload produced by the "Edit service" form.
#[derive(Debug)]
pub struct EditServicePayload {
    pub service_id: i32,
    pub update: UpdateService,
}

/// Form payload emitted when editing an existing service.
#[derive(Debug, Deserialize, Validate)]
pub struct EditServiceForm {
    #[validate(range(min = 1))]
    pub service_id: i32,
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub name: String,
    #[validate(length(max = DESCRIPTION_MAX_LEN))]
    #[serde(default)]
    pub description: Option<String>,
    #[validate(length(max = TEXT_MAX_LEN))]
    #[serde(default)]
    pub pricing: Option<String>,
    #[validate(length(max = TEXT_MAX_LEN))]
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub is_active: bool,
}

impl EditServiceForm {
    /// Validates and sanitizes the payload into a domain `UpdateService`.
    pub fn into_update_service(self) -> ServiceFormResult<EditServicePayload> {
        self.validate()?;

        let EditServiceForm {
            service_id,
            name,
            description,
            pricing,
            image_url,
            is_active,
        } = self;

        let name = {
            let sanitized = sanitize_inline_text(&name);
            if sanitized.is_empty() {
                return Err(ServiceFormError::EmptyName);
            }
            sanitized
        };

        let update = UpdateService::new(
            name,
            description
                .as_deref()
                .map(sanitize_multiline_text)
                .unwrap_or_default(),
            pricing
                .as_deref()
                .map(sanitize_inline_text)
                .unwrap_or_default(),
            image_url
                .as_deref()
                .map(str::trim)
                .unwrap_or_default()
                .to_string(),
            is_active,
        );

        Ok(EditServicePayload { service_id, update })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_service_form_sanitizes_and_converts() {
        let form = AddServiceForm {
            name: " Private  Dining ".to_string(),
            description: Some("Seats up to  twelve guests".to_string()),
            pricing: Some(" from $200 ".to_string()),
            image_url: None,
            is_active: true,
        };

        let service = form.into_new_service().expect("expected success");

        assert_eq!(service.name, "Private Dining");
        assert_eq!(service.description, "Seats up to twelve guests");
        assert_eq!(service.pricing, "from $200");
        assert!(service.is_active);
    }

    #[test]
    fn add_service_form_rejects_empty_name() {
        let form = AddServiceForm {
            name: " ".to_string(),
            description: None,
            pricing: None,
            image_url: None,
            is_active: false,
        };

        assert!(matches!(
            form.into_new_service(),
            Err(ServiceFormError::EmptyName)
        ));
    }
}
