use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::restaurant_info::UpdateRestaurantInfo;
use crate::forms::{parse_price_cents, sanitize_inline_text, sanitize_multiline_text};

/// Maximum length allowed for the restaurant name.
const NAME_MAX_LEN: u64 = 128;

/// Maximum length allowed for the free-form text fields.
const TEXT_MAX_LEN: u64 = 1024;

/// Result type returned by the settings form helpers.
pub type SettingsFormResult<T> = Result<T, SettingsFormError>;

/// Errors that can occur while processing the settings form.
#[derive(Debug, Error)]
pub enum SettingsFormError {
    /// Validation failures from the `validator` crate.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    /// The provided name is empty after sanitization.
    #[error("restaurant name cannot be empty")]
    EmptyName,
    /// The minimum order amount could not be parsed into cents.
    #[error("invalid minimum order amount `{value}`")]
    InvalidMinimumOrder { value: String },
}

/// Form payload emitted by the restaurant settings screen.
#[derive(Debug, Deserialize, Validate)]
pub struct SettingsForm {
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub name: String,
    #[validate(length(max = TEXT_MAX_LEN))]
    #[serde(default)]
    pub contact: Option<String>,
    #[validate(length(max = TEXT_MAX_LEN))]
    #[serde(default)]
    pub address: Option<String>,
    #[validate(length(max = TEXT_MAX_LEN))]
    #[serde(default)]
    pub working_hours: Option<String>,
    /// Minimum order amount in decimal form, parsed into cents.
    pub minimum_order: String,
}

impl SettingsForm {
    /// Validates and sanitizes the payload into a domain `UpdateRestaurantInfo`.
    pub fn into_update_restaurant_info(self) -> SettingsFormResult<UpdateRestaurantInfo> {
        self.validate()?;

        let name = sanitize_inline_text(&self.name);
        if name.is_empty() {
            return Err(SettingsFormError::EmptyName);
        }

        let minimum_order_cents = parse_price_cents(&self.minimum_order).ok_or_else(|| {
            SettingsFormError::InvalidMinimumOrder {
                value: self.minimum_order.trim().to_string(),
            }
        })?;

        Ok(UpdateRestaurantInfo::new(
            name,
            self.contact
                .as_deref()
                .map(sanitize_inline_text)
                .unwrap_or_default(),
            self.address
                .as_deref()
                .map(sanitize_inline_text)
                .unwrap_or_default(),
            self.working_hours
                .as_deref()
                .map(sanitize_multiline_text)
                .unwrap_or_default(),
            minimum_order_cents,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_form_parses_minimum_order() {
        let form = SettingsForm {
            name: " Taj  Resto ".to_string(),
            contact: Some("555-0123".to_string()),
            address: None,
            working_hours: Some("Mon-Sun 11:00-23:00".to_string()),
            minimum_order: "15.00".to_string(),
        };

        let update = form
            .into_update_restaurant_info()
            .expect("expected success");

        assert_eq!(update.name, "Taj Resto");
        assert_eq!(update.minimum_order_cents, 1500);
        assert_eq!(update.working_hours, "Mon-Sun 11:00-23:00");
    }

    #[test]
    fn settings_form_rejects_bad_minimum_order() {
        let form = SettingsForm {
            name: "Taj Resto".to_string(),
            contact: None,
            address: None,
            working_hours: None,
            minimum_order: "a lot".to_string(),
        };

        assert!(matches!(
            form.into_update_restaurant_info(),
            Err(SettingsFormError::InvalidMinimumOrder { value }) if value == "a lot"
        ));
    }
}
