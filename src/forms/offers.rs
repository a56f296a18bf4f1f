use chrono::{NaiveDate, NaiveDateTime};
use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::offer::{NewOffer, UpdateOffer};
use crate::forms::{sanitize_inline_text, sanitize_multiline_text};

/// Maximum length allowed for an offer title.
const TITLE_MAX_LEN: u64 = 128;

/// Maximum length allowed for an offer description.
const DESCRIPTION_MAX_LEN: u64 = 2048;

/// Maximum length allowed for an image url.
const IMAGE_URL_MAX_LEN: u64 = 512;

/// Date format used by the validity inputs.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Result type returned by the offer form helpers.
pub type OfferFormResult<T> = Result<T, OfferFormError>;

/// Errors that can occur while processing offer forms.
#[derive(Debug, Error)]
pub enum OfferFormError {
    /// Validation failures from the `validator` crate.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    /// The provided title is empty after sanitization.
    #[error("offer title cannot be empty")]
    EmptyTitle,
    /// A validity date could not be parsed.
    #[error("invalid {field} date `{value}`")]
    InvalidDate { field: &'static str, value: String },
    /// The validity window ends before it starts.
    #[error("offer cannot end before it starts")]
    InvertedDates,
}

/// Form payload emitted when submitting the "Add offer" form.
#[derive(Debug, Deserialize, Validate)]
pub struct AddOfferForm {
    #[validate(length(min = 1, max = TITLE_MAX_LEN))]
    pub title: String,
    #[validate(length(max = DESCRIPTION_MAX_LEN))]
    #[serde(default)]
    pub description: Option<String>,
    /// Discount applied at checkout, 0–100.
    #[validate(range(min = 0, max = 100))]
    pub discount_percentage: i32,
    /// First valid day, `YYYY-MM-DD`.
    pub valid_from: String,
    /// Last valid day, `YYYY-MM-DD`.
    pub valid_until: String,
    #[validate(length(max = IMAGE_URL_MAX_LEN))]
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub is_active: bool,
}

impl AddOfferForm {
    /// Validates and sanitizes the payload into a domain `NewOffer`.
    pub fn into_new_offer(self) -> OfferFormResult<NewOffer> {
        self.validate()?;

        let title = sanitize_inline_text(&self.title);
        if title.is_empty() {
            return Err(OfferFormError::EmptyTitle);
        }

        let (valid_from, valid_until) = parse_validity(&self.valid_from, &self.valid_until)?;

        Ok(
            NewOffer::new(title, self.discount_percentage, valid_from, valid_until)
                .with_description(
                    self.description
                        .as_deref()
                        .map(sanitize_multiline_text)
                        .unwrap_or_default(),
                )
                .with_image_url(
                    self.image_url
                        .as_deref()
                        .map(str::trim)
                        .unwrap_or_default(),
                )
                .with_active(self.is_active),
        )
    }
}

/// Normalized payload produced by the "Edit offer" form.
#[derive(Debug)]
pub struct EditOfferPayload {
    pub offer_id: i32,
    pub update: UpdateOffer,
}

/// Form payload emitted when editing an existing offer.
#[derive(Debug, Deserialize, Validate)]
pub struct EditOfferForm {
    #[validate(range(min = 1))]
    pub offer_id: i32,
    #[validate(length(min = 1, max = TITLE_MAX_LEN))]
    pub title: String,
    #[validate(length(max = DESCRIPTION_MAX_LEN))]
    #[serde(default)]
    pub description: Option<String>,
    #[validate(range(min = 0, max = 100))]
    pub discount_percentage: i32,
    pub valid_from: String,
    pub valid_until: String,
    #[validate(length(max = IMAGE_URL_MAX_LEN))]
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub is_active: bool,
}

impl EditOfferForm {
    /// Validates and sanitizes the payload into a domain `UpdateOffer`.
    pub fn into_update_offer(self) -> OfferFormResult<EditOfferPayload> {
        self.validate()?;

        let EditOfferForm {
            offer_id,
            title,
            description,
            discount_percentage,
            valid_from,
            valid_until,
            image_url,
            is_active,
        } = self;

        let title = {
            let sanitized = sanitize_inline_text(&title);
            if sanitized.is_empty() {
                return Err(OfferFormError::EmptyTitle);
            }
            sanitized
        };

        let (valid_from, valid_until) = parse_validity(&valid_from, &valid_until)?;

        let update = UpdateOffer::new(
            title,
            description
                .as_deref()
                .map(sanitize_multiline_text)
                .unwrap_or_default(),
            discount_percentage,
            valid_from,
            valid_until,
            is_active,
            image_url
                .as_deref()
                .map(str::trim)
                .unwrap_or_default()
                .to_string(),
        );

        Ok(EditOfferPayload { offer_id, update })
    }
}

/// Parses the validity inputs: the window covers the whole of both days.
fn parse_validity(from: &str, until: &str) -> OfferFormResult<(NaiveDateTime, NaiveDateTime)> {
    let from_date = parse_date("valid_from", from)?;
    let until_date = parse_date("valid_until", until)?;

    let valid_from = from_date.and_hms_opt(0, 0, 0).unwrap_or_default();
    let valid_until = until_date.and_hms_opt(23, 59, 59).unwrap_or_default();

    if valid_until < valid_from {
        return Err(OfferFormError::InvertedDates);
    }

    Ok((valid_from, valid_until))
}

fn parse_date(field: &'static str, value: &str) -> OfferFormResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| OfferFormError::InvalidDate {
        field,
        value: value.trim().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_form() -> AddOfferForm {
        AddOfferForm {
            title: " Weekend  Feast ".to_string(),
            description: Some("Two mains for the price of one".to_string()),
            discount_percentage: 50,
            valid_from: "2025-07-01".to_string(),
            valid_until: "2025-07-31".to_string(),
            image_url: None,
            is_active: true,
        }
    }

    #[test]
    fn add_offer_form_parses_validity_window() {
        let offer = base_form().into_new_offer().expect("expected success");

        assert_eq!(offer.title, "Weekend Feast");
        assert_eq!(offer.discount_percentage, 50);
        assert_eq!(
            offer.valid_from.format("%Y-%m-%d %H:%M:%S").to_string(),
            "2025-07-01 00:00:00"
        );
        assert_eq!(
            offer.valid_until.format("%Y-%m-%d %H:%M:%S").to_string(),
            "2025-07-31 23:59:59"
        );
    }

    #[test]
    fn add_offer_form_rejects_bad_date() {
        let mut form = base_form();
        form.valid_from = "July 1st".to_string();

        assert!(matches!(
            form.into_new_offer(),
            Err(OfferFormError::InvalidDate { field, .. }) if field == "valid_from"
        ));
    }

    #[test]
    fn add_offer_form_rejects_inverted_window() {
        let mut form = base_form();
        form.valid_from = "2025-08-01".to_string();
        form.valid_until = "2025-07-01".to_string();

        assert!(matches!(
            form.into_new_offer(),
            Err(OfferFormError::InvertedDates)
        ));
    }

    #[test]
    fn add_offer_form_rejects_discount_above_hundred() {
        let mut form = base_form();
        form.discount_percentage = 120;

        assert!(matches!(
            form.into_new_offer(),
            Err(OfferFormError::Validation(_))
        ));
    }
}
