use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Time-limited discount promoted on the storefront.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Offer {
    /// Unique identifier of the offer.
    pub id: i32,
    /// Headline shown to customers.
    pub title: String,
    /// Longer marketing copy.
    pub description: String,
    /// Discount applied at checkout, 0–100.
    pub discount_percentage: i32,
    /// Start of the validity window.
    pub valid_from: NaiveDateTime,
    /// End of the validity window.
    pub valid_until: NaiveDateTime,
    /// Whether the offer is currently advertised.
    pub is_active: bool,
    /// Image shown on the storefront.
    pub image_url: String,
    /// Timestamp for when the offer record was created.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last update to the offer record.
    pub updated_at: NaiveDateTime,
}

/// Payload required to insert a new offer.
#[derive(Debug, Clone)]
pub struct NewOffer {
    pub title: String,
    pub description: String,
    pub discount_percentage: i32,
    pub valid_from: NaiveDateTime,
    pub valid_until: NaiveDateTime,
    pub is_active: bool,
    pub image_url: String,
    /// Timestamp captured when the payload was created.
    pub updated_at: NaiveDateTime,
}

impl NewOffer {
    /// Build a new offer payload with the supplied details and current timestamp.
    pub fn new(
        title: impl Into<String>,
        discount_percentage: i32,
        valid_from: NaiveDateTime,
        valid_until: NaiveDateTime,
    ) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            discount_percentage,
            valid_from,
            valid_until,
            is_active: true,
            image_url: String::new(),
            updated_at: Local::now().naive_utc(),
        }
    }

    /// Attach a description to the offer payload.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Attach an image url to the offer payload.
    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = image_url.into();
        self
    }

    /// Override the default active flag.
    pub fn with_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }
}

/// Patch data applied when updating an existing offer.
#[derive(Debug, Clone)]
pub struct UpdateOffer {
    pub title: String,
    pub description: String,
    pub discount_percentage: i32,
    pub valid_from: NaiveDateTime,
    pub valid_until: NaiveDateTime,
    pub is_active: bool,
    pub image_url: String,
    /// Timestamp captured when the patch was created.
    pub updated_at: NaiveDateTime,
}

impl UpdateOffer {
    /// Build an offer update payload with the supplied values.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        title: String,
        description: String,
        discount_percentage: i32,
        valid_from: NaiveDateTime,
        valid_until: NaiveDateTime,
        is_active: bool,
        image_url: String,
    ) -> Self {
        Self {
            title,
            description,
            discount_percentage,
            valid_from,
            valid_until,
            is_active,
            image_url,
            updated_at: Local::now().naive_utc(),
        }
    }
}
