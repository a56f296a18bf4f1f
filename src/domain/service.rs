use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Extra service the restaurant offers (catering, private dining and so on).
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Service {
    /// Unique identifier of the service.
    pub id: i32,
    /// Display name of the service.
    pub name: String,
    /// Marketing description shown to customers.
    pub description: String,
    /// Free-form pricing text ("from $200", "per head" and similar).
    pub pricing: String,
    /// Image shown on the storefront.
    pub image_url: String,
    /// Whether the service is currently advertised.
    pub is_active: bool,
    /// Timestamp for when the service record was created.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last update to the service record.
    pub updated_at: NaiveDateTime,
}

/// Payload required to insert a new service.
#[derive(Debug, Clone)]
pub struct NewService {
    pub name: String,
    pub description: String,
    pub pricing: String,
    pub image_url: String,
    pub is_active: bool,
    /// Timestamp captured when the payload was created.
    pub updated_at: NaiveDateTime,
}

impl NewService {
    /// Build a new service payload with the supplied details and current timestamp.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            pricing: String::new(),
            image_url: String::new(),
            is_active: true,
            updated_at: Local::now().naive_utc(),
        }
    }

    /// Attach a description to the service payload.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Attach pricing text to the service payload.
    pub fn with_pricing(mut self, pricing: impl Into<String>) -> Self {
        self.pricing = pricing.into();
        self
    }

    /// Attach an image url to the service payload.
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

/// Patch data applied when updating an existing service.
#[derive(Debug, Clone)]
pub struct UpdateService {
    pub name: String,
    pub description: String,
    pub pricing: String,
    pub image_url: String,
    pub is_active: bool,
    /// Timestamp captured when the patch was created.
    pub updated_at: NaiveDateTime,
}

impl UpdateService {
    /// Build a service update payload with the supplied values.
    pub fn new(
        name: String,
        description: String,
        pricing: String,
        image_url: String,
        is_active: bool,
    ) -> Self {
        Self {
            name,
            description,
            pricing,
            image_url,
            is_active,
            updated_at: Local::now().naive_utc(),
        }
    }
}
