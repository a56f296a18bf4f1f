use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Singleton record describing the restaurant itself.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct RestaurantInfo {
    /// Unique identifier of the record (a single row in practice).
    pub id: i32,
    /// Restaurant name shown across the storefront.
    pub name: String,
    /// Public contact number.
    pub contact: String,
    /// Street address.
    pub address: String,
    /// Free-form opening hours text.
    pub working_hours: String,
    /// Minimum order amount accepted at checkout, in cents.
    pub minimum_order_cents: i32,
    /// Timestamp for when the record was created.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last update to the record.
    pub updated_at: NaiveDateTime,
}

/// Full-record overwrite for the restaurant settings screen.
///
/// Applied as an upsert: a fresh install has no row yet and the first save
/// creates it.
#[derive(Debug, Clone)]
pub struct UpdateRestaurantInfo {
    pub name: String,
    pub contact: String,
    pub address: String,
    pub working_hours: String,
    pub minimum_order_cents: i32,
    /// Timestamp captured when the payload was created.
    pub updated_at: NaiveDateTime,
}

impl UpdateRestaurantInfo {
    /// Build a settings overwrite stamped with the current time.
    pub fn new(
        name: String,
        contact: String,
        address: String,
        working_hours: String,
        minimum_order_cents: i32,
    ) -> Self {
        Self {
            name,
            contact,
            address,
            working_hours,
            minimum_order_cents,
            updated_at: Local::now().naive_utc(),
        }
    }
}
