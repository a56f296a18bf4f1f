use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Menu category shown as a storefront section.
///
/// Categories are presented in ascending `display_order`; ties fall back to
/// name order so listings stay stable.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Category {
    /// Unique identifier of the category.
    pub id: i32,
    /// Human-readable name of the category.
    pub name: String,
    /// Icon identifier rendered next to the name.
    pub icon: String,
    /// Position of the category in menus, ascending.
    pub display_order: i32,
    /// Timestamp for when the category record was created.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last update to the category record.
    pub updated_at: NaiveDateTime,
}

/// Payload required to insert a new category.
#[derive(Debug, Clone)]
pub struct NewCategory {
    /// Human-readable name of the category.
    pub name: String,
    /// Icon identifier rendered next to the name.
    pub icon: String,
    /// Position of the category in menus, ascending.
    pub display_order: i32,
    /// Timestamp captured when the payload was created.
    pub updated_at: NaiveDateTime,
}

impl NewCategory {
    /// Build a new category payload with the supplied details and current timestamp.
    pub fn new(name: impl Into<String>, icon: impl Into<String>, display_order: i32) -> Self {
        Self {
            name: name.into(),
            icon: icon.into(),
            display_order,
            updated_at: Local::now().naive_utc(),
        }
    }
}

/// Patch data applied when updating an existing category.
#[derive(Debug, Clone)]
pub struct UpdateCategory {
    /// Updated name for the category.
    pub name: String,
    /// Updated icon identifier.
    pub icon: String,
    /// Updated menu position.
    pub display_order: i32,
    /// Timestamp captured when the patch was created.
    pub updated_at: NaiveDateTime,
}

impl UpdateCategory {
    /// Build a category update payload with the supplied values.
    pub fn new(name: String, icon: String, display_order: i32) -> Self {
        Self {
            name,
            icon,
            display_order,
            updated_at: Local::now().naive_utc(),
        }
    }
}
