use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Physical restaurant location.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Branch {
    /// Unique identifier of the branch.
    pub id: i32,
    /// Display name of the branch.
    pub name: String,
    /// Street address of the branch.
    pub address: String,
    /// Phone or other contact for the branch.
    pub contact: String,
    /// Whether the branch currently accepts orders.
    pub is_active: bool,
    /// Timestamp for when the branch record was created.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last update to the branch record.
    pub updated_at: NaiveDateTime,
}

/// Payload required to insert a new branch.
#[derive(Debug, Clone)]
pub struct NewBranch {
    pub name: String,
    pub address: String,
    pub contact: String,
    pub is_active: bool,
    /// Timestamp captured when the payload was created.
    pub updated_at: NaiveDateTime,
}

impl NewBranch {
    /// Build a new branch payload with the supplied details and current timestamp.
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            contact: String::new(),
            is_active: true,
            updated_at: Local::now().naive_utc(),
        }
    }

    /// Attach contact details to the branch payload.
    pub fn with_contact(mut self, contact: impl Into<String>) -> Self {
        self.contact = contact.into();
        self
    }

    /// Override the default active flag.
    pub fn with_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }
}

/// Patch data applied when updating an existing branch.
#[derive(Debug, Clone)]
pub struct UpdateBranch {
    pub name: String,
    pub address: String,
    pub contact: String,
    pub is_active: bool,
    /// Timestamp captured when the patch was created.
    pub updated_at: NaiveDateTime,
}

impl UpdateBranch {
    /// Build a branch update payload with the supplied values.
    pub fn new(name: String, address: String, contact: String, is_active: bool) -> Self {
        Self {
            name,
            address,
            contact,
            is_active,
            updated_at: Local::now().naive_utc(),
        }
    }
}
