use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::pagination::Pagination;

/// Loyalty classification attached to a customer's reward record.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RewardTier {
    Normal,
    Premium,
}

impl Default for RewardTier {
    fn default() -> Self {
        Self::Normal
    }
}

impl RewardTier {
    /// Storage representation of the tier.
    pub fn as_str(self) -> &'static str {
        match self {
            RewardTier::Normal => "normal",
            RewardTier::Premium => "premium",
        }
    }

    /// Strict parse of the storage representation.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "normal" => Some(RewardTier::Normal),
            "premium" => Some(RewardTier::Premium),
            _ => None,
        }
    }
}

impl From<&str> for RewardTier {
    fn from(value: &str) -> Self {
        RewardTier::parse(value).unwrap_or_default()
    }
}

impl From<RewardTier> for &'static str {
    fn from(value: RewardTier) -> Self {
        value.as_str()
    }
}

/// Registered storefront customer.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct User {
    /// Unique identifier of the customer.
    pub id: i32,
    /// Login email, stored lowercase.
    pub email: String,
    /// Display name of the customer.
    pub full_name: String,
    /// Contact phone number.
    pub phone: String,
    /// Default delivery address.
    pub address: String,
    /// Loyalty record, present once the customer earned or was granted points.
    pub reward: Option<Reward>,
    /// Timestamp for when the customer record was created.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last update to the customer record.
    pub updated_at: NaiveDateTime,
}

/// Loyalty record, one per customer.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Reward {
    /// Unique identifier of the reward row.
    pub id: i32,
    /// Owning customer identifier.
    pub user_id: i32,
    /// Points balance, never negative.
    pub points: i32,
    /// Operator-assigned tier. Not derived from points.
    pub tier: RewardTier,
    /// Timestamp for when the reward record was created.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last update to the reward record.
    pub updated_at: NaiveDateTime,
}

/// Payload required to insert a new customer.
#[derive(Debug, Clone)]
pub struct NewUser {
    /// Login email, lowercased on construction.
    pub email: String,
    /// Display name of the customer.
    pub full_name: String,
    /// Contact phone number.
    pub phone: String,
    /// Default delivery address.
    pub address: String,
    /// Timestamp captured when the payload was created.
    pub updated_at: NaiveDateTime,
}

impl NewUser {
    /// Build a new customer payload with the supplied details and current timestamp.
    pub fn new(email: impl Into<String>, full_name: impl Into<String>) -> Self {
        Self {
            email: email.into().to_lowercase(),
            full_name: full_name.into(),
            phone: String::new(),
            address: String::new(),
            updated_at: Local::now().naive_utc(),
        }
    }

    /// Attach a contact phone to the customer payload.
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    /// Attach a delivery address to the customer payload.
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }
}

/// Overwrite payload for a customer's reward record.
///
/// Applied as an upsert keyed by `user_id`: the first write creates the row,
/// later writes replace points and tier rather than accumulate.
#[derive(Debug, Clone)]
pub struct UpsertReward {
    /// Points balance to store.
    pub points: i32,
    /// Tier label to store.
    pub tier: RewardTier,
    /// Timestamp captured when the payload was created.
    pub updated_at: NaiveDateTime,
}

impl UpsertReward {
    /// Build a reward overwrite stamped with the current time.
    pub fn new(points: i32, tier: RewardTier) -> Self {
        Self {
            points,
            tier,
            updated_at: Local::now().naive_utc(),
        }
    }
}

/// Query definition used to list customers.
#[derive(Debug, Clone, Default)]
pub struct UserListQuery {
    /// Optional search term matched against name, email and phone.
    pub search: Option<String>,
    /// Optional pagination options applied to the query.
    pub pagination: Option<Pagination>,
}

impl UserListQuery {
    /// Construct a query that targets every customer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter the results by a search term applied to name, email and phone.
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    /// Apply pagination to the query with the given page number and page size.
    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_round_trips_through_storage_form() {
        assert_eq!(RewardTier::parse("normal"), Some(RewardTier::Normal));
        assert_eq!(RewardTier::parse("premium"), Some(RewardTier::Premium));
        assert_eq!(RewardTier::parse("gold"), None);
    }

    #[test]
    fn new_user_lowercases_email() {
        let user = NewUser::new("Jane@Example.COM", "Jane");
        assert_eq!(user.email, "jane@example.com");
    }
}
