use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::user::{RewardTier, UpsertReward};

/// Result type returned by the reward form helpers.
pub type RewardFormResult<T> = Result<T, RewardFormError>;

/// Errors that can occur while processing reward forms.
#[derive(Debug, Error)]
pub enum RewardFormError {
    /// Validation failures from the `validator` crate.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    /// The submitted tier is not one of the known values.
    #[error("unknown reward tier `{value}`")]
    UnknownTier { value: String },
}

/// Form payload emitted by the rewards editor.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateRewardsForm {
    /// Points balance to store; never negative.
    #[validate(range(min = 0))]
    pub points: i32,
    /// Tier label in storage form.
    pub tier: String,
}

impl UpdateRewardsForm {
    /// Validates the payload into a domain `UpsertReward`.
    pub fn into_upsert_reward(self) -> RewardFormResult<UpsertReward> {
        self.validate()?;

        let value = self.tier.trim().to_ascii_lowercase();
        let tier = RewardTier::parse(&value).ok_or(RewardFormError::UnknownTier { value })?;

        Ok(UpsertReward::new(self.points, tier))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_upsert_payload() {
        let form = UpdateRewardsForm {
            points: 150,
            tier: "premium".to_string(),
        };

        let payload = form.into_upsert_reward().expect("expected success");

        assert_eq!(payload.points, 150);
        assert_eq!(payload.tier, RewardTier::Premium);
    }

    #[test]
    fn rejects_negative_points() {
        let form = UpdateRewardsForm {
            points: -5,
            tier: "normal".to_string(),
        };

        assert!(matches!(
            form.into_upsert_reward(),
            Err(RewardFormError::Validation(_))
        ));
    }

    #[test]
    fn rejects_unknown_tier() {
        let form = UpdateRewardsForm {
            points: 10,
            tier: "gold".to_string(),
        };

        assert!(matches!(
            form.into_upsert_reward(),
            Err(RewardFormError::UnknownTier { value }) if value == "gold"
        ));
    }
}
