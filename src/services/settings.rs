use crate::SERVICE_ACCESS_ROLE;
use crate::auth::{AdminUser, check_role};
use crate::domain::restaurant_info::RestaurantInfo;
use crate::forms::settings::SettingsForm;
use crate::repository::{RestaurantInfoReader, RestaurantInfoWriter};
use crate::services::{ServiceError, ServiceResult};

/// Data required to render the settings template.
pub struct SettingsPageData {
    /// Current restaurant settings; absent on a fresh install.
    pub info: Option<RestaurantInfo>,
}

/// Loads the restaurant settings screen.
pub fn load_settings<R>(repo: &R, user: &AdminUser) -> ServiceResult<SettingsPageData>
where
    R: RestaurantInfoReader + ?Sized,
{
    if !check_role(SERVICE_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    let info = repo.get_restaurant_info().map_err(ServiceError::from)?;

    Ok(SettingsPageData { info })
}

/// Saves the restaurant settings, creating the record on first save.
pub fn save_settings<R>(
    repo: &R,
    user: &AdminUser,
    form: SettingsForm,
) -> ServiceResult<RestaurantInfo>
where
    R: RestaurantInfoWriter + ?Sized,
{
    if !check_role(SERVICE_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    let update = form
        .into_update_restaurant_info()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.upsert_restaurant_info(&update)
        .map_err(ServiceError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    use crate::repository::mock::{MockRestaurantInfoReader, MockRestaurantInfoWriter};

    fn fixed_datetime() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .unwrap_or_default()
    }

    fn admin() -> AdminUser {
        AdminUser::new("admin@example.com", "Admin")
    }

    #[test]
    fn load_settings_tolerates_missing_record() {
        let mut repo = MockRestaurantInfoReader::new();

        repo.expect_get_restaurant_info()
            .times(1)
            .returning(|| Ok(None));

        let data = load_settings(&repo, &admin()).expect("expected success");

        assert!(data.info.is_none());
    }

    #[test]
    fn save_settings_upserts_parsed_payload() {
        let mut repo = MockRestaurantInfoWriter::new();

        repo.expect_upsert_restaurant_info()
            .times(1)
            .withf(|update| {
                assert_eq!(update.name, "Taj Resto");
                assert_eq!(update.minimum_order_cents, 1500);
                true
            })
            .returning(|update| {
                Ok(RestaurantInfo {
                    id: 1,
                    name: update.name.clone(),
                    contact: update.contact.clone(),
                    address: update.address.clone(),
                    working_hours: update.working_hours.clone(),
                    minimum_order_cents: update.minimum_order_cents,
                    created_at: fixed_datetime(),
                    updated_at: fixed_datetime(),
                })
            });

        let form = SettingsForm {
            name: "Taj Resto".to_string(),
            contact: None,
            address: None,
            working_hours: None,
            minimum_order: "15".to_string(),
        };

        let info = save_settings(&repo, &admin(), form).expect("expected success");

        assert_eq!(info.minimum_order_cents, 1500);
    }
}
