use crate::SERVICE_ACCESS_ROLE;
use crate::auth::{AdminUser, check_role};
use crate::domain::offer::Offer;
use crate::forms::offers::{AddOfferForm, EditOfferForm};
use crate::repository::{OfferReader, OfferWriter};
use crate::services::{ServiceError, ServiceResult};

/// Data required to render the offers index template.
pub struct OffersPageData {
    /// All offers, newest first.
    pub offers: Vec<Offer>,
}

/// Loads the offers overview page.
pub fn load_offers<R>(repo: &R, user: &AdminUser) -> ServiceResult<OffersPageData>
where
    R: OfferReader + ?Sized,
{
    if !check_role(SERVICE_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    let offers = repo.list_offers().map_err(ServiceError::from)?;

    Ok(OffersPageData { offers })
}

/// Creates a new offer.
pub fn create_offer<R>(repo: &R, user: &AdminUser, form: AddOfferForm) -> ServiceResult<Offer>
where
    R: OfferWriter + ?Sized,
{
    if !check_role(SERVICE_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    let new_offer = form
        .into_new_offer()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.create_offer(&new_offer).map_err(ServiceError::from)
}

/// Updates an existing offer.
pub fn modify_offer<R>(repo: &R, user: &AdminUser, form: EditOfferForm) -> ServiceResult<Offer>
where
    R: OfferWriter + ?Sized,
{
    if !check_role(SERVICE_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    let payload = form
        .into_update_offer()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.update_offer(payload.offer_id, &payload.update)
        .map_err(ServiceError::from)
}

/// Deletes an offer.
pub fn remove_offer<R>(repo: &R, user: &AdminUser, offer_id: i32) -> ServiceResult<()>
where
    R: OfferWriter + ?Sized,
{
    if !check_role(SERVICE_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    repo.delete_offer(offer_id).map_err(ServiceError::from)
}
