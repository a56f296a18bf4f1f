use diesel::prelude::*;

use crate::{
    domain::offer::{
        NewOffer as DomainNewOffer, Offer as DomainOffer, UpdateOffer as DomainUpdateOffer,
    },
    models::offer::{NewOffer as DbNewOffer, Offer as DbOffer, UpdateOffer as DbUpdateOffer},
    repository::{DieselRepository, OfferReader, OfferWriter},
    repository::errors::{RepositoryError, RepositoryResult},
};

impl OfferReader for DieselRepository {
    fn get_offer_by_id(&self, id: i32) -> RepositoryResult<Option<DomainOffer>> {
        use crate::schema::offers;

        let mut conn = self.conn()?;

        let offer = offers::table
            .filter(offers::id.eq(id))
            .first::<DbOffer>(&mut conn)
            .optional()?;

        Ok(offer.map(DomainOffer::from))
    }

    fn list_offers(&self) -> RepositoryResult<Vec<DomainOffer>> {
        use crate::schema::offers;

        let mut conn = self.conn()?;

        let offers = offers::table
            .order((offers::created_at.desc(), offers::id.desc()))
            .load::<DbOffer>(&mut conn)?;

        Ok(offers.into_iter().map(DomainOffer::from).collect())
    }
}

impl OfferWriter for DieselRepository {
    fn create_offer(&self, new_offer: &DomainNewOffer) -> RepositoryResult<DomainOffer> {
        use crate::schema::offers;

        let mut conn = self.conn()?;

        let insertable = DbNewOffer::from(new_offer);

        let created = diesel::insert_into(offers::table)
            .values(&insertable)
            .get_result::<DbOffer>(&mut conn)?;

        Ok(created.into())
    }

    fn update_offer(
        &self,
        offer_id: i32,
        updates: &DomainUpdateOffer,
    ) -> RepositoryResult<DomainOffer> {
        use crate::schema::offers;

        let mut conn = self.conn()?;

        let db_updates = DbUpdateOffer::from(updates);

        let updated = diesel::update(offers::table.filter(offers::id.eq(offer_id)))
            .set(&db_updates)
            .get_result::<DbOffer>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_offer(&self, offer_id: i32) -> RepositoryResult<()> {
        use crate::schema::offers;

        let mut conn = self.conn()?;

        let deleted = diesel::delete(offers::table.filter(offers::id.eq(offer_id)))
            .execute(&mut conn)?;
        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
