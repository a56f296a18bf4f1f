use diesel::prelude::*;

use crate::{
    domain::restaurant_info::{
        RestaurantInfo as DomainRestaurantInfo, UpdateRestaurantInfo as DomainUpdateRestaurantInfo,
    },
    models::restaurant_info::{
        NewRestaurantInfo as DbNewRestaurantInfo, RestaurantInfo as DbRestaurantInfo,
        UpdateRestaurantInfo as DbUpdateRestaurantInfo,
    },
    repository::{DieselRepository, RestaurantInfoReader, RestaurantInfoWriter},
    repository::errors::{RepositoryError, RepositoryResult},
};

impl RestaurantInfoReader for DieselRepository {
    fn get_restaurant_info(&self) -> RepositoryResult<Option<DomainRestaurantInfo>> {
        use crate::schema::restaurant_info;

        let mut conn = self.conn()?;

        let info = restaurant_info::table
            .order(restaurant_info::id.asc())
            .first::<DbRestaurantInfo>(&mut conn)
            .optional()?;

        Ok(info.map(DomainRestaurantInfo::from))
    }
}

impl RestaurantInfoWriter for DieselRepository {
    fn upsert_restaurant_info(
        &self,
        updates: &DomainUpdateRestaurantInfo,
    ) -> RepositoryResult<DomainRestaurantInfo> {
        use crate::schema::restaurant_info;

        let mut conn = self.conn()?;

        conn.transaction::<DomainRestaurantInfo, RepositoryError, _>(|conn| {
            let existing = restaurant_info::table
                .order(restaurant_info::id.asc())
                .first::<DbRestaurantInfo>(conn)
                .optional()?;

            let stored = match existing {
                Some(info) => {
                    let db_updates = DbUpdateRestaurantInfo::from(updates);
                    diesel::update(restaurant_info::table.filter(restaurant_info::id.eq(info.id)))
                        .set(&db_updates)
                        .get_result::<DbRestaurantInfo>(conn)?
                }
                None => {
                    let insertable = DbNewRestaurantInfo::from(updates);
                    diesel::insert_into(restaurant_info::table)
                        .values(&insertable)
                        .get_result::<DbRestaurantInfo>(conn)?
                }
            };

            Ok(stored.into())
        })
    }
}
