use diesel::prelude::*;

use crate::{
    domain::service::{
        NewService as DomainNewService, Service as DomainService,
        UpdateService as DomainUpdateService,
    },
    models::service::{
        NewService as DbNewService, Service as DbService, UpdateService as DbUpdateService,
    },
    repository::{DieselRepository, ServiceReader, ServiceWriter},
    repository::errors::{RepositoryError, RepositoryResult},
};

impl ServiceReader for DieselRepository {
    fn get_service_by_id(&self, id: i32) -> RepositoryResult<Option<DomainService>> {
        use crate::schema::services;

        let mut conn = self.conn()?;

        let service = services::table
            .filter(services::id.eq(id))
            .first::<DbService>(&mut conn)
            .optional()?;

        Ok(service.map(DomainService::from))
    }

    fn list_services(&self) -> RepositoryResult<Vec<DomainService>> {
        use crate::schema::services;

        let mut conn = self.conn()?;

        let services = services::table
            .order((services::created_at.desc(), services::id.desc()))
            .load::<DbService>(&mut conn)?;

        Ok(services.into_iter().map(DomainService::from).collect())
    }
}

impl ServiceWriter for DieselRepository {
    fn create_service(&self, new_service: &DomainNewService) -> RepositoryResult<DomainService> {
        use crate::schema::services;

        let mut conn = self.conn()?;

        let insertable = DbNewService::from(new_service);

        let created = diesel::insert_into(services::table)
            .values(&insertable)
            .get_result::<DbService>(&mut conn)?;

        Ok(created.into())
    }

    fn update_service(
        &self,
        service_id: i32,
        updates: &DomainUpdateService,
    ) -> RepositoryResult<DomainService> {
        use crate::schema::services;

        let mut conn = self.conn()?;

        let db_updates = DbUpdateService::from(updates);

        let updated = diesel::update(services::table.filter(services::id.eq(service_id)))
            .set(&db_updates)
            .get_result::<DbService>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_service(&self, service_id: i32) -> RepositoryResult<()> {
        use crate::schema::services;

        let mut conn = self.conn()?;

        let deleted = diesel::delete(services::table.filter(services::id.eq(service_id)))
            .execute(&mut conn)?;
        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
