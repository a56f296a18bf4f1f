use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::service::{
    NewService as DomainNewService, Service as DomainService, UpdateService as DomainUpdateService,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::services)]
pub struct Service {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub pricing: String,
    pub image_url: String,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::services)]
pub struct NewService<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub pricing: &'a str,
    pub image_url: &'a str,
    pub is_active: bool,
    pub updated_at: NaiveDateTime,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::services)]
pub struct UpdateService<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub pricing: &'a str,
    pub image_url: &'a str,
    pub is_active: bool,
    pub updated_at: NaiveDateTime,
}

impl Service {
    pub fn into_domain(self) -> DomainService {
        DomainService {
            id: self.id,
            name: self.name,
            description: self.description,
            pricing: self.pricing,
            image_url: self.image_url,
            is_active: self.is_active,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

impl From<Service> for DomainService {
    fn from(value: Service) -> Self {
        value.into_domain()
    }
}

impl<'a> From<&'a DomainNewService> for NewService<'a> {
    fn from(value: &'a DomainNewService) -> Self {
        Self {
            name: value.name.as_str(),
            description: value.description.as_str(),
            pricing: value.pricing.as_str(),
            image_url: value.image_url.as_str(),
            is_active: value.is_active,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainUpdateService> for UpdateService<'a> {
    fn from(value: &'a DomainUpdateService) -> Self {
        Self {
            name: value.name.as_str(),
            description: value.description.as_str(),
            pricing: value.pricing.as_str(),
            image_url: value.image_url.as_str(),
            is_active: value.is_active,
            updated_at: value.updated_at,
        }
    }
}
