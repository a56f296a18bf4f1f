use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::restaurant_info::{
    RestaurantInfo as DomainRestaurantInfo, UpdateRestaurantInfo as DomainUpdateRestaurantInfo,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::restaurant_info)]
pub struct RestaurantInfo {
    pub id: i32,
    pub name: String,
    pub contact: String,
    pub address: String,
    pub working_hours: String,
    pub minimum_order_cents: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::restaurant_info)]
pub struct NewRestaurantInfo<'a> {
    pub name: &'a str,
    pub contact: &'a str,
    pub address: &'a str,
    pub working_hours: &'a str,
    pub minimum_order_cents: i32,
    pub updated_at: NaiveDateTime,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::restaurant_info)]
pub struct UpdateRestaurantInfo<'a> {
    pub name: &'a str,
    pub contact: &'a str,
    pub address: &'a str,
    pub working_hours: &'a str,
    pub minimum_order_cents: i32,
    pub updated_at: NaiveDateTime,
}

impl RestaurantInfo {
    pub fn into_domain(self) -> DomainRestaurantInfo {
        DomainRestaurantInfo {
            id: self.id,
            name: self.name,
            contact: self.contact,
            address: self.address,
            working_hours: self.working_hours,
            minimum_order_cents: self.minimum_order_cents,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

impl From<RestaurantInfo> for DomainRestaurantInfo {
    fn from(value: RestaurantInfo) -> Self {
        value.into_domain()
    }
}

impl<'a> From<&'a DomainUpdateRestaurantInfo> for NewRestaurantInfo<'a> {
    fn from(value: &'a DomainUpdateRestaurantInfo) -> Self {
        Self {
            name: value.name.as_str(),
            contact: value.contact.as_str(),
            address: value.address.as_str(),
            working_hours: value.working_hours.as_str(),
            minimum_order_cents: value.minimum_order_cents,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainUpdateRestaurantInfo> for UpdateRestaurantInfo<'a> {
    fn from(value: &'a DomainUpdateRestaurantInfo) -> Self {
        Self {
            name: value.name.as_str(),
            contact: value.contact.as_str(),
            address: value.address.as_str(),
            working_hours: value.working_hours.as_str(),
            minimum_order_cents: value.minimum_order_cents,
            updated_at: value.updated_at,
        }
    }
}
