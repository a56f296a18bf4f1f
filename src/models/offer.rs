use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::offer::{
    NewOffer as DomainNewOffer, Offer as DomainOffer, UpdateOffer as DomainUpdateOffer,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::offers)]
pub struct Offer {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub discount_percentage: i32,
    pub valid_from: NaiveDateTime,
    pub valid_until: NaiveDateTime,
    pub is_active: bool,
    pub image_url: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::offers)]
pub struct NewOffer<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub discount_percentage: i32,
    pub valid_from: NaiveDateTime,
    pub valid_until: NaiveDateTime,
    pub is_active: bool,
    pub image_url: &'a str,
    pub updated_at: NaiveDateTime,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::offers)]
pub struct UpdateOffer<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub discount_percentage: i32,
    pub valid_from: NaiveDateTime,
    pub valid_until: NaiveDateTime,
    pub is_active: bool,
    pub image_url: &'a str,
    pub updated_at: NaiveDateTime,
}

impl Offer {
    pub fn into_domain(self) -> DomainOffer {
        DomainOffer {
            id: self.id,
            title: self.title,
            description: self.description,
            discount_percentage: self.discount_percentage,
            valid_from: self.valid_from,
            valid_until: self.valid_until,
            is_active: self.is_active,
            image_url: self.image_url,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

impl From<Offer> for DomainOffer {
    fn from(value: Offer) -> Self {
        value.into_domain()
    }
}

impl<'a> From<&'a DomainNewOffer> for NewOffer<'a> {
    fn from(value: &'a DomainNewOffer) -> Self {
        Self {
            title: value.title.as_str(),
            description: value.description.as_str(),
            discount_percentage: value.discount_percentage,
            valid_from: value.valid_from,
            valid_until: value.valid_until,
            is_active: value.is_active,
            image_url: value.image_url.as_str(),
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainUpdateOffer> for UpdateOffer<'a> {
    fn from(value: &'a DomainUpdateOffer) -> Self {
        Self {
            title: value.title.as_str(),
            description: value.description.as_str(),
            discount_percentage: value.discount_percentage,
            valid_from: value.valid_from,
            valid_until: value.valid_until,
            is_active: value.is_active,
            image_url: value.image_url.as_str(),
            updated_at: value.updated_at,
        }
    }
}
