use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::menu_item::{
    MenuItem as DomainMenuItem, NewMenuItem as DomainNewMenuItem,
    UpdateMenuItem as DomainUpdateMenuItem,
};
use crate::models::category::Category;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::menu_items)]
pub struct MenuItem {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price_cents: i32,
    pub image_url: String,
    pub category_id: Option<i32>,
    pub is_vegetarian: bool,
    pub is_spicy: bool,
    pub is_available: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::menu_items)]
pub struct NewMenuItem<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub price_cents: i32,
    pub image_url: &'a str,
    pub category_id: Option<i32>,
    pub is_vegetarian: bool,
    pub is_spicy: bool,
    pub is_available: bool,
    pub updated_at: NaiveDateTime,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::menu_items)]
#[diesel(treat_none_as_null = true)]
pub struct UpdateMenuItem<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub price_cents: i32,
    pub image_url: &'a str,
    pub category_id: Option<i32>,
    pub is_vegetarian: bool,
    pub is_spicy: bool,
    pub is_available: bool,
    pub updated_at: NaiveDateTime,
}

impl MenuItem {
    pub fn into_domain(self, category: Option<Category>) -> DomainMenuItem {
        DomainMenuItem {
            id: self.id,
            name: self.name,
            description: self.description,
            price_cents: self.price_cents,
            image_url: self.image_url,
            category_id: self.category_id,
            category: category.map(Category::into_domain),
            is_vegetarian: self.is_vegetarian,
            is_spicy: self.is_spicy,
            is_available: self.is_available,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

impl From<(MenuItem, Option<Category>)> for DomainMenuItem {
    fn from(value: (MenuItem, Option<Category>)) -> Self {
        value.0.into_domain(value.1)
    }
}

impl<'a> From<&'a DomainNewMenuItem> for NewMenuItem<'a> {
    fn from(value: &'a DomainNewMenuItem) -> Self {
        Self {
            name: value.name.as_str(),
            description: value.description.as_str(),
            price_cents: value.price_cents,
            image_url: value.image_url.as_str(),
            category_id: value.category_id,
            is_vegetarian: value.is_vegetarian,
            is_spicy: value.is_spicy,
            is_available: value.is_available,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainUpdateMenuItem> for UpdateMenuItem<'a> {
    fn from(value: &'a DomainUpdateMenuItem) -> Self {
        Self {
            name: value.name.as_str(),
            description: value.description.as_str(),
            price_cents: value.price_cents,
            image_url: value.image_url.as_str(),
            category_id: value.category_id,
            is_vegetarian: value.is_vegetarian,
            is_spicy: value.is_spicy,
            is_available: value.is_available,
            updated_at: value.updated_at,
        }
    }
}
