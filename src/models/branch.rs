use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::branch::{
    Branch as DomainBranch, NewBranch as DomainNewBranch, UpdateBranch as DomainUpdateBranch,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::branches)]
pub struct Branch {
    pub id: i32,
    pub name: String,
    pub address: String,
    pub contact: String,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::branches)]
pub struct NewBranch<'a> {
    pub name: &'a str,
    pub address: &'a str,
    pub contact: &'a str,
    pub is_active: bool,
    pub updated_at: NaiveDateTime,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::branches)]
pub struct UpdateBranch<'a> {
    pub name: &'a str,
    pub address: &'a str,
    pub contact: &'a str,
    pub is_active: bool,
    pub updated_at: NaiveDateTime,
}

impl Branch {
    pub fn into_domain(self) -> DomainBranch {
        DomainBranch {
            id: self.id,
            name: self.name,
            address: self.address,
            contact: self.contact,
            is_active: self.is_active,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

impl From<Branch> for DomainBranch {
    fn from(value: Branch) -> Self {
        value.into_domain()
    }
}

impl<'a> From<&'a DomainNewBranch> for NewBranch<'a> {
    fn from(value: &'a DomainNewBranch) -> Self {
        Self {
            name: value.name.as_str(),
            address: value.address.as_str(),
            contact: value.contact.as_str(),
            is_active: value.is_active,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainUpdateBranch> for UpdateBranch<'a> {
    fn from(value: &'a DomainUpdateBranch) -> Self {
        Self {
            name: value.name.as_str(),
            address: value.address.as_str(),
            contact: value.contact.as_str(),
            is_active: value.is_active,
            updated_at: value.updated_at,
        }
    }
}
