use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::user::{
    NewUser as DomainNewUser, Reward as DomainReward, UpsertReward as DomainUpsertReward,
    User as DomainUser,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::users)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub full_name: String,
    pub phone: String,
    pub address: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(table_name = crate::schema::rewards)]
#[diesel(belongs_to(User, foreign_key = user_id))]
pub struct Reward {
    pub id: i32,
    pub user_id: i32,
    pub points: i32,
    pub tier: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::users)]
pub struct NewUser<'a> {
    pub email: &'a str,
    pub full_name: &'a str,
    pub phone: &'a str,
    pub address: &'a str,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::rewards)]
pub struct NewReward<'a> {
    pub user_id: i32,
    pub points: i32,
    pub tier: &'a str,
    pub updated_at: NaiveDateTime,
}

impl User {
    pub fn into_domain(self, reward: Option<Reward>) -> DomainUser {
        DomainUser {
            id: self.id,
            email: self.email,
            full_name: self.full_name,
            phone: self.phone,
            address: self.address,
            reward: reward.map(Reward::into_domain),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

impl Reward {
    pub fn into_domain(self) -> DomainReward {
        DomainReward {
            id: self.id,
            user_id: self.user_id,
            points: self.points,
            tier: self.tier.as_str().into(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

impl From<(User, Option<Reward>)> for DomainUser {
    fn from(value: (User, Option<Reward>)) -> Self {
        value.0.into_domain(value.1)
    }
}

impl<'a> From<&'a DomainNewUser> for NewUser<'a> {
    fn from(value: &'a DomainNewUser) -> Self {
        Self {
            email: value.email.as_str(),
            full_name: value.full_name.as_str(),
            phone: value.phone.as_str(),
            address: value.address.as_str(),
            updated_at: value.updated_at,
        }
    }
}

impl<'a> NewReward<'a> {
    pub fn from_domain(user_id: i32, value: &'a DomainUpsertReward) -> Self {
        Self {
            user_id,
            points: value.points,
            tier: value.tier.into(),
            updated_at: value.updated_at,
        }
    }
}
