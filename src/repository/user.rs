use std::collections::HashMap;

use diesel::prelude::*;

use crate::{
    domain::user::{
        NewUser as DomainNewUser, Reward as DomainReward, UpsertReward, User as DomainUser,
        UserListQuery,
    },
    models::user::{NewReward as DbNewReward, NewUser as DbNewUser, Reward as DbReward, User as DbUser},
    repository::{DieselRepository, UserReader, UserWriter},
    repository::errors::RepositoryResult,
};

impl UserReader for DieselRepository {
    fn get_user_by_id(&self, id: i32) -> RepositoryResult<Option<DomainUser>> {
        use crate::schema::{rewards, users};

        let mut conn = self.conn()?;

        let user = users::table
            .filter(users::id.eq(id))
            .first::<DbUser>(&mut conn)
            .optional()?;

        let Some(user) = user else {
            return Ok(None);
        };

        let reward = rewards::table
            .filter(rewards::user_id.eq(user.id))
            .first::<DbReward>(&mut conn)
            .optional()?;

        Ok(Some(DomainUser::from((user, reward))))
    }

    fn get_user_by_email(&self, email: &str) -> RepositoryResult<Option<DomainUser>> {
        use crate::schema::{rewards, users};

        let mut conn = self.conn()?;

        let user = users::table
            .filter(users::email.eq(email.to_lowercase()))
            .first::<DbUser>(&mut conn)
            .optional()?;

        let Some(user) = user else {
            return Ok(None);
        };

        let reward = rewards::table
            .filter(rewards::user_id.eq(user.id))
            .first::<DbReward>(&mut conn)
            .optional()?;

        Ok(Some(DomainUser::from((user, reward))))
    }

    fn list_users(&self, query: UserListQuery) -> RepositoryResult<(usize, Vec<DomainUser>)> {
        use crate::schema::{rewards, users};

        let mut conn = self.conn()?;

        let UserListQuery { search, pagination } = query;

        let search_pattern = search.as_ref().map(|term| format!("%{}%", term));

        let mut count_query = users::table.into_boxed::<diesel::sqlite::Sqlite>();

        if let Some(ref pattern) = search_pattern {
            count_query = count_query.filter(
                users::full_name
                    .like(pattern.clone())
                    .or(users::email.like(pattern.clone()))
                    .or(users::phone.like(pattern.clone())),
            );
        }

        let total = count_query.count().get_result::<i64>(&mut conn)? as usize;

        let mut items_query = users::table.into_boxed::<diesel::sqlite::Sqlite>();

        if let Some(ref pattern) = search_pattern {
            items_query = items_query.filter(
                users::full_name
                    .like(pattern.clone())
                    .or(users::email.like(pattern.clone()))
                    .or(users::phone.like(pattern.clone())),
            );
        }

        items_query = items_query.order((users::created_at.desc(), users::id.desc()));

        if let Some(pagination) = pagination {
            let offset = ((pagination.page.max(1) - 1) * pagination.per_page) as i64;
            let limit = pagination.per_page as i64;
            items_query = items_query.offset(offset).limit(limit);
        }

        let db_users = items_query.load::<DbUser>(&mut conn)?;
        if db_users.is_empty() {
            return Ok((total, Vec::new()));
        }

        let user_ids: Vec<i32> = db_users.iter().map(|user| user.id).collect();

        let reward_rows = rewards::table
            .filter(rewards::user_id.eq_any(&user_ids))
            .load::<DbReward>(&mut conn)?;

        let mut rewards_by_user: HashMap<i32, DbReward> = reward_rows
            .into_iter()
            .map(|reward| (reward.user_id, reward))
            .collect();

        let users = db_users
            .into_iter()
            .map(|user| {
                let reward = rewards_by_user.remove(&user.id);
                DomainUser::from((user, reward))
            })
            .collect();

        Ok((total, users))
    }
}

impl UserWriter for DieselRepository {
    fn create_user(&self, new_user: &DomainNewUser) -> RepositoryResult<DomainUser> {
        use crate::schema::users;

        let mut conn = self.conn()?;

        let insertable = DbNewUser::from(new_user);

        let created = diesel::insert_into(users::table)
            .values(&insertable)
            .get_result::<DbUser>(&mut conn)?;

        Ok(created.into_domain(None))
    }

    fn upsert_reward(&self, user_id: i32, reward: &UpsertReward) -> RepositoryResult<DomainReward> {
        use crate::schema::rewards;

        let mut conn = self.conn()?;

        let insertable = DbNewReward::from_domain(user_id, reward);

        // Keyed by the unique user_id: the first write creates the row,
        // later writes overwrite points and tier.
        let stored = diesel::insert_into(rewards::table)
            .values(&insertable)
            .on_conflict(rewards::user_id)
            .do_update()
            .set((
                rewards::points.eq(reward.points),
                rewards::tier.eq(reward.tier.as_str()),
                rewards::updated_at.eq(reward.updated_at),
            ))
            .get_result::<DbReward>(&mut conn)?;

        Ok(stored.into_domain())
    }
}
