use std::collections::HashMap;

use diesel::prelude::*;

use crate::{
    domain::menu_item::{
        MenuItem as DomainMenuItem, MenuItemListQuery, NewMenuItem as DomainNewMenuItem,
        UpdateMenuItem as DomainUpdateMenuItem,
    },
    models::category::Category as DbCategory,
    models::menu_item::{
        MenuItem as DbMenuItem, NewMenuItem as DbNewMenuItem, UpdateMenuItem as DbUpdateMenuItem,
    },
    repository::{DieselRepository, MenuItemReader, MenuItemWriter},
    repository::errors::{RepositoryError, RepositoryResult},
};

impl MenuItemReader for DieselRepository {
    fn get_menu_item_by_id(&self, id: i32) -> RepositoryResult<Option<DomainMenuItem>> {
        use crate::schema::{categories, menu_items};

        let mut conn = self.conn()?;

        let item = menu_items::table
            .filter(menu_items::id.eq(id))
            .first::<DbMenuItem>(&mut conn)
            .optional()?;

        let Some(item) = item else {
            return Ok(None);
        };

        let category = match item.category_id {
            Some(category_id) => categories::table
                .filter(categories::id.eq(category_id))
                .first::<DbCategory>(&mut conn)
                .optional()?,
            None => None,
        };

        Ok(Some(DomainMenuItem::from((item, category))))
    }

    fn list_menu_items(
        &self,
        query: MenuItemListQuery,
    ) -> RepositoryResult<(usize, Vec<DomainMenuItem>)> {
        use crate::schema::{categories, menu_items};

        let mut conn = self.conn()?;

        let MenuItemListQuery {
            search,
            category_id,
            pagination,
        } = query;

        let search_pattern = search.as_ref().map(|term| format!("%{}%", term));

        let mut count_query = menu_items::table.into_boxed::<diesel::sqlite::Sqlite>();

        if let Some(category) = category_id {
            count_query = count_query.filter(menu_items::category_id.eq(Some(category)));
        }

        if let Some(ref pattern) = search_pattern {
            count_query = count_query.filter(
                menu_items::name
                    .like(pattern.clone())
                    .or(menu_items::description.like(pattern.clone())),
            );
        }

        let total = count_query.count().get_result::<i64>(&mut conn)? as usize;

        let mut items_query = menu_items::table.into_boxed::<diesel::sqlite::Sqlite>();

        if let Some(category) = category_id {
            items_query = items_query.filter(menu_items::category_id.eq(Some(category)));
        }

        if let Some(ref pattern) = search_pattern {
            items_query = items_query.filter(
                menu_items::name
                    .like(pattern.clone())
                    .or(menu_items::description.like(pattern.clone())),
            );
        }

        items_query = items_query.order((menu_items::created_at.desc(), menu_items::id.desc()));

        if let Some(pagination) = pagination {
            let offset = ((pagination.page.max(1) - 1) * pagination.per_page) as i64;
            let limit = pagination.per_page as i64;
            items_query = items_query.offset(offset).limit(limit);
        }

        let db_items = items_query.load::<DbMenuItem>(&mut conn)?;
        if db_items.is_empty() {
            return Ok((total, Vec::new()));
        }

        let category_ids: Vec<i32> = db_items.iter().filter_map(|item| item.category_id).collect();

        let mut categories_by_id: HashMap<i32, DbCategory> = HashMap::new();
        if !category_ids.is_empty() {
            let rows = categories::table
                .filter(categories::id.eq_any(&category_ids))
                .load::<DbCategory>(&mut conn)?;
            for category in rows {
                categories_by_id.insert(category.id, category);
            }
        }

        let items = db_items
            .into_iter()
            .map(|item| {
                let category = item
                    .category_id
                    .and_then(|category_id| categories_by_id.get(&category_id).cloned());
                DomainMenuItem::from((item, category))
            })
            .collect();

        Ok((total, items))
    }
}

impl MenuItemWriter for DieselRepository {
    fn create_menu_item(&self, new_item: &DomainNewMenuItem) -> RepositoryResult<DomainMenuItem> {
        use crate::schema::menu_items;

        let mut conn = self.conn()?;

        let insertable = DbNewMenuItem::from(new_item);

        let created = diesel::insert_into(menu_items::table)
            .values(&insertable)
            .get_result::<DbMenuItem>(&mut conn)?;

        Ok(created.into_domain(None))
    }

    fn update_menu_item(
        &self,
        item_id: i32,
        updates: &DomainUpdateMenuItem,
    ) -> RepositoryResult<DomainMenuItem> {
        use crate::schema::menu_items;

        let mut conn = self.conn()?;

        let db_updates = DbUpdateMenuItem::from(updates);

        let updated = diesel::update(menu_items::table.filter(menu_items::id.eq(item_id)))
            .set(&db_updates)
            .get_result::<DbMenuItem>(&mut conn)?;

        Ok(updated.into_domain(None))
    }

    fn delete_menu_item(&self, item_id: i32) -> RepositoryResult<()> {
        use crate::schema::menu_items;

        let mut conn = self.conn()?;

        let deleted = diesel::delete(menu_items::table.filter(menu_items::id.eq(item_id)))
            .execute(&mut conn)?;
        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
