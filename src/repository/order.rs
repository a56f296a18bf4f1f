use std::collections::HashMap;

use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::{
    domain::order::{
        NewOrder as DomainNewOrder, Order as DomainOrder, OrderListQuery, OrderStats, OrderStatus,
        UpdateOrderStatus as DomainUpdateOrderStatus,
    },
    models::order::{
        NewOrder as DbNewOrder, NewOrderItem as DbNewOrderItem, Order as DbOrder,
        OrderItem as DbOrderItem, UpdateOrderStatus as DbUpdateOrderStatus,
    },
    repository::{DieselRepository, OrderReader, OrderWriter},
    repository::errors::{RepositoryError, RepositoryResult},
};

impl OrderReader for DieselRepository {
    fn get_order_by_id(&self, id: i32) -> RepositoryResult<Option<DomainOrder>> {
        use crate::schema::{order_items, orders};

        let mut conn = self.conn()?;
        let order = orders::table
            .filter(orders::id.eq(id))
            .first::<DbOrder>(&mut conn)
            .optional()?;

        let Some(order) = order else {
            return Ok(None);
        };

        let items = order_items::table
            .filter(order_items::order_id.eq(order.id))
            .order(order_items::id.asc())
            .load::<DbOrderItem>(&mut conn)?;

        Ok(Some(DomainOrder::from((order, items))))
    }

    fn list_orders(&self, query: OrderListQuery) -> RepositoryResult<(usize, Vec<DomainOrder>)> {
        use crate::schema::{order_items, orders};

        let mut conn = self.conn()?;

        let OrderListQuery {
            status,
            search,
            pagination,
        } = query;

        let status_filter = status.map(|status| status.as_str());
        let search_pattern = search.as_ref().map(|term| format!("%{}%", term));

        let mut count_query = orders::table.into_boxed::<diesel::sqlite::Sqlite>();

        if let Some(status_value) = status_filter {
            count_query = count_query.filter(orders::status.eq(status_value));
        }

        if let Some(ref pattern) = search_pattern {
            count_query = count_query.filter(
                orders::customer_name
                    .like(pattern.clone())
                    .or(orders::customer_phone.like(pattern.clone())),
            );
        }

        let total = count_query.count().get_result::<i64>(&mut conn)? as usize;

        let mut items_query = orders::table.into_boxed::<diesel::sqlite::Sqlite>();

        if let Some(status_value) = status_filter {
            items_query = items_query.filter(orders::status.eq(status_value));
        }

        if let Some(ref pattern) = search_pattern {
            items_query = items_query.filter(
                orders::customer_name
                    .like(pattern.clone())
                    .or(orders::customer_phone.like(pattern.clone())),
            );
        }

        items_query = items_query.order((orders::created_at.desc(), orders::id.desc()));

        if let Some(pagination) = pagination {
            let offset = ((pagination.page.max(1) - 1) * pagination.per_page) as i64;
            let limit = pagination.per_page as i64;
            items_query = items_query.offset(offset).limit(limit);
        }

        let db_orders = items_query.load::<DbOrder>(&mut conn)?;
        if db_orders.is_empty() {
            return Ok((total, Vec::new()));
        }

        let order_ids: Vec<i32> = db_orders.iter().map(|order| order.id).collect();

        let rows = order_items::table
            .filter(order_items::order_id.eq_any(&order_ids))
            .order(order_items::id.asc())
            .load::<DbOrderItem>(&mut conn)?;

        let mut items_by_order: HashMap<i32, Vec<DbOrderItem>> = HashMap::new();
        for item in rows {
            items_by_order.entry(item.order_id).or_default().push(item);
        }

        let orders = db_orders
            .into_iter()
            .map(|order| {
                let items = items_by_order.remove(&order.id).unwrap_or_default();
                DomainOrder::from((order, items))
            })
            .collect();

        Ok((total, orders))
    }

    fn order_stats(&self, week_start: NaiveDateTime) -> RepositoryResult<OrderStats> {
        use crate::schema::orders;

        let mut conn = self.conn()?;

        let completed = OrderStatus::Completed.as_str();

        let total_orders = orders::table.count().get_result::<i64>(&mut conn)? as usize;

        let completed_orders = orders::table
            .filter(orders::status.eq(completed))
            .count()
            .get_result::<i64>(&mut conn)? as usize;

        let completed_total_cents = orders::table
            .filter(orders::status.eq(completed))
            .select(diesel::dsl::sum(orders::total_cents))
            .first::<Option<i64>>(&mut conn)?
            .unwrap_or(0);

        let revenue_week_cents = orders::table
            .filter(orders::status.eq(completed))
            .filter(orders::created_at.ge(week_start))
            .select(diesel::dsl::sum(orders::total_cents))
            .first::<Option<i64>>(&mut conn)?
            .unwrap_or(0);

        let status_rows = orders::table
            .group_by(orders::status)
            .select((orders::status, diesel::dsl::count_star()))
            .load::<(String, i64)>(&mut conn)?;

        let status_counts = status_rows
            .into_iter()
            .map(|(status, count)| (status.as_str().into(), count as usize))
            .collect();

        Ok(OrderStats {
            total_orders,
            revenue_week_cents,
            completed_orders,
            completed_total_cents,
            status_counts,
        })
    }
}

impl OrderWriter for DieselRepository {
    fn create_order(&self, new_order: &DomainNewOrder) -> RepositoryResult<DomainOrder> {
        use crate::schema::{order_items, orders};

        let mut conn = self.conn()?;

        conn.transaction::<DomainOrder, RepositoryError, _>(|conn| {
            let db_new = DbNewOrder::from(new_order);

            let created = diesel::insert_into(orders::table)
                .values(&db_new)
                .get_result::<DbOrder>(conn)?;

            let order_id = created.id;

            if !new_order.items.is_empty() {
                let payload: Vec<DbNewOrderItem> = new_order
                    .items
                    .iter()
                    .map(|item| DbNewOrderItem::from_domain(order_id, item))
                    .collect();

                diesel::insert_into(order_items::table)
                    .values(&payload)
                    .execute(conn)?;
            }

            let items = order_items::table
                .filter(order_items::order_id.eq(order_id))
                .order(order_items::id.asc())
                .load::<DbOrderItem>(conn)?;

            Ok(DomainOrder::from((created, items)))
        })
    }

    fn update_order_status(
        &self,
        order_id: i32,
        updates: &DomainUpdateOrderStatus,
    ) -> RepositoryResult<DomainOrder> {
        use crate::schema::{order_items, orders};

        let mut conn = self.conn()?;

        conn.transaction::<DomainOrder, RepositoryError, _>(|conn| {
            let db_updates = DbUpdateOrderStatus::from(updates);

            // get_result on zero matched rows surfaces diesel::NotFound,
            // which maps to RepositoryError::NotFound.
            let updated = diesel::update(orders::table.filter(orders::id.eq(order_id)))
                .set(&db_updates)
                .get_result::<DbOrder>(conn)?;

            let items = order_items::table
                .filter(order_items::order_id.eq(order_id))
                .order(order_items::id.asc())
                .load::<DbOrderItem>(conn)?;

            Ok(DomainOrder::from((updated, items)))
        })
    }
}
