use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::order::{
    NewOrder as DomainNewOrder, Order as DomainOrder, OrderItem as DomainOrderItem,
    UpdateOrderStatus as DomainUpdateOrderStatus,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::orders)]
pub struct Order {
    pub id: i32,
    pub user_id: Option<i32>,
    pub customer_name: String,
    pub customer_phone: String,
    pub delivery_address: String,
    pub payment_mode: String,
    pub status: String,
    pub total_cents: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(table_name = crate::schema::order_items)]
#[diesel(belongs_to(Order, foreign_key = order_id))]
pub struct OrderItem {
    pub id: i32,
    pub order_id: i32,
    pub menu_item_id: Option<i32>,
    pub name: String,
    pub quantity: i32,
    pub price_cents: i32,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::orders)]
pub struct NewOrder<'a> {
    pub user_id: Option<i32>,
    pub customer_name: &'a str,
    pub customer_phone: &'a str,
    pub delivery_address: &'a str,
    pub payment_mode: &'a str,
    pub status: &'a str,
    pub total_cents: i32,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::order_items)]
pub struct NewOrderItem<'a> {
    pub order_id: i32,
    pub menu_item_id: Option<i32>,
    pub name: &'a str,
    pub quantity: i32,
    pub price_cents: i32,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::orders)]
pub struct UpdateOrderStatus<'a> {
    pub status: &'a str,
    pub updated_at: NaiveDateTime,
}

impl Order {
    pub fn into_domain(self, items: Vec<OrderItem>) -> DomainOrder {
        DomainOrder {
            id: self.id,
            user_id: self.user_id,
            customer_name: self.customer_name,
            customer_phone: self.customer_phone,
            delivery_address: self.delivery_address,
            payment_mode: self.payment_mode.as_str().into(),
            status: self.status.as_str().into(),
            total_cents: self.total_cents,
            items: items.into_iter().map(OrderItem::into_domain).collect(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

impl OrderItem {
    pub fn into_domain(self) -> DomainOrderItem {
        DomainOrderItem {
            menu_item_id: self.menu_item_id,
            name: self.name,
            quantity: self.quantity,
            price_cents: self.price_cents,
        }
    }
}

impl From<(Order, Vec<OrderItem>)> for DomainOrder {
    fn from(value: (Order, Vec<OrderItem>)) -> Self {
        value.0.into_domain(value.1)
    }
}

impl<'a> From<&'a DomainNewOrder> for NewOrder<'a> {
    fn from(value: &'a DomainNewOrder) -> Self {
        Self {
            user_id: value.user_id,
            customer_name: value.customer_name.as_str(),
            customer_phone: value.customer_phone.as_str(),
            delivery_address: value.delivery_address.as_str(),
            payment_mode: value.payment_mode.into(),
            status: value.status.into(),
            total_cents: value.total_cents,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> NewOrderItem<'a> {
    pub fn from_domain(order_id: i32, value: &'a DomainOrderItem) -> Self {
        Self {
            order_id,
            menu_item_id: value.menu_item_id,
            name: value.name.as_str(),
            quantity: value.quantity,
            price_cents: value.price_cents,
        }
    }
}

impl<'a> From<&'a DomainUpdateOrderStatus> for UpdateOrderStatus<'a> {
    fn from(value: &'a DomainUpdateOrderStatus) -> Self {
        Self {
            status: value.status.into(),
            updated_at: value.updated_at,
        }
    }
}
