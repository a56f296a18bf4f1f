use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::pagination::Pagination;

/// Lifecycle states of a customer order.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Order has been placed and awaits the kitchen.
    Pending,
    /// Order is being prepared.
    Preparing,
    /// Order has been delivered and paid for.
    Completed,
    /// Order was called off before completion.
    Cancelled,
}

impl Default for OrderStatus {
    fn default() -> Self {
        Self::Pending
    }
}

impl OrderStatus {
    /// Every status, in display order. Used for filters and the histogram.
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Pending,
        OrderStatus::Preparing,
        OrderStatus::Completed,
        OrderStatus::Cancelled,
    ];

    /// Storage representation of the status.
    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Preparing => "preparing",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    /// Strict parse of the storage representation.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(OrderStatus::Pending),
            "preparing" => Some(OrderStatus::Preparing),
            "completed" => Some(OrderStatus::Completed),
            "cancelled" => Some(OrderStatus::Cancelled),
            _ => None,
        }
    }

    /// Whether the workflow permits moving from `self` to `next`.
    ///
    /// The table is intentionally strict: terminal states have no outgoing
    /// edges and re-setting the current status is not an edge either.
    pub fn can_transition_to(self, next: OrderStatus) -> bool {
        matches!(
            (self, next),
            (OrderStatus::Pending, OrderStatus::Preparing)
                | (OrderStatus::Pending, OrderStatus::Cancelled)
                | (OrderStatus::Preparing, OrderStatus::Completed)
                | (OrderStatus::Preparing, OrderStatus::Cancelled)
        )
    }

    /// States the workflow allows next from `self`.
    pub fn next_states(self) -> Vec<OrderStatus> {
        Self::ALL
            .into_iter()
            .filter(|next| self.can_transition_to(*next))
            .collect()
    }

    /// Completed and cancelled orders never change status again.
    pub fn is_terminal(self) -> bool {
        matches!(self, OrderStatus::Completed | OrderStatus::Cancelled)
    }
}

impl From<&str> for OrderStatus {
    fn from(value: &str) -> Self {
        OrderStatus::parse(value).unwrap_or_default()
    }
}

impl From<OrderStatus> for &'static str {
    fn from(value: OrderStatus) -> Self {
        value.as_str()
    }
}

/// How the customer chose to pay.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMode {
    Cash,
    Card,
    Online,
}

impl Default for PaymentMode {
    fn default() -> Self {
        Self::Cash
    }
}

impl PaymentMode {
    /// Storage representation of the payment mode.
    pub fn as_str(self) -> &'static str {
        match self {
            PaymentMode::Cash => "cash",
            PaymentMode::Card => "card",
            PaymentMode::Online => "online",
        }
    }

    /// Strict parse of the storage representation.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "cash" => Some(PaymentMode::Cash),
            "card" => Some(PaymentMode::Card),
            "online" => Some(PaymentMode::Online),
            _ => None,
        }
    }
}

impl From<&str> for PaymentMode {
    fn from(value: &str) -> Self {
        PaymentMode::parse(value).unwrap_or_default()
    }
}

impl From<PaymentMode> for &'static str {
    fn from(value: PaymentMode) -> Self {
        value.as_str()
    }
}

/// Domain representation of a customer order with its line items.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Order {
    /// Unique identifier of the order.
    pub id: i32,
    /// Optional reference to the registered customer who placed the order.
    pub user_id: Option<i32>,
    /// Customer name captured at checkout.
    pub customer_name: String,
    /// Customer phone captured at checkout.
    pub customer_phone: String,
    /// Address the order is delivered to.
    pub delivery_address: String,
    /// Payment mode selected at checkout.
    pub payment_mode: PaymentMode,
    /// Current lifecycle status.
    pub status: OrderStatus,
    /// Total amount charged, in cents.
    pub total_cents: i32,
    /// Line items belonging to this order.
    pub items: Vec<OrderItem>,
    /// Timestamp for when the order record was created.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last update to the order record.
    pub updated_at: NaiveDateTime,
}

impl Order {
    /// Sum of line-item price × quantity, in cents.
    ///
    /// The stored `total_cents` is what the customer was charged and is not
    /// recomputed from items; the two can drift and the detail screen shows
    /// both so an operator can reconcile.
    pub fn items_total_cents(&self) -> i64 {
        self.items
            .iter()
            .map(|item| i64::from(item.price_cents) * i64::from(item.quantity))
            .sum()
    }
}

/// One line of an order: a menu item snapshot at order time.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct OrderItem {
    /// Referenced menu item, if it still exists.
    pub menu_item_id: Option<i32>,
    /// Item name captured at order time.
    pub name: String,
    /// Ordered quantity, always positive.
    pub quantity: i32,
    /// Unit price snapshot at order time, in cents.
    pub price_cents: i32,
}

/// Payload required to insert a new order. Orders are created by the
/// storefront checkout; the admin screens only move them through the workflow.
#[derive(Debug, Clone)]
pub struct NewOrder {
    /// Optional reference to the registered customer.
    pub user_id: Option<i32>,
    /// Customer name captured at checkout.
    pub customer_name: String,
    /// Customer phone captured at checkout.
    pub customer_phone: String,
    /// Address the order is delivered to.
    pub delivery_address: String,
    /// Payment mode selected at checkout.
    pub payment_mode: PaymentMode,
    /// Initial lifecycle status.
    pub status: OrderStatus,
    /// Total amount charged, in cents.
    pub total_cents: i32,
    /// Line items belonging to this order.
    pub items: Vec<OrderItem>,
    /// Timestamp captured when the payload was created.
    pub updated_at: NaiveDateTime,
}

impl NewOrder {
    /// Build a new order payload with the supplied details and current timestamp.
    pub fn new(customer_name: impl Into<String>, total_cents: i32) -> Self {
        Self {
            user_id: None,
            customer_name: customer_name.into(),
            customer_phone: String::new(),
            delivery_address: String::new(),
            payment_mode: PaymentMode::default(),
            status: OrderStatus::default(),
            total_cents,
            items: Vec::new(),
            updated_at: Local::now().naive_utc(),
        }
    }

    /// Attach a registered customer to the order payload.
    pub fn with_user_id(mut self, user_id: i32) -> Self {
        self.user_id = Some(user_id);
        self
    }

    /// Attach a contact phone to the order payload.
    pub fn with_customer_phone(mut self, phone: impl Into<String>) -> Self {
        self.customer_phone = phone.into();
        self
    }

    /// Attach a delivery address to the order payload.
    pub fn with_delivery_address(mut self, address: impl Into<String>) -> Self {
        self.delivery_address = address.into();
        self
    }

    /// Override the default payment mode.
    pub fn with_payment_mode(mut self, payment_mode: PaymentMode) -> Self {
        self.payment_mode = payment_mode;
        self
    }

    /// Override the default status for the new order.
    pub fn with_status(mut self, status: OrderStatus) -> Self {
        self.status = status;
        self
    }

    /// Attach line items to the order payload.
    pub fn with_items(mut self, items: impl Into<Vec<OrderItem>>) -> Self {
        self.items = items.into();
        self
    }
}

/// Patch applied when an operator moves an order through the workflow.
#[derive(Debug, Clone)]
pub struct UpdateOrderStatus {
    /// Status to store.
    pub status: OrderStatus,
    /// Timestamp captured when the patch was created.
    pub updated_at: NaiveDateTime,
}

impl UpdateOrderStatus {
    /// Build a status patch stamped with the current time.
    pub fn new(status: OrderStatus) -> Self {
        Self {
            status,
            updated_at: Local::now().naive_utc(),
        }
    }
}

/// Query definition used to list orders.
#[derive(Debug, Clone, Default)]
pub struct OrderListQuery {
    /// Optional status filter.
    pub status: Option<OrderStatus>,
    /// Optional search term matched against customer name and phone.
    pub search: Option<String>,
    /// Optional pagination options applied to the query.
    pub pagination: Option<Pagination>,
}

impl OrderListQuery {
    /// Construct a query that targets every order.
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter the results by the provided status.
    pub fn status(mut self, status: OrderStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Filter the results by a search term applied to customer name and phone.
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    /// Apply pagination to the query with the given page number and page size.
    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

/// Raw aggregates over the orders table used by the dashboard.
#[derive(Debug, Clone, Default)]
pub struct OrderStats {
    /// Number of orders regardless of status.
    pub total_orders: usize,
    /// Revenue from completed orders created after the week cutoff, in cents.
    pub revenue_week_cents: i64,
    /// Number of completed orders over all time.
    pub completed_orders: usize,
    /// Revenue from completed orders over all time, in cents.
    pub completed_total_cents: i64,
    /// Order count per status value.
    pub status_counts: Vec<(OrderStatus, usize)>,
}
