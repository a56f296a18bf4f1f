use serde::Deserialize;

use crate::SERVICE_ACCESS_ROLE;
use crate::auth::{AdminUser, check_role};
use crate::domain::order::{Order, OrderListQuery, OrderStatus, UpdateOrderStatus};
use crate::forms::orders::UpdateOrderStatusForm;
use crate::pagination::{DEFAULT_ITEMS_PER_PAGE, Paginated};
use crate::repository::{OrderReader, OrderWriter};
use crate::services::{ServiceError, ServiceResult};

/// Query parameters accepted by the orders index page.
#[derive(Debug, Default, Deserialize)]
pub struct OrdersQuery {
    /// Optional status filter in storage form; unknown values are ignored.
    pub status: Option<String>,
    /// Optional search string entered by the user.
    pub search: Option<String>,
    /// Page requested by the UI (1-based).
    pub page: Option<usize>,
}

/// Data required to render the orders index template.
pub struct OrdersPageData {
    /// Paginated list of orders displayed in the table.
    pub orders: Paginated<Order>,
    /// Status filter echoed back to the view when present.
    pub status: Option<OrderStatus>,
    /// Search query echoed back to the view when present.
    pub search: Option<String>,
}

/// Loads the orders overview page. Filters are applied before the total is
/// counted, so pagination reflects the filtered set.
pub fn load_orders_page<R>(
    repo: &R,
    user: &AdminUser,
    query: OrdersQuery,
) -> ServiceResult<OrdersPageData>
where
    R: OrderReader + ?Sized,
{
    if !check_role(SERVICE_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    let OrdersQuery {
        status,
        search,
        page,
    } = query;

    let status = status.as_deref().and_then(OrderStatus::parse);

    let page = page.unwrap_or(1);
    let mut list_query = OrderListQuery::new().paginate(page, DEFAULT_ITEMS_PER_PAGE);

    if let Some(status) = status {
        list_query = list_query.status(status);
    }

    if let Some(term) = search.as_ref() {
        list_query = list_query.search(term);
    }

    let (total, items) = repo.list_orders(list_query).map_err(ServiceError::from)?;

    let orders = Paginated::new(items, page, DEFAULT_ITEMS_PER_PAGE, total);

    Ok(OrdersPageData {
        orders,
        status,
        search,
    })
}

/// Data required to render the order detail template.
pub struct OrderDetailData {
    /// The order with its line items.
    pub order: Order,
    /// Sum of line-item price × quantity, shown next to the stored total.
    pub items_total_cents: i64,
    /// Statuses the workflow allows next, used to render transition buttons.
    pub next_states: Vec<OrderStatus>,
}

/// Loads a single order for the detail screen.
pub fn load_order_detail<R>(
    repo: &R,
    user: &AdminUser,
    order_id: i32,
) -> ServiceResult<OrderDetailData>
where
    R: OrderReader + ?Sized,
{
    if !check_role(SERVICE_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    let order = repo
        .get_order_by_id(order_id)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)?;

    let items_total_cents = order.items_total_cents();
    let next_states = order.status.next_states();

    Ok(OrderDetailData {
        order,
        items_total_cents,
        next_states,
    })
}

/// Moves an order through the status workflow.
///
/// The transition is validated against the workflow table before anything is
/// written: terminal states cannot be left, and re-setting the current status
/// is rejected. An unknown order id fails with `NotFound`, never silently.
pub fn change_order_status<R>(
    repo: &R,
    user: &AdminUser,
    order_id: i32,
    form: UpdateOrderStatusForm,
) -> ServiceResult<Order>
where
    R: OrderReader + OrderWriter + ?Sized,
{
    if !check_role(SERVICE_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    let next = form
        .into_status()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    let order = repo
        .get_order_by_id(order_id)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)?;

    if !order.status.can_transition_to(next) {
        return Err(ServiceError::Form(format!(
            "order #{order_id} cannot move from {} to {}",
            order.status.as_str(),
            next.as_str(),
        )));
    }

    repo.update_order_status(order_id, &UpdateOrderStatus::new(next))
        .map_err(ServiceError::from)
}
