use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::auth::AdminUser;
use crate::forms::orders::UpdateOrderStatusForm;
use crate::repository::DieselRepository;
use crate::routes::{base_context, redirect, render_template};
use crate::services::ServiceError;
use crate::services::orders::{
    OrdersQuery, change_order_status, load_order_detail, load_orders_page,
};

#[get("/orders")]
pub async fn show_orders(
    params: web::Query<OrdersQuery>,
    user: AdminUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match load_orders_page(repo.get_ref(), &user, params.0) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, &user, "orders");
            context.insert("orders", &data.orders);
            context.insert(
                "status",
                data.status.map(|status| status.as_str()).unwrap_or(""),
            );
            context.insert("search", data.search.as_deref().unwrap_or(""));
            render_template(&tera, "orders/index.html", &context)
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Insufficient permissions.").send();
            redirect("/login")
        }
        Err(err) => {
            log::error!("Failed to list orders: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/orders/{order_id}")]
pub async fn show_order(
    path: web::Path<i32>,
    user: AdminUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let order_id = path.into_inner();

    match load_order_detail(repo.get_ref(), &user, order_id) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, &user, "orders");
            context.insert("order", &data.order);
            context.insert("items_total_cents", &data.items_total_cents);
            context.insert("next_states", &data.next_states);
            render_template(&tera, "orders/detail.html", &context)
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Insufficient permissions.").send();
            redirect("/login")
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error(format!("Order #{order_id} was not found.")).send();
            redirect("/orders")
        }
        Err(err) => {
            log::error!("Failed to load order {order_id}: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/orders/{order_id}/status")]
pub async fn update_order_status(
    path: web::Path<i32>,
    user: AdminUser,
    repo: web::Data<DieselRepository>,
    form: web::Form<UpdateOrderStatusForm>,
) -> impl Responder {
    let order_id = path.into_inner();

    match change_order_status(repo.get_ref(), &user, order_id, form.into_inner()) {
        Ok(order) => {
            FlashMessage::success(format!(
                "Order #{order_id} moved to {}.",
                order.status.as_str()
            ))
            .send();
            redirect(&format!("/orders/{order_id}"))
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Insufficient permissions.").send();
            redirect("/login")
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error(format!("Order #{order_id} was not found.")).send();
            redirect("/orders")
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
            redirect(&format!("/orders/{order_id}"))
        }
        Err(err) => {
            log::error!("Failed to update status of order {order_id}: {err}");
            FlashMessage::error("Could not update the order status.").send();
            redirect(&format!("/orders/{order_id}"))
        }
    }
}
