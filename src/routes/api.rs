use actix_web::{HttpResponse, Responder, get, web};

use crate::auth::AdminUser;
use crate::repository::DieselRepository;
use crate::services::ServiceError;
use crate::services::dashboard::load_dashboard_stats;
use crate::services::orders::{OrdersQuery, load_orders_page};

#[get("/v1/stats")]
/// Return the dashboard aggregates as JSON for the chart widgets.
///
/// Operators without the admin role receive a `401 Unauthorized` response.
pub async fn api_v1_stats(user: AdminUser, repo: web::Data<DieselRepository>) -> impl Responder {
    match load_dashboard_stats(repo.get_ref(), &user) {
        Ok(stats) => HttpResponse::Ok().json(stats),
        Err(ServiceError::Unauthorized) => HttpResponse::Unauthorized().finish(),
        Err(err) => {
            log::error!("Failed to load dashboard stats: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/v1/orders")]
/// Return a JSON page of orders with optional status filter and search.
pub async fn api_v1_orders(
    params: web::Query<OrdersQuery>,
    user: AdminUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match load_orders_page(repo.get_ref(), &user, params.0) {
        Ok(data) => HttpResponse::Ok().json(data.orders),
        Err(ServiceError::Unauthorized) => HttpResponse::Unauthorized().finish(),
        Err(err) => {
            log::error!("Failed to list orders: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
