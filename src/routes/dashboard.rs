use actix_web::{HttpResponse, Responder, get, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::auth::AdminUser;
use crate::repository::DieselRepository;
use crate::routes::{base_context, redirect, render_template};
use crate::services::dashboard::load_dashboard_stats;
use crate::services::ServiceError;

#[get("/")]
pub async fn show_dashboard(
    user: AdminUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match load_dashboard_stats(repo.get_ref(), &user) {
        Ok(stats) => {
            let mut context = base_context(&flash_messages, &user, "dashboard");
            context.insert("stats", &stats);
            render_template(&tera, "dashboard/index.html", &context)
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Insufficient permissions.").send();
            redirect("/login")
        }
        Err(err) => {
            log::error!("Failed to load dashboard stats: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
