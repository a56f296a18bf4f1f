use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::auth::AdminUser;
use crate::forms::settings::SettingsForm;
use crate::repository::DieselRepository;
use crate::routes::{base_context, redirect, render_template};
use crate::services::ServiceError;
use crate::services::settings::{load_settings, save_settings};

#[get("/settings")]
pub async fn show_settings(
    user: AdminUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match load_settings(repo.get_ref(), &user) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, &user, "settings");
            context.insert("info", &data.info);
            render_template(&tera, "settings/index.html", &context)
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Insufficient permissions.").send();
            redirect("/login")
        }
        Err(err) => {
            log::error!("Failed to load settings: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/settings")]
pub async fn update_settings(
    user: AdminUser,
    repo: web::Data<DieselRepository>,
    form: web::Form<SettingsForm>,
) -> impl Responder {
    match save_settings(repo.get_ref(), &user, form.into_inner()) {
        Ok(_) => {
            FlashMessage::success("Settings saved.").send();
            redirect("/settings")
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Insufficient permissions.").send();
            redirect("/login")
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
            redirect("/settings")
        }
        Err(err) => {
            log::error!("Failed to save settings: {err}");
            FlashMessage::error("Could not save the settings.").send();
            redirect("/settings")
        }
    }
}
