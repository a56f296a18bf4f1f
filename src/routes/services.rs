use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::auth::AdminUser;
use crate::forms::services::{AddServiceForm, EditServiceForm};
use crate::repository::DieselRepository;
use crate::routes::{base_context, redirect, render_template};
use crate::services::ServiceError;
use crate::services::services::{create_service, load_services, modify_service, remove_service};

#[get("/services")]
pub async fn show_services(
    user: AdminUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match load_services(repo.get_ref(), &user) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, &user, "services");
            context.insert("services", &data.services);
            render_template(&tera, "services/index.html", &context)
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Insufficient permissions.").send();
            redirect("/login")
        }
        Err(err) => {
            log::error!("Failed to list services: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/services/add")]
pub async fn add_service(
    user: AdminUser,
    repo: web::Data<DieselRepository>,
    form: web::Form<AddServiceForm>,
) -> impl Responder {
    match create_service(repo.get_ref(), &user, form.into_inner()) {
        Ok(service) => {
            FlashMessage::success(format!("Service \u{201c}{}\u{201d} added.", service.name))
                .send();
            redirect("/services")
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Insufficient permissions.").send();
            redirect("/login")
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
            redirect("/services")
        }
        Err(err) => {
            log::error!("Failed to create service: {err}");
            FlashMessage::error("Could not add the service.").send();
            redirect("/services")
        }
    }
}

#[post("/services/edit")]
pub async fn edit_service(
    user: AdminUser,
    repo: web::Data<DieselRepository>,
    form: web::Form<EditServiceForm>,
) -> impl Responder {
    match modify_service(repo.get_ref(), &user, form.into_inner()) {
        Ok(service) => {
            FlashMessage::success(format!("Service \u{201c}{}\u{201d} updated.", service.name))
                .send();
            redirect("/services")
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Insufficient permissions.").send();
            redirect("/login")
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Service was not found.").send();
            redirect("/services")
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
            redirect("/services")
        }
        Err(err) => {
            log::error!("Failed to update service: {err}");
            FlashMessage::error("Could not update the service.").send();
            redirect("/services")
        }
    }
}

#[post("/services/{service_id}/delete")]
pub async fn delete_service(
    path: web::Path<i32>,
    user: AdminUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let service_id = path.into_inner();

    match remove_service(repo.get_ref(), &user, service_id) {
        Ok(()) => {
            FlashMessage::success("Service deleted.").send();
            redirect("/services")
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Insufficient permissions.").send();
            redirect("/login")
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Service was not found or already deleted.").send();
            redirect("/services")
        }
        Err(err) => {
            log::error!("Failed to delete service {service_id}: {err}");
            FlashMessage::error("Could not delete the service.").send();
            redirect("/services")
        }
    }
}
