use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::auth::AdminUser;
use crate::forms::offers::{AddOfferForm, EditOfferForm};
use crate::repository::DieselRepository;
use crate::routes::{base_context, redirect, render_template};
use crate::services::ServiceError;
use crate::services::offers::{create_offer, load_offers, modify_offer, remove_offer};

#[get("/offers")]
pub async fn show_offers(
    user: AdminUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match load_offers(repo.get_ref(), &user) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, &user, "offers");
            context.insert("offers", &data.offers);
            render_template(&tera, "offers/index.html", &context)
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Insufficient permissions.").send();
            redirect("/login")
        }
        Err(err) => {
            log::error!("Failed to list offers: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/offers/add")]
pub async fn add_offer(
    user: AdminUser,
    repo: web::Data<DieselRepository>,
    form: web::Form<AddOfferForm>,
) -> impl Responder {
    match create_offer(repo.get_ref(), &user, form.into_inner()) {
        Ok(offer) => {
            FlashMessage::success(format!("Offer \u{201c}{}\u{201d} added.", offer.title)).send();
            redirect("/offers")
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Insufficient permissions.").send();
            redirect("/login")
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
            redirect("/offers")
        }
        Err(err) => {
            log::error!("Failed to create offer: {err}");
            FlashMessage::error("Could not add the offer.").send();
            redirect("/offers")
        }
    }
}

#[post("/offers/edit")]
pub async fn edit_offer(
    user: AdminUser,
    repo: web::Data<DieselRepository>,
    form: web::Form<EditOfferForm>,
) -> impl Responder {
    match modify_offer(repo.get_ref(), &user, form.into_inner()) {
        Ok(offer) => {
            FlashMessage::success(format!("Offer \u{201c}{}\u{201d} updated.", offer.title)).send();
            redirect("/offers")
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Insufficient permissions.").send();
            redirect("/login")
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Offer was not found.").send();
            redirect("/offers")
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
            redirect("/offers")
        }
        Err(err) => {
            log::error!("Failed to update offer: {err}");
            FlashMessage::error("Could not update the offer.").send();
            redirect("/offers")
        }
    }
}

#[post("/offers/{offer_id}/delete")]
pub async fn delete_offer(
    path: web::Path<i32>,
    user: AdminUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let offer_id = path.into_inner();

    match remove_offer(repo.get_ref(), &user, offer_id) {
        Ok(()) => {
            FlashMessage::success("Offer deleted.").send();
            redirect("/offers")
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Insufficient permissions.").send();
            redirect("/login")
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Offer was not found or already deleted.").send();
            redirect("/offers")
        }
        Err(err) => {
            log::error!("Failed to delete offer {offer_id}: {err}");
            FlashMessage::error("Could not delete the offer.").send();
            redirect("/offers")
        }
    }
}
