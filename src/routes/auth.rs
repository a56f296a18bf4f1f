use actix_identity::Identity;
use actix_web::{HttpMessage, HttpRequest, HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::auth::AdminUser;
use crate::forms::auth::LoginForm;
use crate::routes::{anonymous_context, redirect, render_template};
use crate::services::ServiceError;
use crate::services::auth::{AdminCredentials, authenticate};

#[get("/login")]
pub async fn show_login(
    user: Option<AdminUser>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    if user.is_some() {
        return redirect("/");
    }

    let context = anonymous_context(&flash_messages);
    render_template(&tera, "auth/login.html", &context)
}

#[post("/login")]
pub async fn process_login(
    req: HttpRequest,
    credentials: web::Data<AdminCredentials>,
    form: web::Form<LoginForm>,
) -> impl Responder {
    match authenticate(credentials.get_ref(), form.into_inner()) {
        Ok(user) => {
            let payload = match serde_json::to_string(&user) {
                Ok(payload) => payload,
                Err(err) => {
                    log::error!("Failed to serialize identity: {err}");
                    return HttpResponse::InternalServerError().finish();
                }
            };

            if let Err(err) = Identity::login(&req.extensions(), payload) {
                log::error!("Failed to establish session: {err}");
                return HttpResponse::InternalServerError().finish();
            }

            redirect("/")
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Invalid email or password.").send();
            redirect("/login")
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
            redirect("/login")
        }
        Err(err) => {
            log::error!("Failed to process login: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/logout")]
pub async fn logout(identity: Option<Identity>) -> impl Responder {
    if let Some(identity) = identity {
        identity.logout();
    }

    redirect("/login")
}
