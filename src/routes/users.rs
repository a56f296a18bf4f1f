use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::auth::AdminUser;
use crate::forms::rewards::UpdateRewardsForm;
use crate::repository::DieselRepository;
use crate::routes::{base_context, redirect, render_template};
use crate::services::ServiceError;
use crate::services::users::{UsersQuery, load_users_page, update_user_rewards};

#[get("/users")]
pub async fn show_users(
    params: web::Query<UsersQuery>,
    user: AdminUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match load_users_page(repo.get_ref(), &user, params.0) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, &user, "users");
            context.insert("users", &data.users);
            context.insert("search", data.search.as_deref().unwrap_or(""));
            render_template(&tera, "users/index.html", &context)
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Insufficient permissions.").send();
            redirect("/login")
        }
        Err(err) => {
            log::error!("Failed to list users: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/users/{user_id}/rewards")]
pub async fn update_rewards(
    path: web::Path<i32>,
    user: AdminUser,
    repo: web::Data<DieselRepository>,
    form: web::Form<UpdateRewardsForm>,
) -> impl Responder {
    let user_id = path.into_inner();

    match update_user_rewards(repo.get_ref(), &user, user_id, form.into_inner()) {
        Ok(reward) => {
            FlashMessage::success(format!(
                "Rewards saved: {} points, {} tier.",
                reward.points,
                reward.tier.as_str()
            ))
            .send();
            redirect("/users")
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Insufficient permissions.").send();
            redirect("/login")
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Customer was not found.").send();
            redirect("/users")
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
            redirect("/users")
        }
        Err(err) => {
            log::error!("Failed to update rewards for user {user_id}: {err}");
            FlashMessage::error("Could not update the rewards.").send();
            redirect("/users")
        }
    }
}
