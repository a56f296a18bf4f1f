use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::auth::AdminUser;
use crate::forms::branches::{AddBranchForm, EditBranchForm};
use crate::repository::DieselRepository;
use crate::routes::{base_context, redirect, render_template};
use crate::services::ServiceError;
use crate::services::branches::{create_branch, load_branches, modify_branch, remove_branch};

#[get("/branches")]
pub async fn show_branches(
    user: AdminUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match load_branches(repo.get_ref(), &user) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, &user, "branches");
            context.insert("branches", &data.branches);
            render_template(&tera, "branches/index.html", &context)
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Insufficient permissions.").send();
            redirect("/login")
        }
        Err(err) => {
            log::error!("Failed to list branches: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/branches/add")]
pub async fn add_branch(
    user: AdminUser,
    repo: web::Data<DieselRepository>,
    form: web::Form<AddBranchForm>,
) -> impl Responder {
    match create_branch(repo.get_ref(), &user, form.into_inner()) {
        Ok(branch) => {
            FlashMessage::success(format!("Branch \u{201c}{}\u{201d} added.", branch.name)).send();
            redirect("/branches")
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Insufficient permissions.").send();
            redirect("/login")
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
            redirect("/branches")
        }
        Err(err) => {
            log::error!("Failed to create branch: {err}");
            FlashMessage::error("Could not add the branch.").send();
            redirect("/branches")
        }
    }
}

#[post("/branches/edit")]
pub async fn edit_branch(
    user: AdminUser,
    repo: web::Data<DieselRepository>,
    form: web::Form<EditBranchForm>,
) -> impl Responder {
    match modify_branch(repo.get_ref(), &user, form.into_inner()) {
        Ok(branch) => {
            FlashMessage::success(format!("Branch \u{201c}{}\u{201d} updated.", branch.name))
                .send();
            redirect("/branches")
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Insufficient permissions.").send();
            redirect("/login")
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Branch was not found.").send();
            redirect("/branches")
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
            redirect("/branches")
        }
        Err(err) => {
            log::error!("Failed to update branch: {err}");
            FlashMessage::error("Could not update the branch.").send();
            redirect("/branches")
        }
    }
}

#[post("/branches/{branch_id}/delete")]
pub async fn delete_branch(
    path: web::Path<i32>,
    user: AdminUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let branch_id = path.into_inner();

    match remove_branch(repo.get_ref(), &user, branch_id) {
        Ok(()) => {
            FlashMessage::success("Branch deleted.").send();
            redirect("/branches")
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Insufficient permissions.").send();
            redirect("/login")
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Branch was not found or already deleted.").send();
            redirect("/branches")
        }
        Err(err) => {
            log::error!("Failed to delete branch {branch_id}: {err}");
            FlashMessage::error("Could not delete the branch.").send();
            redirect("/branches")
        }
    }
}
