use actix_multipart::form::MultipartForm;
use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::auth::AdminUser;
use crate::forms::menu::{AddMenuItemForm, EditMenuItemForm, UploadMenuItemsForm};
use crate::repository::DieselRepository;
use crate::routes::{base_context, redirect, render_template};
use crate::services::ServiceError;
use crate::services::menu::{
    MenuQuery, create_menu_item, import_menu_items, load_menu_page, modify_menu_item,
    remove_menu_item,
};

#[get("/menu")]
pub async fn show_menu(
    params: web::Query<MenuQuery>,
    user: AdminUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match load_menu_page(repo.get_ref(), &user, params.0) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, &user, "menu");
            context.insert("items", &data.items);
            context.insert("categories", &data.categories);
            context.insert("search", data.search.as_deref().unwrap_or(""));
            context.insert("category_id", &data.category_id.unwrap_or(0));
            render_template(&tera, "menu/index.html", &context)
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Insufficient permissions.").send();
            redirect("/login")
        }
        Err(err) => {
            log::error!("Failed to list menu items: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/menu/add")]
pub async fn add_menu_item(
    user: AdminUser,
    repo: web::Data<DieselRepository>,
    form: web::Form<AddMenuItemForm>,
) -> impl Responder {
    match create_menu_item(repo.get_ref(), &user, form.into_inner()) {
        Ok(item) => {
            FlashMessage::success(format!("Menu item \u{201c}{}\u{201d} added.", item.name)).send();
            redirect("/menu")
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Insufficient permissions.").send();
            redirect("/login")
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Selected category no longer exists.").send();
            redirect("/menu")
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
            redirect("/menu")
        }
        Err(err) => {
            log::error!("Failed to create menu item: {err}");
            FlashMessage::error("Could not add the menu item.").send();
            redirect("/menu")
        }
    }
}

#[post("/menu/edit")]
pub async fn edit_menu_item(
    user: AdminUser,
    repo: web::Data<DieselRepository>,
    form: web::Form<EditMenuItemForm>,
) -> impl Responder {
    match modify_menu_item(repo.get_ref(), &user, form.into_inner()) {
        Ok(item) => {
            FlashMessage::success(format!("Menu item \u{201c}{}\u{201d} updated.", item.name))
                .send();
            redirect("/menu")
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Insufficient permissions.").send();
            redirect("/login")
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Menu item or category no longer exists.").send();
            redirect("/menu")
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
            redirect("/menu")
        }
        Err(err) => {
            log::error!("Failed to update menu item: {err}");
            FlashMessage::error("Could not update the menu item.").send();
            redirect("/menu")
        }
    }
}

#[post("/menu/{item_id}/delete")]
pub async fn delete_menu_item(
    path: web::Path<i32>,
    user: AdminUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let item_id = path.into_inner();

    match remove_menu_item(repo.get_ref(), &user, item_id) {
        Ok(()) => {
            FlashMessage::success("Menu item deleted.").send();
            redirect("/menu")
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Insufficient permissions.").send();
            redirect("/login")
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Menu item was not found or already deleted.").send();
            redirect("/menu")
        }
        Err(err) => {
            log::error!("Failed to delete menu item {item_id}: {err}");
            FlashMessage::error("Could not delete the menu item.").send();
            redirect("/menu")
        }
    }
}

#[post("/menu/upload")]
pub async fn upload_menu_items(
    user: AdminUser,
    repo: web::Data<DieselRepository>,
    MultipartForm(form): MultipartForm<UploadMenuItemsForm>,
) -> impl Responder {
    match import_menu_items(repo.get_ref(), &user, form) {
        Ok(created) => {
            FlashMessage::success(format!("Imported {created} menu items.")).send();
            redirect("/menu")
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Insufficient permissions.").send();
            redirect("/login")
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
            redirect("/menu")
        }
        Err(err) => {
            log::error!("Failed to import menu items: {err}");
            FlashMessage::error("Could not import the menu items.").send();
            redirect("/menu")
        }
    }
}
