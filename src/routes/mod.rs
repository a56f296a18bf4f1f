use actix_web::http::header;
use actix_web::http::header::ContentType;
use actix_web::HttpResponse;
use actix_web_flash_messages::{IncomingFlashMessages, Level};
use serde::Serialize;
use tera::{Context, Tera};

use crate::auth::AdminUser;

pub mod api;
pub mod auth;
pub mod branches;
pub mod categories;
pub mod dashboard;
pub mod menu;
pub mod offers;
pub mod orders;
pub mod services;
pub mod settings;
pub mod users;

/// One-shot operator feedback rendered at the top of every screen.
#[derive(Debug, Serialize)]
pub struct Alert {
    pub level: &'static str,
    pub message: String,
}

/// Issues a `303 See Other` redirect to `location`.
pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// Renders `name` with `context`, logging and masking template failures.
pub fn render_template(tera: &Tera, name: &str, context: &Context) -> HttpResponse {
    match tera.render(name, context) {
        Ok(body) => HttpResponse::Ok()
            .content_type(ContentType::html())
            .body(body),
        Err(err) => {
            log::error!("Failed to render template {name}: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// Builds the context shared by every authenticated screen.
pub fn base_context(
    flash_messages: &IncomingFlashMessages,
    user: &AdminUser,
    active_page: &str,
) -> Context {
    let mut context = anonymous_context(flash_messages);
    context.insert("current_user", user);
    context.insert("current_page", active_page);
    context
}

/// Builds the context for screens rendered before login.
pub fn anonymous_context(flash_messages: &IncomingFlashMessages) -> Context {
    let alerts: Vec<Alert> = flash_messages
        .iter()
        .map(|message| Alert {
            level: alert_level_to_str(message.level()),
            message: message.content().to_string(),
        })
        .collect();

    let mut context = Context::new();
    context.insert("alerts", &alerts);
    context.insert("current_user", &serde_json::Value::Null);
    context
}

fn alert_level_to_str(level: Level) -> &'static str {
    match level {
        Level::Success => "success",
        Level::Warning => "warning",
        Level::Error => "danger",
        _ => "info",
    }
}
