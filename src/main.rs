use std::env;

use actix_files::Files;
use actix_identity::IdentityMiddleware;
use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::Key;
use actix_web::{App, HttpServer, middleware, web};
use actix_web_flash_messages::{FlashMessagesFramework, storage::CookieMessageStore};
use dotenvy::dotenv;
use tera::Tera;

use resto_admin::auth::middleware::RedirectUnauthorized;
use resto_admin::db::establish_connection_pool;
use resto_admin::repository::DieselRepository;
use resto_admin::routes::api::{api_v1_orders, api_v1_stats};
use resto_admin::routes::auth::{logout, process_login, show_login};
use resto_admin::routes::branches::{add_branch, delete_branch, edit_branch, show_branches};
use resto_admin::routes::categories::{
    add_category, delete_category, edit_category, show_categories,
};
use resto_admin::routes::dashboard::show_dashboard;
use resto_admin::routes::menu::{
    add_menu_item, delete_menu_item, edit_menu_item, show_menu, upload_menu_items,
};
use resto_admin::routes::offers::{add_offer, delete_offer, edit_offer, show_offers};
use resto_admin::routes::orders::{show_order, show_orders, update_order_status};
use resto_admin::routes::services::{add_service, delete_service, edit_service, show_services};
use resto_admin::routes::settings::{show_settings, update_settings};
use resto_admin::routes::users::{show_users, update_rewards};
use resto_admin::services::auth::AdminCredentials;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
    dotenv().ok(); // Load .env file

    let database_url = env::var("DATABASE_URL").unwrap_or("app.db".to_string());
    let port = env::var("PORT").unwrap_or("8080".to_string());
    let port = port.parse::<u16>().unwrap_or(8080);
    let address = env::var("ADDRESS").unwrap_or("127.0.0.1".to_string());

    let secret = env::var("SECRET_KEY");
    let secret_key = match &secret {
        Ok(key) => Key::from(key.as_bytes()),
        Err(_) => Key::generate(),
    };

    let admin_email = match env::var("ADMIN_EMAIL") {
        Ok(admin_email) => admin_email,
        Err(_) => {
            log::error!("ADMIN_EMAIL environment variable not set");
            std::process::exit(1);
        }
    };
    let admin_password = match env::var("ADMIN_PASSWORD") {
        Ok(admin_password) => admin_password,
        Err(_) => {
            log::error!("ADMIN_PASSWORD environment variable not set");
            std::process::exit(1);
        }
    };
    let credentials = AdminCredentials::new(admin_email, admin_password);

    let pool = match establish_connection_pool(&database_url) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to establish database connection: {e}");
            std::process::exit(1);
        }
    };
    let repo = DieselRepository::new(pool);

    let message_store = CookieMessageStore::builder(secret_key.clone()).build();
    let message_framework = FlashMessagesFramework::builder(message_store).build();

    let tera = match Tera::new("templates/**/*") {
        Ok(t) => t,
        Err(e) => {
            log::error!("Parsing error(s): {e}");
            std::process::exit(1);
        }
    };

    HttpServer::new(move || {
        App::new()
            .wrap(message_framework.clone())
            .wrap(IdentityMiddleware::default())
            .wrap(
                SessionMiddleware::builder(CookieSessionStore::default(), secret_key.clone())
                    .cookie_secure(false) // set to true in prod
                    .build(),
            )
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(Files::new("/assets", "./assets"))
            .service(show_login)
            .service(process_login)
            .service(
                web::scope("")
                    .wrap(RedirectUnauthorized)
                    .service(show_dashboard)
                    .service(show_orders)
                    .service(show_order)
                    .service(update_order_status)
                    .service(show_menu)
                    .service(add_menu_item)
                    .service(edit_menu_item)
                    .service(delete_menu_item)
                    .service(upload_menu_items)
                    .service(show_categories)
                    .service(add_category)
                    .service(edit_category)
                    .service(delete_category)
                    .service(show_users)
                    .service(update_rewards)
                    .service(show_branches)
                    .service(add_branch)
                    .service(edit_branch)
                    .service(delete_branch)
                    .service(show_services)
                    .service(add_service)
                    .service(edit_service)
                    .service(delete_service)
                    .service(show_offers)
                    .service(add_offer)
                    .service(edit_offer)
                    .service(delete_offer)
                    .service(show_settings)
                    .service(update_settings)
                    .service(web::scope("/api").service(api_v1_stats).service(api_v1_orders))
                    .service(logout),
            )
            .app_data(web::Data::new(tera.clone()))
            .app_data(web::Data::new(repo.clone()))
            .app_data(web::Data::new(credentials.clone()))
    })
    .bind((address, port))?
    .run()
    .await
}
