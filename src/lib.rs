use std::sync::Arc;

use actix_files::Files;
use actix_web::cookie::Key;
use actix_web::{App, HttpServer, middleware, web};
use actix_web_flash_messages::{FlashMessagesFramework, storage::CookieMessageStore};
use tera::Tera;

use crate::api::EmployeeApi;
use crate::api::rest::RestEmployeeApi;
use crate::models::config::ServerConfig;
use crate::routes::dashboard::show_dashboard;
use crate::routes::employee::{
    add_employee, delete_employee, save_employee, show_add_employee, show_delete_employee,
    show_employee,
};

pub mod api;
pub mod domain;
pub mod dto;
pub mod forms;
pub mod models;
pub mod pagination;
pub mod routes;
pub mod services;

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    let api: Arc<dyn EmployeeApi> =
        Arc::new(RestEmployeeApi::new(server_config.backend_url.clone()));

    // Key and store for flash messages.
    let secret_key = Key::from(server_config.secret.as_bytes());
    let message_store = CookieMessageStore::builder(secret_key).build();
    let message_framework = FlashMessagesFramework::builder(message_store).build();

    let tera = Tera::new(&server_config.templates_dir)
        .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;

    let bind_address = (server_config.address.clone(), server_config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(message_framework.clone())
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(Files::new("/assets", "./assets"))
            .service(show_dashboard)
            // Literal routes must come before /employee/{employee_id}.
            .service(show_add_employee)
            .service(add_employee)
            .service(show_delete_employee)
            .service(delete_employee)
            .service(show_employee)
            .service(save_employee)
            .app_data(web::Data::new(tera.clone()))
            .app_data(web::Data::from(api.clone()))
            .app_data(web::Data::new(server_config.clone()))
    })
    .bind(bind_address)?
    .run()
    .await
}
