use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use serde::Deserialize;
use tera::Tera;

use crate::api::EmployeeApi;
use crate::domain::employee::{NewEmployee, UpdateEmployee};
use crate::forms::employee::{AddEmployeeForm, DeleteEmployeeForm, UpdateEmployeeForm};
use crate::models::config::ServerConfig;
use crate::routes::{base_context, collect_alerts, dashboard_url, redirect, render_template};
use crate::services::delete as delete_service;
use crate::services::employee as employee_service;

#[get("/employee/add")]
pub async fn show_add_employee(
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let mut context = base_context(&collect_alerts(&flash_messages), "add_employee");
    context.insert("draft", &NewEmployee::default());

    render_template(&tera, "employee/add.html", &context)
}

#[post("/employee/add")]
pub async fn add_employee(
    api: web::Data<dyn EmployeeApi>,
    tera: web::Data<Tera>,
    web::Form(form): web::Form<AddEmployeeForm>,
) -> impl Responder {
    match employee_service::create_employee(api.get_ref(), &form).await {
        Ok(employee) => {
            log::info!("Employee {} created", employee.id);
            FlashMessage::success("Employee created.".to_string()).send();
            redirect("/")
        }
        Err(err) => {
            // Log-only failure; the draft stays on the form.
            log::error!("Failed to create employee: {err}");
            let mut context = base_context(&[], "add_employee");
            context.insert("draft", &NewEmployee::from(&form));
            render_template(&tera, "employee/add.html", &context)
        }
    }
}

#[get("/employee/{employee_id}")]
pub async fn show_employee(
    employee_id: web::Path<i64>,
    api: web::Data<dyn EmployeeApi>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let employee_id = employee_id.into_inner();

    let draft = match employee_service::load_employee_draft(api.get_ref(), employee_id).await {
        Ok(draft) => draft,
        Err(err) => {
            // Silent degradation: the form opens with empty fields.
            log::error!("Failed to load employee {employee_id}: {err}");
            UpdateEmployee::default()
        }
    };

    let mut context = base_context(&collect_alerts(&flash_messages), "edit_employee");
    context.insert("employee_id", &employee_id);
    context.insert("draft", &draft);

    render_template(&tera, "employee/edit.html", &context)
}

#[post("/employee/{employee_id}")]
pub async fn save_employee(
    employee_id: web::Path<i64>,
    api: web::Data<dyn EmployeeApi>,
    tera: web::Data<Tera>,
    web::Form(form): web::Form<UpdateEmployeeForm>,
) -> impl Responder {
    let employee_id = employee_id.into_inner();

    match employee_service::update_employee(api.get_ref(), employee_id, &form).await {
        Ok(_) => {
            FlashMessage::success("Employee updated.".to_string()).send();
            redirect("/")
        }
        Err(err) => {
            log::error!("Failed to update employee {employee_id}: {err}");
            let mut context = base_context(&[], "edit_employee");
            context.insert("employee_id", &employee_id);
            context.insert("draft", &UpdateEmployee::from(&form));
            render_template(&tera, "employee/edit.html", &context)
        }
    }
}

#[derive(Deserialize)]
struct DeleteQueryParams {
    q: Option<String>,
    page: Option<usize>,
}

#[get("/employee/{employee_id}/delete")]
pub async fn show_delete_employee(
    employee_id: web::Path<i64>,
    params: web::Query<DeleteQueryParams>,
    server_config: web::Data<ServerConfig>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let employee_id = employee_id.into_inner();
    let params = params.into_inner();

    let ticket = match delete_service::request_delete(employee_id, &server_config.secret) {
        Ok(ticket) => ticket,
        Err(err) => {
            log::error!("Failed to prepare delete confirmation for {employee_id}: {err}");
            FlashMessage::error("Failed to delete employee. Please try again.".to_string()).send();
            return redirect(&dashboard_url(
                params.q.as_deref(),
                params.page.unwrap_or(0),
            ));
        }
    };

    let mut context = base_context(&collect_alerts(&flash_messages), "dashboard");
    context.insert("ticket", &ticket);
    context.insert("return_q", &params.q);
    context.insert("return_page", &params.page.unwrap_or(0));

    render_template(&tera, "employee/delete.html", &context)
}

#[post("/employee/{employee_id}/delete")]
pub async fn delete_employee(
    employee_id: web::Path<i64>,
    api: web::Data<dyn EmployeeApi>,
    server_config: web::Data<ServerConfig>,
    web::Form(form): web::Form<DeleteEmployeeForm>,
) -> impl Responder {
    let employee_id = employee_id.into_inner();
    let return_url = dashboard_url(form.q.as_deref(), form.page.unwrap_or(0));

    match delete_service::confirm_delete(
        api.get_ref(),
        employee_id,
        &form.token,
        &server_config.secret,
    )
    .await
    {
        Ok(()) => {
            FlashMessage::success("Employee deleted.".to_string()).send();
        }
        Err(err) => {
            log::error!("Failed to delete employee {employee_id}: {err}");
            FlashMessage::error("Failed to delete employee. Please try again.".to_string()).send();
        }
    }

    // Either way the dashboard re-runs the same (query, page) fetch.
    redirect(&return_url)
}
