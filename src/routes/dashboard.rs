use actix_web::{Responder, get, web};
use actix_web_flash_messages::IncomingFlashMessages;
use serde::Deserialize;
use tera::Tera;

use crate::api::EmployeeApi;
use crate::dto::dashboard::{DashboardPageData, DashboardQuery};
use crate::pagination::Paginated;
use crate::routes::{base_context, collect_alerts, render_template};
use crate::services::dashboard as dashboard_service;

#[derive(Deserialize)]
struct DashboardQueryParams {
    q: Option<String>,
    page: Option<usize>,
}

#[get("/")]
pub async fn show_dashboard(
    params: web::Query<DashboardQueryParams>,
    api: web::Data<dyn EmployeeApi>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let params = params.into_inner();
    let page = params.page.unwrap_or(0);
    let query = DashboardQuery {
        search: params.q.clone(),
        page: params.page,
    };

    let mut alerts = collect_alerts(&flash_messages);

    // A failed fetch still renders a full page: alert plus empty table.
    let data = match dashboard_service::load_dashboard(api.get_ref(), query).await {
        Ok(data) => data,
        Err(err) => {
            log::error!("Failed to load dashboard: {err}");
            alerts.push((
                "Error fetching employee data. Please try again.".to_string(),
                "danger",
            ));
            // Keep the typed query in the search box.
            DashboardPageData {
                employees: Paginated::empty(page),
                search_query: params.q,
            }
        }
    };

    let mut context = base_context(&alerts, "dashboard");
    context.insert("employees", &data.employees);
    if let Some(q) = &data.search_query {
        context.insert("search_query", q);
    }

    render_template(&tera, "main/index.html", &context)
}
