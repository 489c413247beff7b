//! HTTP handlers and the small helpers they share.

use actix_web::HttpResponse;
use actix_web::http::header;
use actix_web_flash_messages::{IncomingFlashMessages, Level};
use serde::Serialize;
use tera::{Context, Tera};

pub mod dashboard;
pub mod employee;

/// Alert text paired with a Bootstrap contextual class.
pub type Alert = (String, &'static str);

pub fn alert_level_to_str(level: &Level) -> &'static str {
    match level {
        Level::Error => "danger",
        Level::Warning => "warning",
        Level::Success => "success",
        _ => "info",
    }
}

pub fn collect_alerts(flash_messages: &IncomingFlashMessages) -> Vec<Alert> {
    flash_messages
        .iter()
        .map(|f| (f.content().to_string(), alert_level_to_str(&f.level())))
        .collect()
}

/// Context pre-populated with what every template expects.
pub fn base_context(alerts: &[Alert], current_page: &str) -> Context {
    let mut context = Context::new();
    context.insert("alerts", alerts);
    context.insert("current_page", current_page);
    context
}

pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    match tera.render(template, context) {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(err) => {
            log::error!("Failed to render template {template}: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// Rebuilds the dashboard URL for a `(query, page)` pair so post-delete
/// redirects land back on the page the user was looking at.
pub fn dashboard_url(search: Option<&str>, page: usize) -> String {
    #[derive(Serialize)]
    struct Params<'a> {
        #[serde(skip_serializing_if = "Option::is_none")]
        q: Option<&'a str>,
        page: usize,
    }

    match serde_html_form::to_string(Params { q: search, page }) {
        Ok(query_string) => format!("/?{query_string}"),
        Err(err) => {
            log::error!("Failed to encode dashboard query: {err}");
            "/".to_string()
        }
    }
}
