use std::sync::{Arc, Mutex};

use actix_web::cookie::Key;
use actix_web::http::{StatusCode, header};
use actix_web::{App, test, web};
use actix_web_flash_messages::storage::CookieMessageStore;
use actix_web_flash_messages::{FlashMessagesFramework, Level};
use async_trait::async_trait;
use tera::Tera;

use employee_admin::api::{
    ApiError, ApiResult, EmployeeApi, EmployeeListQuery, EmployeeReader, EmployeeWriter,
};
use employee_admin::domain::employee::{Employee, NewEmployee, UpdateEmployee};
use employee_admin::dto::page::EmployeePage;
use employee_admin::models::config::ServerConfig;
use employee_admin::routes::dashboard::show_dashboard;
use employee_admin::routes::employee::{
    add_employee, delete_employee, save_employee, show_add_employee, show_delete_employee,
    show_employee,
};
use employee_admin::routes::{alert_level_to_str, dashboard_url};
use employee_admin::services::delete::request_delete;

const SECRET: &str = "test-secret-test-secret-test-secret-test-secret-test-secret-test-secret";

/// Canned backend used to drive the handlers without a live REST API.
#[derive(Default)]
struct StubApi {
    /// `None` makes list requests fail with a transport error.
    page: Option<EmployeePage>,
    /// `None` makes get requests fail with a 404 status.
    employee: Option<Employee>,
    fail_writes: bool,
    deleted: Mutex<Vec<i64>>,
    list_queries: Mutex<Vec<EmployeeListQuery>>,
}

#[async_trait]
impl EmployeeReader for StubApi {
    async fn list_employees(&self, query: EmployeeListQuery) -> ApiResult<EmployeePage> {
        self.list_queries
            .lock()
            .expect("lock poisoned")
            .push(query);
        self.page
            .clone()
            .ok_or_else(|| ApiError::Transport("connection refused".to_string()))
    }

    async fn get_employee(&self, _employee_id: i64) -> ApiResult<Employee> {
        self.employee
            .clone()
            .ok_or(ApiError::Status(reqwest::StatusCode::NOT_FOUND))
    }
}

#[async_trait]
impl EmployeeWriter for StubApi {
    async fn create_employee(&self, new_employee: &NewEmployee) -> ApiResult<Employee> {
        if self.fail_writes {
            return Err(ApiError::Status(reqwest::StatusCode::INTERNAL_SERVER_ERROR));
        }
        Ok(Employee {
            id: 42,
            name: new_employee.name.clone(),
            email: new_employee.email.clone(),
            phone: new_employee.phone.clone(),
            department: new_employee.department.clone(),
        })
    }

    async fn update_employee(
        &self,
        employee_id: i64,
        updates: &UpdateEmployee,
    ) -> ApiResult<Employee> {
        if self.fail_writes {
            return Err(ApiError::Status(reqwest::StatusCode::INTERNAL_SERVER_ERROR));
        }
        Ok(Employee {
            id: employee_id,
            name: updates.name.clone(),
            email: updates.email.clone(),
            phone: updates.phone.clone(),
            department: updates.department.clone(),
        })
    }

    async fn delete_employee(&self, employee_id: i64) -> ApiResult<()> {
        if self.fail_writes {
            return Err(ApiError::Status(reqwest::StatusCode::INTERNAL_SERVER_ERROR));
        }
        self.deleted
            .lock()
            .expect("lock poisoned")
            .push(employee_id);
        Ok(())
    }
}

fn ann() -> Employee {
    Employee {
        id: 7,
        name: "Ann Lee".to_string(),
        email: "ann@example.com".to_string(),
        phone: "555-0100".to_string(),
        department: "Sales".to_string(),
    }
}

fn one_page_of_ann() -> EmployeePage {
    EmployeePage {
        content: vec![ann()],
        total_pages: 1,
    }
}

fn server_config() -> ServerConfig {
    ServerConfig {
        address: "127.0.0.1".to_string(),
        port: 0,
        templates_dir: "templates/**/*".to_string(),
        backend_url: "http://localhost:8080".to_string(),
        secret: SECRET.to_string(),
    }
}

macro_rules! test_app {
    ($api:expr) => {{
        let api: Arc<dyn EmployeeApi> = $api;
        let message_store = CookieMessageStore::builder(Key::from(SECRET.as_bytes())).build();
        let message_framework = FlashMessagesFramework::builder(message_store).build();
        let tera = Tera::new("templates/**/*").expect("templates should parse");
        test::init_service(
            App::new()
                .wrap(message_framework)
                .service(show_dashboard)
                .service(show_add_employee)
                .service(add_employee)
                .service(show_delete_employee)
                .service(delete_employee)
                .service(show_employee)
                .service(save_employee)
                .app_data(web::Data::new(tera))
                .app_data(web::Data::from(api))
                .app_data(web::Data::new(server_config())),
        )
        .await
    }};
}

async fn body_string(resp: actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>) -> String {
    let bytes = test::read_body(resp).await;
    String::from_utf8(bytes.to_vec()).expect("body should be utf-8")
}

#[actix_web::test]
async fn test_alert_level_to_str_mappings() {
    assert_eq!(alert_level_to_str(&Level::Error), "danger");
    assert_eq!(alert_level_to_str(&Level::Warning), "warning");
    assert_eq!(alert_level_to_str(&Level::Success), "success");
    assert_eq!(alert_level_to_str(&Level::Info), "info");
    assert_eq!(alert_level_to_str(&Level::Debug), "info");
}

#[actix_web::test]
async fn test_dashboard_url_round_trips_query_and_page() {
    assert_eq!(dashboard_url(None, 0), "/?page=0");
    assert_eq!(dashboard_url(Some("ann lee"), 2), "/?q=ann+lee&page=2");
}

#[actix_web::test]
async fn dashboard_renders_employee_rows() {
    let stub = Arc::new(StubApi {
        page: Some(one_page_of_ann()),
        ..StubApi::default()
    });
    let app = test_app!(stub.clone());

    let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_string(resp).await;
    assert!(body.contains("Ann Lee"));
    assert!(body.contains("ann@example.com"));
    assert!(!body.contains("No employees found"));

    let queries = stub.list_queries.lock().expect("lock poisoned");
    assert_eq!(queries.len(), 1);
    assert_eq!(queries[0].search, None);
    assert_eq!(queries[0].pagination.page, 0);
    assert_eq!(queries[0].pagination.per_page, 10);
}

#[actix_web::test]
async fn dashboard_search_issues_filtered_request() {
    // query="ann", page=0 must hit the search endpoint with size=10 and
    // render the single returned row with one active page control.
    let stub = Arc::new(StubApi {
        page: Some(one_page_of_ann()),
        ..StubApi::default()
    });
    let app = test_app!(stub.clone());

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/?q=ann&page=0").to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_string(resp).await;
    assert!(body.contains("Ann Lee"));
    assert!(body.contains("page-item active"));

    let queries = stub.list_queries.lock().expect("lock poisoned");
    assert_eq!(queries[0].search.as_deref(), Some("ann"));
    assert_eq!(queries[0].pagination.page, 0);
    assert_eq!(queries[0].pagination.per_page, 10);
}

#[actix_web::test]
async fn dashboard_fetch_is_idempotent_without_mutations() {
    let stub = Arc::new(StubApi {
        page: Some(one_page_of_ann()),
        ..StubApi::default()
    });
    let app = test_app!(stub.clone());

    let first = test::call_service(&app, test::TestRequest::get().uri("/?page=0").to_request()).await;
    let first = body_string(first).await;
    let second = test::call_service(&app, test::TestRequest::get().uri("/?page=0").to_request()).await;
    let second = body_string(second).await;

    assert_eq!(first, second);
}

#[actix_web::test]
async fn dashboard_failure_shows_alert_and_empty_table() {
    let stub = Arc::new(StubApi::default());
    let app = test_app!(stub);

    let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_string(resp).await;
    assert!(body.contains("Error fetching employee data. Please try again."));
    assert!(body.contains("No employees found"));
}

#[actix_web::test]
async fn dashboard_failure_keeps_the_typed_query_in_the_search_box() {
    let stub = Arc::new(StubApi::default());
    let app = test_app!(stub);

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/?q=ann&page=0").to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_string(resp).await;
    assert!(body.contains("Error fetching employee data. Please try again."));
    assert!(body.contains(r#"value="ann""#));
    assert!(body.contains("No employees found"));
}

#[actix_web::test]
async fn dashboard_empty_result_renders_placeholder_row() {
    let stub = Arc::new(StubApi {
        page: Some(EmployeePage::default()),
        ..StubApi::default()
    });
    let app = test_app!(stub);

    let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
    let body = body_string(resp).await;

    assert!(body.contains("No employees found"));
}

#[actix_web::test]
async fn add_form_marks_every_field_required() {
    let stub = Arc::new(StubApi::default());
    let app = test_app!(stub);

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/employee/add").to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_string(resp).await;
    assert_eq!(body.matches("required>").count(), 4);
}

#[actix_web::test]
async fn create_redirects_to_dashboard_on_success() {
    let stub = Arc::new(StubApi::default());
    let app = test_app!(stub);

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/employee/add")
            .set_form([
                ("name", "Ann Lee"),
                ("email", "ann@example.com"),
                ("phone", "555-0100"),
                ("department", "Sales"),
            ])
            .to_request(),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/");
}

#[actix_web::test]
async fn create_failure_keeps_the_draft_on_the_form() {
    let stub = Arc::new(StubApi {
        fail_writes: true,
        ..StubApi::default()
    });
    let app = test_app!(stub);

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/employee/add")
            .set_form([
                ("name", "Ann Lee"),
                ("email", "ann@example.com"),
                ("phone", "555-0100"),
                ("department", "Sales"),
            ])
            .to_request(),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_string(resp).await;
    assert!(body.contains(r#"value="Ann Lee""#));
    assert!(body.contains(r#"value="Sales""#));
}

#[actix_web::test]
async fn edit_form_is_prefilled_from_the_backend() {
    let stub = Arc::new(StubApi {
        employee: Some(ann()),
        ..StubApi::default()
    });
    let app = test_app!(stub);

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/employee/7").to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_string(resp).await;
    assert!(body.contains(r#"value="Ann Lee""#));
    assert!(body.contains(r#"value="ann@example.com""#));
    assert!(body.contains(r#"action="/employee/7""#));
}

#[actix_web::test]
async fn edit_load_failure_renders_an_empty_draft() {
    let stub = Arc::new(StubApi::default());
    let app = test_app!(stub);

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/employee/7").to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_string(resp).await;
    assert!(body.contains(r#"value="""#));
    // Degrades silently: no alert on the page.
    assert!(!body.contains("alert-danger"));
}

#[actix_web::test]
async fn update_redirects_to_dashboard_on_success() {
    let stub = Arc::new(StubApi {
        employee: Some(ann()),
        ..StubApi::default()
    });
    let app = test_app!(stub);

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/employee/7")
            .set_form([
                ("name", "Ann Lee"),
                ("email", "ann@example.com"),
                ("phone", "555-0100"),
                ("department", "Sales"),
            ])
            .to_request(),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/");
}

#[actix_web::test]
async fn delete_confirmation_page_carries_a_ticket() {
    let stub = Arc::new(StubApi::default());
    let app = test_app!(stub);

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/employee/7/delete?q=ann&page=1")
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_string(resp).await;
    assert!(body.contains("Are you sure you want to delete this employee?"));
    assert!(body.contains(r#"name="token""#));
    assert!(body.contains(r#"action="/employee/7/delete""#));
    assert!(body.contains(r#"name="q" value="ann""#));
    assert!(body.contains(r#"name="page" value="1""#));
}

#[actix_web::test]
async fn confirmed_delete_calls_the_backend_and_returns_to_the_page() {
    let stub = Arc::new(StubApi {
        page: Some(one_page_of_ann()),
        ..StubApi::default()
    });
    let app = test_app!(stub.clone());

    let ticket = request_delete(7, SECRET).expect("should issue ticket");

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/employee/7/delete")
            .set_form([
                ("token", ticket.token.as_str()),
                ("q", "ann"),
                ("page", "1"),
            ])
            .to_request(),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        resp.headers().get(header::LOCATION).unwrap(),
        "/?q=ann&page=1"
    );
    assert_eq!(*stub.deleted.lock().expect("lock poisoned"), vec![7]);
}

#[actix_web::test]
async fn delete_with_a_forged_token_leaves_the_record_alone() {
    let stub = Arc::new(StubApi::default());
    let app = test_app!(stub.clone());

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/employee/7/delete")
            .set_form([("token", "not-a-ticket"), ("page", "0")])
            .to_request(),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/?page=0");
    assert!(stub.deleted.lock().expect("lock poisoned").is_empty());
}
