//! reqwest-backed implementation of the employee backend client.

use async_trait::async_trait;

use crate::api::{ApiError, ApiResult, EmployeeListQuery, EmployeeReader, EmployeeWriter};
use crate::domain::employee::{Employee, NewEmployee, UpdateEmployee};
use crate::dto::page::EmployeePage;

#[derive(Clone)]
pub struct RestEmployeeApi {
    client: reqwest::Client,
    base_url: String,
}

impl RestEmployeeApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Non-2xx responses become [`ApiError::Status`]; no distinction is
    /// made between status codes beyond that.
    fn check_status(response: reqwest::Response) -> ApiResult<reqwest::Response> {
        if response.status().is_success() {
            Ok(response)
        } else {
            Err(ApiError::Status(response.status()))
        }
    }
}

#[async_trait]
impl EmployeeReader for RestEmployeeApi {
    async fn list_employees(&self, query: EmployeeListQuery) -> ApiResult<EmployeePage> {
        let request = match &query.search {
            Some(name) => self
                .client
                .get(self.url("/api/employees/search"))
                .query(&[("name", name.as_str())]),
            None => self.client.get(self.url("/api/employees")),
        };

        let response = request
            .query(&[
                ("page", query.pagination.page.to_string()),
                ("size", query.pagination.per_page.to_string()),
            ])
            .send()
            .await?;
        let response = Self::check_status(response)?;

        // An unexpected payload shape degrades to an empty page rather
        // than an error the user would see.
        let body = response.text().await?;
        match serde_json::from_str::<EmployeePage>(&body) {
            Ok(page) => Ok(page),
            Err(err) => {
                log::warn!("Unexpected employee page payload: {err}");
                Ok(EmployeePage::default())
            }
        }
    }

    async fn get_employee(&self, employee_id: i64) -> ApiResult<Employee> {
        let response = self
            .client
            .get(self.url(&format!("/api/employee/{employee_id}")))
            .send()
            .await?;

        Ok(Self::check_status(response)?.json().await?)
    }
}

#[async_trait]
impl EmployeeWriter for RestEmployeeApi {
    async fn create_employee(&self, new_employee: &NewEmployee) -> ApiResult<Employee> {
        let response = self
            .client
            .post(self.url("/api/employees"))
            .json(new_employee)
            .send()
            .await?;

        Ok(Self::check_status(response)?.json().await?)
    }

    async fn update_employee(
        &self,
        employee_id: i64,
        updates: &UpdateEmployee,
    ) -> ApiResult<Employee> {
        let response = self
            .client
            .patch(self.url(&format!("/api/employee/{employee_id}")))
            .json(updates)
            .send()
            .await?;

        Ok(Self::check_status(response)?.json().await?)
    }

    async fn delete_employee(&self, employee_id: i64) -> ApiResult<()> {
        let response = self
            .client
            .delete(self.url(&format!("/api/employee/{employee_id}")))
            .send()
            .await?;

        Self::check_status(response)?;
        Ok(())
    }
}
