//! Client for the employee REST backend.
//!
//! Services depend on the [`EmployeeReader`] and [`EmployeeWriter`]
//! traits; the HTTP implementation lives in [`rest`], and a mockall
//! variant in [`mock`] backs the tests.

use async_trait::async_trait;

use crate::domain::employee::{Employee, NewEmployee, UpdateEmployee};
use crate::dto::page::EmployeePage;
use crate::pagination::DEFAULT_PAGE_SIZE;

pub mod errors;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;
pub mod rest;

pub use errors::{ApiError, ApiResult};

#[derive(Debug, Clone, PartialEq)]
pub struct Pagination {
    /// Zero-based page index, forwarded to the backend unclamped.
    pub page: usize,
    pub per_page: usize,
}

/// Parameters for a list or search request against the backend.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeListQuery {
    /// Name filter; the matching semantics belong to the backend.
    pub search: Option<String>,
    pub pagination: Pagination,
}

impl EmployeeListQuery {
    pub fn new() -> Self {
        Self {
            search: None,
            pagination: Pagination {
                page: 0,
                per_page: DEFAULT_PAGE_SIZE,
            },
        }
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Pagination { page, per_page };
        self
    }
}

impl Default for EmployeeListQuery {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
pub trait EmployeeReader: Send + Sync {
    /// Fetches one page of employees, filtered when the query carries a
    /// search term.
    async fn list_employees(&self, query: EmployeeListQuery) -> ApiResult<EmployeePage>;
    async fn get_employee(&self, employee_id: i64) -> ApiResult<Employee>;
}

#[async_trait]
pub trait EmployeeWriter: Send + Sync {
    async fn create_employee(&self, new_employee: &NewEmployee) -> ApiResult<Employee>;
    async fn update_employee(
        &self,
        employee_id: i64,
        updates: &UpdateEmployee,
    ) -> ApiResult<Employee>;
    async fn delete_employee(&self, employee_id: i64) -> ApiResult<()>;
}

/// Full backend surface, used where routes hold a single trait object.
pub trait EmployeeApi: EmployeeReader + EmployeeWriter {}

impl<T> EmployeeApi for T where T: EmployeeReader + EmployeeWriter {}
