//! Mock API client for isolating services in tests.

use async_trait::async_trait;
use mockall::mock;

use crate::api::errors::ApiResult;
use crate::api::{EmployeeListQuery, EmployeeReader, EmployeeWriter};
use crate::domain::employee::{Employee, NewEmployee, UpdateEmployee};
use crate::dto::page::EmployeePage;

mock! {
    pub EmployeeBackend {}

    #[async_trait]
    impl EmployeeReader for EmployeeBackend {
        async fn list_employees(&self, query: EmployeeListQuery) -> ApiResult<EmployeePage>;
        async fn get_employee(&self, employee_id: i64) -> ApiResult<Employee>;
    }

    #[async_trait]
    impl EmployeeWriter for EmployeeBackend {
        async fn create_employee(&self, new_employee: &NewEmployee) -> ApiResult<Employee>;
        async fn update_employee(
            &self,
            employee_id: i64,
            updates: &UpdateEmployee,
        ) -> ApiResult<Employee>;
        async fn delete_employee(&self, employee_id: i64) -> ApiResult<()>;
    }
}
