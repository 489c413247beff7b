use validator::Validate;

use crate::api::{EmployeeReader, EmployeeWriter};
use crate::domain::employee::{Employee, NewEmployee, UpdateEmployee};
use crate::forms::employee::{AddEmployeeForm, UpdateEmployeeForm};
use crate::services::{ServiceError, ServiceResult};

/// Validates the add-employee form and posts the draft to the backend.
/// Navigation on success is the caller's concern.
pub async fn create_employee<A>(api: &A, form: &AddEmployeeForm) -> ServiceResult<Employee>
where
    A: EmployeeWriter + ?Sized,
{
    form.validate().map_err(|err| {
        log::error!("Failed to validate form: {err}");
        ServiceError::Form(err.to_string())
    })?;

    let new_employee = NewEmployee::from(form);

    api.create_employee(&new_employee).await.map_err(|err| {
        log::error!("Failed to create employee: {err}");
        ServiceError::from(err)
    })
}

/// Fetches an employee and turns it into an edit draft. Fields absent
/// from the response come back as empty strings.
pub async fn load_employee_draft<A>(api: &A, employee_id: i64) -> ServiceResult<UpdateEmployee>
where
    A: EmployeeReader + ?Sized,
{
    let employee = api.get_employee(employee_id).await.map_err(|err| {
        log::error!("Failed to fetch employee {employee_id}: {err}");
        ServiceError::from(err)
    })?;

    Ok(UpdateEmployee::from(employee))
}

/// Validates the edit form and sends the draft as a partial update.
pub async fn update_employee<A>(
    api: &A,
    employee_id: i64,
    form: &UpdateEmployeeForm,
) -> ServiceResult<Employee>
where
    A: EmployeeWriter + ?Sized,
{
    form.validate().map_err(|err| {
        log::error!("Failed to validate form: {err}");
        ServiceError::Form(err.to_string())
    })?;

    let updates = UpdateEmployee::from(form);

    api.update_employee(employee_id, &updates)
        .await
        .map_err(|err| {
            log::error!("Failed to update employee {employee_id}: {err}");
            ServiceError::from(err)
        })
}
