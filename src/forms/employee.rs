use serde::Deserialize;
use validator::Validate;

use crate::domain::employee::{NewEmployee, UpdateEmployee};

/// Form data for creating an employee. All fields are required; no
/// further validation is applied on this side of the API.
#[derive(Deserialize, Validate)]
pub struct AddEmployeeForm {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub email: String,
    #[validate(length(min = 1))]
    pub phone: String,
    #[validate(length(min = 1))]
    pub department: String,
}

/// Form data for updating an existing employee.
#[derive(Deserialize, Validate)]
pub struct UpdateEmployeeForm {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub email: String,
    #[validate(length(min = 1))]
    pub phone: String,
    #[validate(length(min = 1))]
    pub department: String,
}

/// Form data for the delete confirmation step.
#[derive(Deserialize)]
pub struct DeleteEmployeeForm {
    /// Signed ticket issued when the confirmation page was rendered.
    pub token: String,
    /// Dashboard state to return to after the delete attempt.
    pub q: Option<String>,
    pub page: Option<usize>,
}

impl From<&AddEmployeeForm> for NewEmployee {
    fn from(form: &AddEmployeeForm) -> Self {
        Self {
            name: form.name.clone(),
            email: form.email.clone(),
            phone: form.phone.clone(),
            department: form.department.clone(),
        }
    }
}

impl From<&UpdateEmployeeForm> for UpdateEmployee {
    fn from(form: &UpdateEmployeeForm) -> Self {
        Self {
            name: form.name.clone(),
            email: form.email.clone(),
            phone: form.phone.clone(),
            department: form.department.clone(),
        }
    }
}
