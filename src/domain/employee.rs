use serde::{Deserialize, Serialize};

/// An employee record as returned by the backend.
///
/// The identifier is assigned by the backend and never changed here.
/// Text fields default to empty strings when absent from a response so
/// the edit form never has to deal with missing values.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct Employee {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub department: String,
}

/// Payload for creating an employee. The backend assigns the id.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct NewEmployee {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub department: String,
}

/// Draft of an existing employee's editable fields, sent as the PATCH
/// body and used to pre-fill the edit form.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct UpdateEmployee {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub department: String,
}

impl From<Employee> for UpdateEmployee {
    fn from(employee: Employee) -> Self {
        Self {
            name: employee.name,
            email: employee.email,
            phone: employee.phone,
            department: employee.department,
        }
    }
}
