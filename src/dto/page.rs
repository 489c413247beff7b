use serde::{Deserialize, Serialize};

use crate::domain::employee::Employee;

/// Paginated envelope returned by the backend list and search endpoints.
///
/// Only the fields this UI consumes are modeled; the backend includes
/// more paging metadata which is ignored. A payload without a valid
/// `content` sequence deserializes to an empty page instead of failing.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct EmployeePage {
    #[serde(default)]
    pub content: Vec<Employee>,
    #[serde(default)]
    pub total_pages: usize,
}
