use crate::domain::employee::Employee;
use crate::pagination::Paginated;

/// Query parameters accepted by the dashboard service.
#[derive(Debug, Default)]
pub struct DashboardQuery {
    /// Optional search string entered by the user.
    pub search: Option<String>,
    /// Zero-based page index requested by the user interface.
    pub page: Option<usize>,
}

/// Data required to render the dashboard template.
pub struct DashboardPageData {
    /// Paginated list of employees to show in the table.
    pub employees: Paginated<Employee>,
    /// Search query echoed back to the template when present.
    pub search_query: Option<String>,
}
