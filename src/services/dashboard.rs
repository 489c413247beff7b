use crate::api::{EmployeeListQuery, EmployeeReader};
use crate::dto::dashboard::{DashboardPageData, DashboardQuery};
use crate::pagination::{DEFAULT_PAGE_SIZE, Paginated};
use crate::services::{ServiceError, ServiceResult};

/// Derives the dashboard state for one `(query, page)` pair.
///
/// A non-empty trimmed search term selects the filtered endpoint;
/// otherwise the full list is paged. The page index is taken as-is,
/// including values past the backend's total-page count.
pub async fn load_dashboard<A>(api: &A, query: DashboardQuery) -> ServiceResult<DashboardPageData>
where
    A: EmployeeReader + ?Sized,
{
    let page = query.page.unwrap_or(0);

    let search_query = query
        .search
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());

    let mut list_query = EmployeeListQuery::new().paginate(page, DEFAULT_PAGE_SIZE);
    if let Some(term) = &search_query {
        list_query = list_query.search(term.clone());
    }

    let result = api.list_employees(list_query).await.map_err(|err| {
        log::error!("Failed to fetch employees: {err}");
        ServiceError::from(err)
    })?;

    Ok(DashboardPageData {
        employees: Paginated::new(result.content, page, result.total_pages),
        search_query,
    })
}
