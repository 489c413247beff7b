use serde::Serialize;

/// Page size used by every backend list and search request.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// A single pagination control. Gap entries render as an ellipsis.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct PageItem {
    pub number: usize,
    pub gap: bool,
}

/// Windowed page indices around `current_page`, zero-based, with `None`
/// marking an elided run. Out-of-range current pages collapse the
/// middle window instead of panicking.
fn page_window(
    total_pages: usize,
    current_page: usize,
    left_edge: usize,
    around_current: usize,
    right_edge: usize,
) -> Vec<Option<usize>> {
    if total_pages == 0 {
        return vec![];
    }

    let mut pages = Vec::new();

    let left_end = left_edge.min(total_pages);
    pages.extend((0..left_end).map(Some));
    let mut emitted_end = left_end;

    let mid_start = left_end.max(current_page.saturating_sub(around_current));
    let mid_end = current_page
        .saturating_add(around_current + 1)
        .min(total_pages);

    if mid_start < mid_end {
        if mid_start > emitted_end {
            pages.push(None);
        }
        pages.extend((mid_start..mid_end).map(Some));
        emitted_end = mid_end;
    }

    let right_start = emitted_end.max(total_pages - right_edge.min(total_pages));

    if right_start < total_pages {
        if right_start > emitted_end {
            pages.push(None);
        }
        pages.extend((right_start..total_pages).map(Some));
    }

    pages
}

/// View model for a paginated table: the rows of the current page plus
/// everything the template needs to draw the page controls.
#[derive(Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub pages: Vec<PageItem>,
    /// Zero-based index of the displayed page, echoed from the request.
    pub page: usize,
    /// Total page count as reported by the backend.
    pub total_pages: usize,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, current_page: usize, total_pages: usize) -> Self {
        let pages = page_window(total_pages, current_page, 2, 3, 2)
            .into_iter()
            .map(|page| match page {
                Some(number) => PageItem { number, gap: false },
                None => PageItem {
                    number: 0,
                    gap: true,
                },
            })
            .collect();

        Self {
            items,
            pages,
            page: current_page,
            total_pages,
        }
    }

    /// An empty result set keeping the requested page index, used when a
    /// fetch fails and the table degrades to the no-results placeholder.
    pub fn empty(current_page: usize) -> Self {
        Self::new(Vec::new(), current_page, 0)
    }
}
