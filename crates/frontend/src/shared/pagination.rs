//! Page-number window for numbered pagination
//!
//! Pages are 1-based. The window is `[page - radius, page + radius]` clipped
//! to `[1, total_pages]`, with shortcuts to the first and last page and an
//! ellipsis wherever the shortcut is not adjacent to the window.

/// Pages shown on each side of the current one
pub const PAGE_WINDOW_RADIUS: u32 = 2;

/// What the pagination bar should render
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageWindow {
    pub page: u32,
    pub total_pages: u32,
    pub show_first: bool,
    pub leading_ellipsis: bool,
    /// Contiguous page numbers around the current page
    pub pages: Vec<u32>,
    pub trailing_ellipsis: bool,
    pub show_last: bool,
    pub prev_enabled: bool,
    pub next_enabled: bool,
}

impl PageWindow {
    /// Nothing to render (a single page or no data)
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn prev_target(&self) -> u32 {
        self.page.saturating_sub(1).max(1)
    }

    pub fn next_target(&self) -> u32 {
        (self.page + 1).min(self.total_pages.max(1))
    }

    pub fn caption(&self) -> String {
        format!("Page {} of {}", self.page, self.total_pages)
    }
}

/// Compute the window around `page`.
///
/// `total_pages <= 1` yields an empty descriptor. A `page` outside
/// `1..=total_pages` is clamped first so the window is never empty.
pub fn compute_window(page: u32, total_pages: u32, radius: u32) -> PageWindow {
    if total_pages <= 1 {
        return PageWindow::default();
    }

    let page = page.clamp(1, total_pages);
    let start = page.saturating_sub(radius).max(1);
    let end = page.saturating_add(radius).min(total_pages);

    PageWindow {
        page,
        total_pages,
        show_first: start > 1,
        leading_ellipsis: start > 2,
        pages: (start..=end).collect(),
        trailing_ellipsis: end + 1 < total_pages,
        show_last: end < total_pages,
        prev_enabled: page > 1,
        next_enabled: page < total_pages,
    }
}

/// "Showing X–Y of Z results" line above the table
pub fn result_summary(page: u32, page_size: u32, total_items: u64) -> String {
    if total_items == 0 {
        return "No results found.".to_string();
    }

    let page = page.max(1) as u64;
    let page_size = page_size.max(1) as u64;
    let start = (page - 1) * page_size + 1;
    let end = (page * page_size).min(total_items);
    format!("Showing {}–{} of {} results", start, end, total_items)
}
