//! Page-button windowing.
//!
//! For five pages or fewer every page gets a button. Beyond that the bar shows
//! the first and last page, the current page with its neighbours, and an
//! ellipsis wherever pages are skipped, so the bar never holds more than seven
//! elements however many pages there are.

/// One element of the page-number bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page { number: usize, current: bool },
    Ellipsis,
}

impl PageItem {
    fn page(number: usize, current_page: usize) -> Self {
        PageItem::Page {
            number,
            current: number == current_page,
        }
    }
}

/// Largest total page count that is shown without ellipses.
const FULL_BAR_LIMIT: usize = 5;

/// Builds the page-number bar for `current_page` out of `total_pages`.
pub fn page_window(current_page: usize, total_pages: usize) -> Vec<PageItem> {
    let total = total_pages.max(1);
    let current = current_page.clamp(1, total);

    if total <= FULL_BAR_LIMIT {
        return (1..=total).map(|n| PageItem::page(n, current)).collect();
    }

    let mut items = Vec::with_capacity(7);
    items.push(PageItem::page(1, current));
    if current > 3 {
        items.push(PageItem::Ellipsis);
    }
    if current > 2 {
        items.push(PageItem::page(current - 1, current));
    }
    if current != 1 && current != total {
        items.push(PageItem::page(current, current));
    }
    if current < total - 1 {
        items.push(PageItem::page(current + 1, current));
    }
    if current < total - 2 {
        items.push(PageItem::Ellipsis);
    }
    items.push(PageItem::page(total, current));
    items
}

/// Enablement of the first/previous/next/last controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavControls {
    pub first: bool,
    pub previous: bool,
    pub next: bool,
    pub last: bool,
}

impl NavControls {
    pub fn for_page(current_page: usize, total_pages: usize) -> Self {
        let at_start = current_page <= 1;
        let at_end = current_page >= total_pages;
        Self {
            first: !at_start,
            previous: !at_start,
            next: !at_end,
            last: !at_end,
        }
    }
}

/// "Showing a–b of n" label for a page of a filtered set.
pub fn range_label(count: usize, current_page: usize, page_size: usize) -> String {
    if count == 0 {
        return "Showing 0 of 0".to_string();
    }
    let start = (current_page.max(1) - 1) * page_size.max(1);
    let end = (start + page_size.max(1)).min(count);
    format!("Showing {}–{} of {}", start + 1, end, count)
}
