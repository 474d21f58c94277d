//! Page-window calculation.
//!
//! Given the item totals and the current page, decides which page links a
//! navigation shows: always the first and the last page, a contiguous window
//! around the current page and an ellipsis on each side where pages were
//! skipped.

use crate::MIN_PAGES_TO_SHOW;
use crate::domain::page::Page;

/// Number of pages needed to show `total_items`, zero when there are no items.
pub fn last_page(total_items: i64, items_per_page: i64) -> i64 {
    let items_per_page = items_per_page.max(1);

    if total_items <= 0 {
        return 0;
    }

    total_items / items_per_page + i64::from(total_items % items_per_page != 0)
}

/// Computes the ordered page descriptors, without URLs.
///
/// Returns an empty list when there are no pages or when `current_page` is
/// below 1. A `current_page` past the last page still yields a window, shifted
/// to the end, in which no page is marked current.
pub fn compute_window(
    total_items: i64,
    current_page: i64,
    items_per_page: i64,
    max_pages_to_show: i64,
) -> Vec<Page> {
    let last_page = last_page(total_items, items_per_page);

    if last_page <= 0 || current_page < 1 {
        log::debug!("No pages for {total_items} items at page {current_page}");
        return vec![];
    }

    // Any window of `last_page + 2` or more already shows every page.
    let max_pages_to_show = max_pages_to_show
        .max(MIN_PAGES_TO_SHOW)
        .min(last_page.saturating_add(2));

    let range_offset = (max_pages_to_show - MIN_PAGES_TO_SHOW) / 2;

    let range_start = if current_page > last_page - range_offset {
        last_page - max_pages_to_show + 2
    } else {
        current_page - range_offset
    }
    .max(2);

    let range_end = range_start
        .saturating_add(max_pages_to_show - MIN_PAGES_TO_SHOW)
        .min(last_page - 1);

    log::trace!("Page window {range_start}..={range_end} of {last_page} around {current_page}");

    let is_current = |number: i64| number == current_page;
    let mut pages = Vec::new();

    put(&mut pages, Page::numbered(1, is_current(1)));

    if range_start > 2 {
        let jump = (range_start / 2).max(2);
        put(&mut pages, Page::ellipsis(jump, is_current(jump)));
    }

    for number in range_start..=range_end {
        put(&mut pages, Page::numbered(number, is_current(number)));
    }

    if range_end < last_page - 1 {
        let jump = (last_page - range_end) / 2 + range_end;
        put(&mut pages, Page::ellipsis(jump, is_current(jump)));
    }

    put(&mut pages, Page::numbered(last_page, is_current(last_page)));

    pages
}

/// Stores `page` keyed by its number: an existing entry with the same number
/// is replaced in place, otherwise the page is appended.
fn put(pages: &mut Vec<Page>, page: Page) {
    match pages.iter_mut().find(|existing| existing.number == page.number) {
        Some(existing) => *existing = page,
        None => pages.push(page),
    }
}
