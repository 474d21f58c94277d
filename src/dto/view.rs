use serde::Serialize;

use crate::domain::page::Page;
use crate::pagination::Pagination;

/// Serializable snapshot of a [`Pagination`] for host templates.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct PaginationView {
    pub pages: Vec<Page>,
    pub current_page: i64,
    pub current_page_exists: bool,
    pub prev_url: Option<String>,
    pub next_url: Option<String>,
    pub total_items: i64,
    pub items_from: i64,
    pub items_to: i64,
    pub items_per_page: i64,
}

impl From<&Pagination> for PaginationView {
    fn from(pagination: &Pagination) -> Self {
        Self {
            pages: pagination.pages().to_vec(),
            current_page: pagination.current_page(),
            current_page_exists: pagination.current_page_exists(),
            prev_url: pagination.prev_page_url(),
            next_url: pagination.next_page_url(),
            total_items: pagination.total_items(),
            items_from: pagination.total_items_from(),
            items_to: pagination.total_items_to(),
            items_per_page: pagination.items_per_page(),
        }
    }
}

/// Items of the current page together with their navigation.
#[derive(Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub pagination: PaginationView,
}

impl<T> Paginated<T> {
    /// Wraps `items`, already fetched for the current page of `pagination`.
    pub fn new(items: Vec<T>, pagination: &Pagination) -> Self {
        Self {
            items,
            pagination: PaginationView::from(pagination),
        }
    }
}
