//! Page-window pagination for server-rendered list views.
//!
//! [`Pagination`] normalizes the raw list configuration, asks the
//! [`window`] calculator which page links to show and attaches a URL to every
//! descriptor through a pluggable [`UrlGenerator`]. Rendering into markup is
//! delegated to a [`Renderer`], by default the Tera based [`MenuRenderer`].

pub mod domain;
pub mod dto;
pub mod errors;
pub mod models;
pub mod pagination;
pub mod render;
pub mod url;
pub mod window;

#[cfg(feature = "test-mocks")]
pub mod mock;

pub use crate::domain::page::Page;
pub use crate::errors::{PaginationError, PaginationResult};
pub use crate::pagination::{Pagination, PaginationBuilder};
pub use crate::render::{MenuRenderer, Renderer};
pub use crate::url::{PatternUrlGenerator, UrlGenerator};

pub const DEFAULT_CURRENT_PAGE: i64 = 1;
pub const DEFAULT_ITEMS_PER_PAGE: i64 = 100;
pub const DEFAULT_MAX_PAGES_TO_SHOW: i64 = 8;
pub const DEFAULT_MAX_ITEMS_PER_PAGE: i64 = 1000;

/// Smallest window the calculator works with: first page, one middle page, last page.
pub const MIN_PAGES_TO_SHOW: i64 = 3;
