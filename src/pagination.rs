use std::fmt;
use std::sync::Arc;

use crate::domain::page::Page;
use crate::errors::PaginationResult;
use crate::models::config::PaginationConfig;
use crate::render::{MenuRenderer, Renderer};
use crate::url::{PatternUrlGenerator, UrlGenerator};
use crate::window::{compute_window, last_page};
use crate::{
    DEFAULT_CURRENT_PAGE, DEFAULT_ITEMS_PER_PAGE, DEFAULT_MAX_ITEMS_PER_PAGE,
    DEFAULT_MAX_PAGES_TO_SHOW, MIN_PAGES_TO_SHOW,
};

/// Raw numeric inputs, normalized before every calculation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Settings {
    total_items: i64,
    current_page: i64,
    items_per_page: i64,
    max_pages_to_show: i64,
    max_items_per_page: i64,
}

impl Settings {
    fn normalized(self) -> Self {
        let total_items = self.total_items.max(0);
        let max_pages_to_show = self.max_pages_to_show.max(MIN_PAGES_TO_SHOW);
        let max_items_per_page = self.max_items_per_page.max(1);
        let items_per_page = self.items_per_page.max(1).min(max_items_per_page);

        if total_items != self.total_items {
            log::debug!("Clamped total items {} to 0", self.total_items);
        }
        if max_pages_to_show != self.max_pages_to_show {
            log::debug!(
                "Clamped max pages to show {} to {max_pages_to_show}",
                self.max_pages_to_show
            );
        }
        if items_per_page != self.items_per_page {
            log::debug!(
                "Clamped items per page {} to {items_per_page}",
                self.items_per_page
            );
        }

        Self {
            total_items,
            current_page: self.current_page,
            items_per_page,
            max_pages_to_show,
            max_items_per_page,
        }
    }
}

/// Immutable pagination state for one list view.
///
/// Every `with_*` method returns a new, fully recalculated value and leaves
/// `self` untouched. The URL generator and the renderer are shared between
/// derived values.
#[derive(Clone)]
pub struct Pagination {
    settings: Settings,
    items_offset: i64,
    last_page: i64,
    pages: Vec<Page>,
    url_generator: Arc<dyn UrlGenerator>,
    renderer: Arc<dyn Renderer>,
}

impl Pagination {
    /// Pagination over `total_items` with every other input at its default.
    pub fn new(total_items: i64) -> Self {
        Self::builder(total_items).build()
    }

    pub fn builder(total_items: i64) -> PaginationBuilder {
        PaginationBuilder::new(total_items)
    }

    /// Pagination using the page sizes, labels and URL pattern of `config`.
    pub fn from_config(total_items: i64, current_page: i64, config: &PaginationConfig) -> Self {
        Self::builder(total_items)
            .current_page(current_page)
            .items_per_page(config.items_per_page)
            .max_pages_to_show(config.max_pages_to_show)
            .max_items_per_page(config.max_items_per_page)
            .url_generator(config.url_generator())
            .renderer(config.menu_renderer())
            .build()
    }

    fn calculate(
        settings: Settings,
        url_generator: Arc<dyn UrlGenerator>,
        renderer: Arc<dyn Renderer>,
    ) -> Self {
        let settings = settings.normalized();

        let items_offset = settings
            .current_page
            .saturating_sub(1)
            .saturating_mul(settings.items_per_page)
            .max(0);

        let pages = compute_window(
            settings.total_items,
            settings.current_page,
            settings.items_per_page,
            settings.max_pages_to_show,
        )
        .into_iter()
        .map(|page| {
            let url = url_generator.generate(page.number);
            page.with_url(url)
        })
        .collect();

        Self {
            settings,
            items_offset,
            last_page: last_page(settings.total_items, settings.items_per_page),
            pages,
            url_generator,
            renderer,
        }
    }

    fn recalculate(&self, settings: Settings) -> Self {
        Self::calculate(settings, self.url_generator.clone(), self.renderer.clone())
    }

    pub fn with_current_page(&self, current_page: i64) -> Self {
        self.recalculate(Settings {
            current_page,
            ..self.settings
        })
    }

    pub fn with_items_per_page(&self, items_per_page: i64) -> Self {
        self.recalculate(Settings {
            items_per_page,
            ..self.settings
        })
    }

    pub fn with_max_pages_to_show(&self, max_pages_to_show: i64) -> Self {
        self.recalculate(Settings {
            max_pages_to_show,
            ..self.settings
        })
    }

    pub fn with_url_generator(&self, url_generator: impl UrlGenerator + 'static) -> Self {
        Self::calculate(self.settings, Arc::new(url_generator), self.renderer.clone())
    }

    /// Swaps the renderer only; pages do not depend on it and are kept.
    pub fn with_renderer(&self, renderer: impl Renderer + 'static) -> Self {
        Self {
            renderer: Arc::new(renderer),
            ..self.clone()
        }
    }

    pub fn total_items(&self) -> i64 {
        self.settings.total_items
    }

    pub fn items_per_page(&self) -> i64 {
        self.settings.items_per_page
    }

    pub fn max_pages_to_show(&self) -> i64 {
        self.settings.max_pages_to_show
    }

    pub fn max_items_per_page(&self) -> i64 {
        self.settings.max_items_per_page
    }

    /// Zero-based index of the first item of the current page.
    pub fn items_offset(&self) -> i64 {
        self.items_offset
    }

    /// One-based position of the first item shown, 0 when nothing is shown.
    pub fn total_items_from(&self) -> i64 {
        if self.settings.total_items <= 0 {
            return 0;
        }

        let from = self.items_offset.saturating_add(1);
        if from > self.settings.total_items {
            0
        } else {
            from
        }
    }

    /// One-based position of the last item shown, 0 when nothing is shown.
    pub fn total_items_to(&self) -> i64 {
        let from = self.total_items_from();
        if from == 0 {
            return 0;
        }

        from
            .saturating_add(self.settings.items_per_page - 1)
            .min(self.settings.total_items)
    }

    pub fn has_pages(&self) -> bool {
        !self.pages.is_empty()
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// Number of page descriptors, ellipses included.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Number of pages needed for all items, independent of the current page.
    pub fn last_page(&self) -> i64 {
        self.last_page
    }

    pub fn page_exists(&self, number: i64) -> bool {
        self.pages.iter().any(|page| page.number == number)
    }

    pub fn current_page_exists(&self) -> bool {
        self.page_exists(self.settings.current_page)
    }

    /// The current page as requested, possibly outside the valid range.
    pub fn current_page(&self) -> i64 {
        self.settings.current_page
    }

    pub fn prev_page_url(&self) -> Option<String> {
        if self.settings.current_page < 2 {
            return None;
        }

        Some(self.url_generator.generate(self.settings.current_page - 1))
    }

    pub fn next_page_url(&self) -> Option<String> {
        let current_page = self.settings.current_page;
        if current_page < 1 || current_page.saturating_add(1) >= self.last_page {
            return None;
        }

        Some(self.url_generator.generate(current_page + 1))
    }

    /// Renders the navigation with the configured renderer.
    pub fn render(&self) -> PaginationResult<String> {
        self.renderer.render(self)
    }
}

impl fmt::Display for Pagination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.render() {
            Ok(markup) => f.write_str(&markup),
            Err(err) => {
                log::error!("Failed to render pagination: {err}");
                Err(fmt::Error)
            }
        }
    }
}

impl fmt::Debug for Pagination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pagination")
            .field("total_items", &self.settings.total_items)
            .field("current_page", &self.settings.current_page)
            .field("items_per_page", &self.settings.items_per_page)
            .field("max_pages_to_show", &self.settings.max_pages_to_show)
            .field("max_items_per_page", &self.settings.max_items_per_page)
            .field("items_offset", &self.items_offset)
            .field("last_page", &self.last_page)
            .field("pages", &self.pages)
            .finish_non_exhaustive()
    }
}

/// Collects the raw inputs of a [`Pagination`].
pub struct PaginationBuilder {
    settings: Settings,
    url_generator: Option<Arc<dyn UrlGenerator>>,
    renderer: Option<Arc<dyn Renderer>>,
}

impl PaginationBuilder {
    pub fn new(total_items: i64) -> Self {
        Self {
            settings: Settings {
                total_items,
                current_page: DEFAULT_CURRENT_PAGE,
                items_per_page: DEFAULT_ITEMS_PER_PAGE,
                max_pages_to_show: DEFAULT_MAX_PAGES_TO_SHOW,
                max_items_per_page: DEFAULT_MAX_ITEMS_PER_PAGE,
            },
            url_generator: None,
            renderer: None,
        }
    }

    pub fn current_page(mut self, current_page: i64) -> Self {
        self.settings.current_page = current_page;
        self
    }

    pub fn items_per_page(mut self, items_per_page: i64) -> Self {
        self.settings.items_per_page = items_per_page;
        self
    }

    pub fn max_pages_to_show(mut self, max_pages_to_show: i64) -> Self {
        self.settings.max_pages_to_show = max_pages_to_show;
        self
    }

    pub fn max_items_per_page(mut self, max_items_per_page: i64) -> Self {
        self.settings.max_items_per_page = max_items_per_page;
        self
    }

    pub fn url_generator(mut self, url_generator: impl UrlGenerator + 'static) -> Self {
        self.url_generator = Some(Arc::new(url_generator));
        self
    }

    pub fn renderer(mut self, renderer: impl Renderer + 'static) -> Self {
        self.renderer = Some(Arc::new(renderer));
        self
    }

    pub fn build(self) -> Pagination {
        let url_generator = self
            .url_generator
            .unwrap_or_else(|| Arc::new(PatternUrlGenerator::default()));
        let renderer = self
            .renderer
            .unwrap_or_else(|| Arc::new(MenuRenderer::default()));

        Pagination::calculate(self.settings, url_generator, renderer)
    }
}
