//! Page URL generation.

use std::collections::HashMap;

/// Pattern used when no URL was registered for a page.
pub const DEFAULT_URL_PATTERN: &str = "page/{num}";

/// Placeholder replaced by the page number in URL patterns.
pub const DEFAULT_PLACEHOLDER: &str = "{num}";

/// Maps a page number to the URL its link points to.
pub trait UrlGenerator: Send + Sync {
    fn generate(&self, page: i64) -> String;
}

impl<F> UrlGenerator for F
where
    F: Fn(i64) -> String + Send + Sync,
{
    fn generate(&self, page: i64) -> String {
        self(page)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct PageUrl {
    url: String,
    placeholder: Option<String>,
}

impl PageUrl {
    fn new(url: impl Into<String>, placeholder: Option<&str>) -> Self {
        Self {
            url: url.into(),
            placeholder: placeholder.map(str::to_string),
        }
    }

    fn expand(&self, page: i64) -> String {
        match &self.placeholder {
            Some(placeholder) => self.url.replace(placeholder.as_str(), &page.to_string()),
            None => self.url.clone(),
        }
    }
}

/// Pattern based generator.
///
/// Lookup order for a page is: URL registered for that exact page, then the
/// wildcard URL, then [`DEFAULT_URL_PATTERN`].
#[derive(Clone, Debug, Default)]
pub struct PatternUrlGenerator {
    pages: HashMap<i64, PageUrl>,
    wildcard: Option<PageUrl>,
}

impl PatternUrlGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `url` for `page`, or for every page when `page` is `None` or
    /// `Some(0)`. Page numbers start at 1, so 0 doubles as the wildcard key.
    ///
    /// Occurrences of `placeholder` in `url` are replaced by the page number;
    /// without a placeholder the URL is used verbatim. Registering the same
    /// page twice keeps the latest URL.
    pub fn add_page_url(
        mut self,
        url: impl Into<String>,
        placeholder: Option<&str>,
        page: Option<i64>,
    ) -> Self {
        let page_url = PageUrl::new(url, placeholder);
        match page {
            Some(page) if page != 0 => {
                self.pages.insert(page, page_url);
            }
            _ => self.wildcard = Some(page_url),
        }
        self
    }

    /// Registers a wildcard URL using the default `{num}` placeholder.
    pub fn with_pattern(self, url: impl Into<String>) -> Self {
        self.add_page_url(url, Some(DEFAULT_PLACEHOLDER), None)
    }
}

impl UrlGenerator for PatternUrlGenerator {
    fn generate(&self, page: i64) -> String {
        match self.pages.get(&page).or(self.wildcard.as_ref()) {
            Some(page_url) => page_url.expand(page),
            None => DEFAULT_URL_PATTERN.replace(DEFAULT_PLACEHOLDER, &page.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_pattern() {
        assert_eq!(PatternUrlGenerator::new().generate(4), "page/4");
    }

    #[test]
    fn custom_placeholder() {
        let generator =
            PatternUrlGenerator::new().add_page_url("page/{number}", Some("{number}"), None);
        assert_eq!(generator.generate(4), "page/4");
    }

    #[test]
    fn page_zero_registers_the_wildcard() {
        let generator = PatternUrlGenerator::new()
            .add_page_url("/", None, Some(1))
            .add_page_url("#{num}", Some("{num}"), Some(0));

        assert_eq!(generator.generate(1), "/");
        assert_eq!(generator.generate(7), "#7");
        assert!(!generator.pages.contains_key(&0));
    }

    #[test]
    fn exact_page_wins_over_wildcard() {
        let generator = PatternUrlGenerator::new()
            .with_pattern("#{num}")
            .add_page_url("1#{num}", Some("{num}"), Some(1))
            .add_page_url("5#{num}", Some("{num}"), Some(5));

        assert_eq!(generator.generate(1), "1#1");
        assert_eq!(generator.generate(5), "5#5");
        assert_eq!(generator.generate(10), "#10");
    }

    #[test]
    fn url_without_placeholder_is_verbatim() {
        let generator = PatternUrlGenerator::new().add_page_url("page", None, Some(1));
        assert_eq!(generator.generate(1), "page");
        assert_eq!(generator.generate(2), "page/2");
    }

    #[test]
    fn later_registration_replaces_earlier() {
        let generator = PatternUrlGenerator::new()
            .with_pattern("a/{num}")
            .with_pattern("b/{num}");
        assert_eq!(generator.generate(3), "b/3");
    }

    #[test]
    fn closures_are_generators() {
        let generator = |page: i64| format!("?page={page}");
        assert_eq!(generator.generate(7), "?page=7");
    }
}
