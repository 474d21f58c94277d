//! Conversion of a [`Pagination`] into markup.

use std::fmt;
use std::sync::{Arc, LazyLock};

use serde::Serialize;
use tera::{Context, Tera};

use crate::errors::PaginationResult;
use crate::pagination::Pagination;

pub const DEFAULT_PREVIOUS_TEXT: &str = "Previous";
pub const DEFAULT_NEXT_TEXT: &str = "Next";

const MENU_TEMPLATE_NAME: &str = "pagination.html";

/// Default menu markup: one `<li>` per item, links for navigable pages,
/// `<span>` for the current page and for ellipses.
pub const MENU_TEMPLATE: &str = "<ul class=\"pagination\">\
    {% for item in items %}<li{% if item.class %} class=\"{{ item.class }}\"{% endif %}>\
    {% if item.href %}<a href=\"{{ item.href }}\">{{ item.label }}</a>\
    {% else %}<span>{{ item.label }}</span>{% endif %}</li>{% endfor %}</ul>";

/// The built-in template, compiled once per process.
static MENU_TERA: LazyLock<Arc<Tera>> = LazyLock::new(|| {
    Arc::new(compile_template(MENU_TEMPLATE).expect("built-in menu template must compile"))
});

/// Turns pagination state into its textual representation.
pub trait Renderer: Send + Sync {
    fn render(&self, pagination: &Pagination) -> PaginationResult<String>;
}

/// One `<li>` of the rendered menu.
#[derive(Debug, Serialize, PartialEq, Eq)]
struct MenuItem {
    label: String,
    href: Option<String>,
    class: Option<&'static str>,
}

/// Renders an unordered list of page links through a Tera template.
///
/// Nothing is rendered when there is at most one page descriptor.
#[derive(Clone)]
pub struct MenuRenderer {
    previous_text: String,
    next_text: String,
    tera: Arc<Tera>,
}

impl Default for MenuRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_PREVIOUS_TEXT, DEFAULT_NEXT_TEXT)
    }
}

impl MenuRenderer {
    pub fn new(previous_text: impl Into<String>, next_text: impl Into<String>) -> Self {
        Self {
            previous_text: previous_text.into(),
            next_text: next_text.into(),
            tera: Arc::clone(&MENU_TERA),
        }
    }

    /// Replaces the markup template, compiling it right away.
    ///
    /// The template receives `items`, a list of `{label, href, class}` where
    /// `href` and `class` may be null.
    pub fn with_template(mut self, template: &str) -> PaginationResult<Self> {
        self.tera = Arc::new(compile_template(template)?);
        Ok(self)
    }

    fn menu_items(&self, pagination: &Pagination) -> Vec<MenuItem> {
        let mut items = Vec::with_capacity(pagination.page_count() + 2);

        if let Some(href) = pagination.prev_page_url() {
            items.push(MenuItem {
                label: self.previous_text.clone(),
                href: Some(href),
                class: None,
            });
        }

        items.extend(pagination.pages().iter().map(|page| {
            let class = match (page.current, page.ellipsis) {
                (true, true) => "current page",
                (true, false) => "current",
                (false, _) => "page",
            };

            MenuItem {
                label: page.label.clone(),
                href: page.is_link().then(|| page.url.clone()).flatten(),
                class: Some(class),
            }
        }));

        if let Some(href) = pagination.next_page_url() {
            items.push(MenuItem {
                label: self.next_text.clone(),
                href: Some(href),
                class: None,
            });
        }

        items
    }
}

impl Renderer for MenuRenderer {
    fn render(&self, pagination: &Pagination) -> PaginationResult<String> {
        if pagination.page_count() <= 1 {
            return Ok(String::new());
        }

        let mut context = Context::new();
        context.insert("items", &self.menu_items(pagination));

        Ok(self.tera.render(MENU_TEMPLATE_NAME, &context)?)
    }
}

impl fmt::Debug for MenuRenderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MenuRenderer")
            .field("previous_text", &self.previous_text)
            .field("next_text", &self.next_text)
            .finish_non_exhaustive()
    }
}

fn compile_template(template: &str) -> PaginationResult<Tera> {
    let mut tera = Tera::default();
    tera.set_escape_fn(escape_markup);
    tera.add_raw_template(MENU_TEMPLATE_NAME, template)?;
    Ok(tera)
}

/// HTML escaping that leaves `/` alone so page URLs stay readable.
fn escape_markup(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PaginationError;

    #[test]
    fn escapes_markup_but_not_slashes() {
        assert_eq!(
            escape_markup("<a href=\"/x?a=1&b='2'\">"),
            "&lt;a href=&quot;/x?a=1&amp;b=&#x27;2&#x27;&quot;&gt;"
        );
    }

    #[test]
    fn menu_items_for_middle_page() {
        let pagination = Pagination::builder(20)
            .current_page(5)
            .items_per_page(1)
            .max_pages_to_show(3)
            .build();

        let items = MenuRenderer::new("prev", "next").menu_items(&pagination);
        let summary: Vec<_> = items
            .iter()
            .map(|item| (item.label.as_str(), item.href.as_deref(), item.class))
            .collect();

        assert_eq!(
            summary,
            [
                ("prev", Some("page/4"), None),
                ("1", Some("page/1"), Some("page")),
                ("...", None, Some("page")),
                ("5", None, Some("current")),
                ("...", None, Some("page")),
                ("20", Some("page/20"), Some("page")),
                ("next", Some("page/6"), None),
            ]
        );
    }

    #[test]
    fn renders_ellipsis_as_span() {
        let pagination = Pagination::builder(20)
            .current_page(5)
            .items_per_page(1)
            .max_pages_to_show(3)
            .build();

        assert_eq!(
            MenuRenderer::default().render(&pagination).unwrap(),
            "<ul class=\"pagination\">\
             <li><a href=\"page/4\">Previous</a></li>\
             <li class=\"page\"><a href=\"page/1\">1</a></li>\
             <li class=\"page\"><span>...</span></li>\
             <li class=\"current\"><span>5</span></li>\
             <li class=\"page\"><span>...</span></li>\
             <li class=\"page\"><a href=\"page/20\">20</a></li>\
             <li><a href=\"page/6\">Next</a></li>\
             </ul>"
        );
    }

    #[test]
    fn labels_are_escaped() {
        let pagination = Pagination::builder(100).items_per_page(50).build();
        let markup = MenuRenderer::new("<", ">")
            .render(&pagination.with_current_page(2))
            .unwrap();
        assert!(
            markup.starts_with("<ul class=\"pagination\"><li><a href=\"page/1\">&lt;</a></li>")
        );
    }

    #[test]
    fn custom_template() {
        let renderer = MenuRenderer::default()
            .with_template("{% for item in items %}[{{ item.label }}]{% endfor %}")
            .unwrap();
        let pagination = Pagination::builder(3)
            .items_per_page(1)
            .current_page(2)
            .build();

        assert_eq!(renderer.render(&pagination).unwrap(), "[Previous][1][2][3]");
        assert_eq!(
            renderer.render(&pagination.with_current_page(1)).unwrap(),
            "[1][2][3][Next]"
        );
    }

    #[test]
    fn broken_template_is_rejected_by_with_template() {
        assert!(matches!(
            MenuRenderer::default().with_template("{% for item in items %}"),
            Err(PaginationError::Template(_))
        ));
    }

    #[test]
    fn clones_share_the_compiled_template() {
        let renderer = MenuRenderer::new("prev", "next");
        let clone = renderer.clone();
        assert!(Arc::ptr_eq(&renderer.tera, &clone.tera));
        assert!(Arc::ptr_eq(&renderer.tera, &MenuRenderer::default().tera));
    }
}
