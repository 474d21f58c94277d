use serde::{Deserialize, Serialize};

/// Label shown in place of skipped page ranges.
pub const ELLIPSIS: &str = "...";

/// One entry of the page navigation: a numbered page or an ellipsis placeholder.
///
/// For ellipsis entries `number` is the page the placeholder jumps to, roughly
/// the middle of the skipped range. It is used for the URL only and never
/// displayed.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Page {
    pub label: String,
    pub number: i64,
    pub current: bool,
    pub ellipsis: bool,
    pub url: Option<String>,
}

impl Page {
    /// Creates a numbered page labelled with its own number.
    pub fn numbered(number: i64, current: bool) -> Self {
        Self {
            label: number.to_string(),
            number,
            current,
            ellipsis: false,
            url: None,
        }
    }

    /// Creates an ellipsis placeholder jumping to `number`.
    pub fn ellipsis(number: i64, current: bool) -> Self {
        Self {
            label: ELLIPSIS.to_string(),
            number,
            current,
            ellipsis: true,
            url: None,
        }
    }

    /// Returns the page with its URL set.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Whether the page should be rendered as a plain link.
    pub fn is_link(&self) -> bool {
        self.url.is_some() && !self.current && !self.ellipsis
    }
}
