//! Configuration model loaded from external sources.

use std::env;
use std::path::Path;

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::errors::PaginationResult;
use crate::render::{DEFAULT_NEXT_TEXT, DEFAULT_PREVIOUS_TEXT, MenuRenderer};
use crate::url::{DEFAULT_PLACEHOLDER, PatternUrlGenerator};
use crate::{DEFAULT_ITEMS_PER_PAGE, DEFAULT_MAX_ITEMS_PER_PAGE, DEFAULT_MAX_PAGES_TO_SHOW};

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Defaults applied to every pagination built from configuration.
pub struct PaginationConfig {
    pub items_per_page: i64,
    pub max_pages_to_show: i64,
    pub max_items_per_page: i64,
    pub previous_text: String,
    pub next_text: String,
    /// Wildcard page URL; `page/{num}` is used when unset.
    pub url_pattern: Option<String>,
    pub url_placeholder: String,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
            max_pages_to_show: DEFAULT_MAX_PAGES_TO_SHOW,
            max_items_per_page: DEFAULT_MAX_ITEMS_PER_PAGE,
            previous_text: DEFAULT_PREVIOUS_TEXT.to_string(),
            next_text: DEFAULT_NEXT_TEXT.to_string(),
            url_pattern: None,
            url_placeholder: DEFAULT_PLACEHOLDER.to_string(),
        }
    }
}

impl PaginationConfig {
    /// Loads `{dir}/default.yaml`, then `{dir}/{APP_ENV}.yaml` and finally
    /// `APP_*` environment variables. Every layer is optional.
    pub fn load(dir: impl AsRef<Path>) -> PaginationResult<Self> {
        let dir = dir.as_ref();
        let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());

        let settings = Config::builder()
            .add_source(File::from(dir.join("default")).required(false))
            .add_source(File::from(dir.join(&app_env)).required(false))
            .add_source(Environment::with_prefix("APP").try_parsing(true))
            .build()?;

        let config = settings.try_deserialize::<Self>()?;
        log::debug!("Loaded pagination config for `{app_env}`: {config:?}");
        Ok(config)
    }

    /// Loads a single configuration file, format chosen by its extension.
    pub fn from_file(path: impl AsRef<Path>) -> PaginationResult<Self> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .build()?;

        Ok(settings.try_deserialize::<Self>()?)
    }

    pub fn url_generator(&self) -> PatternUrlGenerator {
        match &self.url_pattern {
            Some(pattern) => PatternUrlGenerator::new().add_page_url(
                pattern.as_str(),
                Some(self.url_placeholder.as_str()),
                None,
            ),
            None => PatternUrlGenerator::new(),
        }
    }

    pub fn menu_renderer(&self) -> MenuRenderer {
        MenuRenderer::new(self.previous_text.as_str(), self.next_text.as_str())
    }
}
