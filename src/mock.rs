//! Mock collaborators for isolating [`Pagination`] in tests.

use mockall::mock;

use crate::errors::PaginationResult;
use crate::pagination::Pagination;
use crate::render::Renderer;
use crate::url::UrlGenerator;

mock! {
    pub PageUrlGenerator {}

    impl UrlGenerator for PageUrlGenerator {
        fn generate(&self, page: i64) -> String;
    }
}

mock! {
    pub PageRenderer {}

    impl Renderer for PageRenderer {
        fn render(&self, pagination: &Pagination) -> PaginationResult<String>;
    }
}
