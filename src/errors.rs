use thiserror::Error;

/// Failures of the collaborators around the page-window calculation.
///
/// Numeric input never fails: out-of-range values are normalized instead.
#[derive(Debug, Error)]
pub enum PaginationError {
    #[error("Template error: {0}")]
    Template(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Renderer error: {0}")]
    Renderer(String),
}

pub type PaginationResult<T> = Result<T, PaginationError>;

impl From<tera::Error> for PaginationError {
    fn from(err: tera::Error) -> Self {
        PaginationError::Template(err.to_string())
    }
}

impl From<config::ConfigError> for PaginationError {
    fn from(err: config::ConfigError) -> Self {
        PaginationError::Config(err.to_string())
    }
}
