//! Common types for catalog sources

use crate::http::HttpError;

/// Errors from a catalog source.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("HTTP error: {0}")]
    Http(HttpError),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Rate limited")]
    RateLimit,

    #[error("Not found")]
    NotFound,

    #[error("Invalid query: {0}")]
    InvalidQuery(String),
}

impl From<HttpError> for CatalogError {
    fn from(e: HttpError) -> Self {
        match e {
            HttpError::RateLimited => CatalogError::RateLimit,
            HttpError::NotFound => CatalogError::NotFound,
            other => CatalogError::Http(other),
        }
    }
}

/// Static description of a catalog source.
pub struct CatalogSourceInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub base_url: &'static str,
    pub rate_limit_per_second: f32,
    pub requires_api_key: bool,
}
