//! showdown-catalog - external show metadata lookup
//!
//! Read-only client for the external catalog collaborator. The TMDB source
//! keeps transport and parsing separate: `parse_*` functions are pure and
//! testable offline, the async methods fetch over a shared HTTP wrapper.
//! Availability and rate limiting are the caller's concern.

pub mod config;
pub mod http;
pub mod source;
pub mod tmdb;
pub mod types;

pub use config::{ConfigError, TmdbConfig};
pub use http::{HttpClient, HttpError};
pub use source::{CatalogError, CatalogSourceInfo};
pub use tmdb::TmdbSource;
pub use types::{CatalogCandidate, ShowDetails};
