use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Local item identity (UUID v4).
pub type ShowId = Uuid;

/// Stable identifier into the external metadata catalog.
pub type CatalogId = i64;

/// A show as it appears in a user's lists.
///
/// `id` is the local identity; `external_id` references the catalog entry the
/// descriptive fields were fetched from. Items created by hand carry no
/// external id and are invisible to synchronization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Show {
    pub id: ShowId,
    pub external_id: Option<CatalogId>,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub poster_ref: Option<String>,
    pub year: Option<i32>,
    pub overview: Option<String>,
    pub genre_tags: Vec<String>,
}

impl Show {
    /// Create a local-only show with just a title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            external_id: None,
            title: title.into(),
            created_at: Utc::now(),
            poster_ref: None,
            year: None,
            overview: None,
            genre_tags: Vec::new(),
        }
    }

    /// Attach a catalog reference.
    pub fn with_external_id(mut self, external_id: CatalogId) -> Self {
        self.external_id = Some(external_id);
        self
    }

    /// Case-insensitive title comparison, used for duplicate detection.
    pub fn title_matches(&self, other: &str) -> bool {
        self.title.to_lowercase() == other.to_lowercase()
    }
}
