//! Catalog-facing domain types

use serde::{Deserialize, Serialize};
use showdown_core::{CatalogId, Show};

/// One hit from a title search: enough to show a picker row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogCandidate {
    pub external_id: CatalogId,
    pub title: String,
    pub year: Option<i32>,
    pub poster_ref: Option<String>,
    pub overview: Option<String>,
}

/// Full descriptive fields for one catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShowDetails {
    pub external_id: CatalogId,
    pub title: String,
    pub year: Option<i32>,
    pub poster_ref: Option<String>,
    pub overview: Option<String>,
    pub genre_tags: Vec<String>,
}

impl ShowDetails {
    /// Materialize a local item from catalog metadata.
    pub fn into_show(self) -> Show {
        let mut show = Show::new(self.title).with_external_id(self.external_id);
        show.year = self.year;
        show.poster_ref = self.poster_ref;
        show.overview = self.overview;
        show.genre_tags = self.genre_tags;
        show
    }
}
