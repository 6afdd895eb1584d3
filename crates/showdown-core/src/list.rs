//! Ordered list and wish list stores.
//!
//! `RankedList` owns the canonical per-user sequence, most-preferred first.
//! `WishList` holds not-yet-ranked bookmarks in creation order. Expected
//! conditions (duplicates, out-of-range indices) are silent no-ops; every
//! mutator reports whether anything changed so callers can tell.

use serde::{Deserialize, Serialize};

use crate::item::{CatalogId, Show};
use crate::rating::{derived_rating, RatedShow};

/// The ranked sequence. Invariants: no duplicate title (case-insensitive),
/// no duplicate external id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RankedList {
    items: Vec<Show>,
}

impl RankedList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a list from an already-ordered sequence, dropping any entry
    /// that would violate the duplicate invariants. Used when hydrating from
    /// a remote copy whose rows are trusted to be mostly well-formed.
    pub fn from_items(items: Vec<Show>) -> Self {
        let mut list = Self::new();
        for item in items {
            let index = list.items.len();
            list.insert_at(item, index);
        }
        list
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Show> {
        self.items.get(index)
    }

    pub fn items(&self) -> &[Show] {
        &self.items
    }

    pub fn contains_title(&self, title: &str) -> bool {
        self.items.iter().any(|s| s.title_matches(title))
    }

    pub fn contains_external_id(&self, external_id: CatalogId) -> bool {
        self.items.iter().any(|s| s.external_id == Some(external_id))
    }

    /// Position of a catalog id, if ranked.
    pub fn position_of(&self, external_id: CatalogId) -> Option<usize> {
        self.items
            .iter()
            .position(|s| s.external_id == Some(external_id))
    }

    /// Seed an empty list. No-op (returns false) when the list already has
    /// entries or the title collides.
    pub fn insert_first(&mut self, item: Show) -> bool {
        if !self.items.is_empty() || self.collides(&item) {
            return false;
        }
        self.items.push(item);
        true
    }

    /// Splice at `index` in `[0, len]`. No-op on collision or bad index.
    pub fn insert_at(&mut self, item: Show, index: usize) -> bool {
        if index > self.items.len() || self.collides(&item) {
            return false;
        }
        self.items.insert(index, item);
        true
    }

    /// Remove the entry carrying this catalog id, if any.
    pub fn remove_by_external_id(&mut self, external_id: CatalogId) -> Option<Show> {
        let index = self.position_of(external_id)?;
        Some(self.items.remove(index))
    }

    /// Move one entry from `from` to `to`, preserving the relative order of
    /// everything else. Indices are positions in the final array; invalid
    /// indices are a no-op.
    pub fn reorder(&mut self, from: usize, to: usize) -> bool {
        if from >= self.items.len() || to >= self.items.len() {
            return false;
        }
        if from == to {
            return false;
        }
        let item = self.items.remove(from);
        self.items.insert(to, item);
        true
    }

    /// The full sequence with derived ratings attached.
    pub fn rated(&self) -> Vec<RatedShow> {
        let total = self.items.len();
        self.items
            .iter()
            .enumerate()
            .map(|(position, show)| RatedShow {
                show: show.clone(),
                position,
                rating: derived_rating(position, total),
            })
            .collect()
    }

    fn collides(&self, item: &Show) -> bool {
        if self.contains_title(&item.title) {
            return true;
        }
        match item.external_id {
            Some(id) => self.contains_external_id(id),
            None => false,
        }
    }
}

/// Not-yet-ranked bookmarks, ordered by creation. Disjoint from the ranked
/// list by external id; the engine and the sync adapter enforce that side.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WishList {
    items: Vec<Show>,
}

impl WishList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items(items: Vec<Show>) -> Self {
        let mut list = Self::new();
        for item in items {
            list.push(item);
        }
        list
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[Show] {
        &self.items
    }

    pub fn contains_external_id(&self, external_id: CatalogId) -> bool {
        self.items.iter().any(|s| s.external_id == Some(external_id))
    }

    /// Append a bookmark. No-op on a duplicate external id or title.
    pub fn push(&mut self, item: Show) -> bool {
        let duplicate = self.items.iter().any(|s| {
            s.title_matches(&item.title)
                || (s.external_id.is_some() && s.external_id == item.external_id)
        });
        if duplicate {
            return false;
        }
        self.items.push(item);
        true
    }

    pub fn remove_by_external_id(&mut self, external_id: CatalogId) -> Option<Show> {
        let index = self
            .items
            .iter()
            .position(|s| s.external_id == Some(external_id))?;
        Some(self.items.remove(index))
    }
}
