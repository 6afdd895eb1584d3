//! Remote persisted store seam.
//!
//! The remote keeps three collections per user: rank rows (external id +
//! position), wish rows (external id, insertion-ordered), and descriptive
//! metadata keyed by external id. All operations are scoped per user and
//! may suspend on network I/O.

use serde::{Deserialize, Serialize};

use showdown_core::{CatalogId, Show};

/// Remote-side user identity.
pub type UserId = String;

/// One ranked entry as the remote stores it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankRow {
    pub external_id: CatalogId,
    pub position: usize,
}

/// Descriptive fields for one catalog id, as the remote stores them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetadataRow {
    pub external_id: CatalogId,
    pub title: String,
    pub poster_ref: Option<String>,
    pub year: Option<i32>,
    pub overview: Option<String>,
    pub genre_tags: Vec<String>,
}

impl MetadataRow {
    /// Extract the pushable fields of a local item. `None` for local-only
    /// items (no external id): those are invisible to synchronization.
    pub fn from_show(show: &Show) -> Option<Self> {
        Some(Self {
            external_id: show.external_id?,
            title: show.title.clone(),
            poster_ref: show.poster_ref.clone(),
            year: show.year,
            overview: show.overview.clone(),
            genre_tags: show.genre_tags.clone(),
        })
    }

    /// Materialize a local item from remote metadata. Local identity and
    /// creation time are freshly assigned; neither is persisted remotely.
    pub fn to_show(&self) -> Show {
        let mut show = Show::new(self.title.clone()).with_external_id(self.external_id);
        show.poster_ref = self.poster_ref.clone();
        show.year = self.year;
        show.overview = self.overview.clone();
        show.genre_tags = self.genre_tags.clone();
        show
    }
}

/// A remote operation failed. The message is surfaced verbatim to callers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{operation}: {message}")]
pub struct RemoteError {
    /// Which store operation failed.
    pub operation: String,
    /// The backend's own error message.
    pub message: String,
}

impl RemoteError {
    pub fn new(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            message: message.into(),
        }
    }
}

/// The trait remote persisted stores implement.
///
/// Replace operations are delete-all-then-bulk-insert in the order given;
/// there is no optimistic-concurrency token, so concurrent pushes from two
/// devices race under last-writer-wins.
#[allow(async_fn_in_trait)]
pub trait RemoteStore: Send + Sync {
    /// Insert-or-update descriptive metadata rows.
    async fn upsert_metadata(&self, rows: &[MetadataRow]) -> Result<(), RemoteError>;

    /// Replace the user's rank rows; `ordered` is most-preferred first and
    /// becomes positions `0..n`.
    async fn replace_ranked_rows(
        &self,
        user: &UserId,
        ordered: &[CatalogId],
    ) -> Result<(), RemoteError>;

    /// Replace the user's wish rows, keeping the given order.
    async fn replace_wish_rows(&self, user: &UserId, ids: &[CatalogId]) -> Result<(), RemoteError>;

    /// Read the user's rank rows (any order; positions carry the truth).
    async fn read_ranked(&self, user: &UserId) -> Result<Vec<RankRow>, RemoteError>;

    /// Read the user's wish ids in stored order.
    async fn read_wish(&self, user: &UserId) -> Result<Vec<CatalogId>, RemoteError>;

    /// Read metadata for the given ids; unknown ids are simply absent from
    /// the result.
    async fn read_metadata(
        &self,
        user: &UserId,
        ids: &[CatalogId],
    ) -> Result<Vec<MetadataRow>, RemoteError>;
}
