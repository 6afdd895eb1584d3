//! In-memory remote store, for tests and offline use.

use std::collections::{BTreeMap, HashMap};
use std::sync::Mutex;

use showdown_core::CatalogId;

use crate::remote::{MetadataRow, RankRow, RemoteError, RemoteStore, UserId};

#[derive(Debug, Default)]
struct MemoryState {
    metadata: BTreeMap<CatalogId, MetadataRow>,
    ranked: HashMap<UserId, Vec<RankRow>>,
    wish: HashMap<UserId, Vec<CatalogId>>,
}

/// A [`RemoteStore`] kept entirely in process memory.
#[derive(Debug, Default)]
pub struct MemoryRemote {
    state: Mutex<MemoryState>,
}

impl MemoryRemote {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of a user's rank rows, for assertions.
    pub fn ranked_snapshot(&self, user: &UserId) -> Vec<RankRow> {
        self.state
            .lock()
            .map(|s| s.ranked.get(user).cloned().unwrap_or_default())
            .unwrap_or_default()
    }

    /// Snapshot of a user's wish ids, for assertions.
    pub fn wish_snapshot(&self, user: &UserId) -> Vec<CatalogId> {
        self.state
            .lock()
            .map(|s| s.wish.get(user).cloned().unwrap_or_default())
            .unwrap_or_default()
    }

    /// Snapshot of all stored metadata, for assertions.
    pub fn metadata_snapshot(&self) -> Vec<MetadataRow> {
        self.state
            .lock()
            .map(|s| s.metadata.values().cloned().collect())
            .unwrap_or_default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, MemoryState>, RemoteError> {
        self.state
            .lock()
            .map_err(|e| RemoteError::new("memory", e.to_string()))
    }
}

impl RemoteStore for MemoryRemote {
    async fn upsert_metadata(&self, rows: &[MetadataRow]) -> Result<(), RemoteError> {
        let mut state = self.lock()?;
        for row in rows {
            state.metadata.insert(row.external_id, row.clone());
        }
        Ok(())
    }

    async fn replace_ranked_rows(
        &self,
        user: &UserId,
        ordered: &[CatalogId],
    ) -> Result<(), RemoteError> {
        let rows = ordered
            .iter()
            .enumerate()
            .map(|(position, &external_id)| RankRow {
                external_id,
                position,
            })
            .collect();
        self.lock()?.ranked.insert(user.clone(), rows);
        Ok(())
    }

    async fn replace_wish_rows(&self, user: &UserId, ids: &[CatalogId]) -> Result<(), RemoteError> {
        self.lock()?.wish.insert(user.clone(), ids.to_vec());
        Ok(())
    }

    async fn read_ranked(&self, user: &UserId) -> Result<Vec<RankRow>, RemoteError> {
        Ok(self.lock()?.ranked.get(user).cloned().unwrap_or_default())
    }

    async fn read_wish(&self, user: &UserId) -> Result<Vec<CatalogId>, RemoteError> {
        Ok(self.lock()?.wish.get(user).cloned().unwrap_or_default())
    }

    async fn read_metadata(
        &self,
        _user: &UserId,
        ids: &[CatalogId],
    ) -> Result<Vec<MetadataRow>, RemoteError> {
        let state = self.lock()?;
        Ok(ids
            .iter()
            .filter_map(|id| state.metadata.get(id).cloned())
            .collect())
    }
}
