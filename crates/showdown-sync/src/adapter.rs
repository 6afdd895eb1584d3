//! Reconciliation between the local lists and the remote store.
//!
//! Precedence rule: **ranked beats wished**. An external id that appears in
//! the remote rank rows never surfaces in the hydrated wish list, and a push
//! filters already-ranked ids out of the wish rows.
//!
//! Pushes are replace-based: metadata upsert first, then delete-all +
//! bulk-insert of rank rows, then the same for wish rows, so no row ever
//! references missing metadata. The first failing remote call aborts the
//! remainder; steps already committed are not rolled back.

use std::collections::{HashMap, HashSet};

use tracing::{debug, info, warn};

use showdown_core::{CatalogId, RankedList, WishList};

use crate::error::SyncError;
use crate::remote::{MetadataRow, RemoteStore, UserId};

/// Both lists as assembled from the remote truth.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HydratedLists {
    pub ranked: RankedList,
    pub wish: WishList,
}

/// Reconciles local state against one remote store.
pub struct SyncAdapter<R: RemoteStore> {
    remote: R,
}

impl<R: RemoteStore> SyncAdapter<R> {
    pub fn new(remote: R) -> Self {
        Self { remote }
    }

    pub fn remote(&self) -> &R {
        &self.remote
    }

    /// Pull the remote truth into freshly-assembled local lists.
    ///
    /// Ranked entries come back strictly in the remote's positional order.
    /// Ids with no resolvable metadata are dropped (and logged); wish rows
    /// already present in the ranked set are excluded.
    pub async fn hydrate(&self, user: &UserId) -> Result<HydratedLists, SyncError> {
        let mut rank_rows = self.remote.read_ranked(user).await?;
        rank_rows.sort_by_key(|row| row.position);
        let wish_ids = self.remote.read_wish(user).await?;

        let ranked_ids: Vec<CatalogId> = rank_rows.iter().map(|r| r.external_id).collect();
        let ranked_set: HashSet<CatalogId> = ranked_ids.iter().copied().collect();

        // Union, ranked first; one metadata read covers both lists.
        let mut wanted = ranked_ids.clone();
        wanted.extend(wish_ids.iter().filter(|id| !ranked_set.contains(id)));
        let metadata = self.remote.read_metadata(user, &wanted).await?;
        let by_id: HashMap<CatalogId, &MetadataRow> =
            metadata.iter().map(|m| (m.external_id, m)).collect();

        let mut ranked_shows = Vec::new();
        for id in &ranked_ids {
            match by_id.get(id) {
                Some(row) => ranked_shows.push(row.to_show()),
                None => warn!(external_id = id, "dropping ranked id with no metadata"),
            }
        }

        let mut wish_shows = Vec::new();
        for id in &wish_ids {
            if ranked_set.contains(id) {
                debug!(external_id = id, "wish row shadowed by ranked entry");
                continue;
            }
            match by_id.get(id) {
                Some(row) => wish_shows.push(row.to_show()),
                None => warn!(external_id = id, "dropping wish id with no metadata"),
            }
        }

        info!(
            user = %user,
            ranked = ranked_shows.len(),
            wish = wish_shows.len(),
            "hydrated lists from remote"
        );
        Ok(HydratedLists {
            ranked: RankedList::from_items(ranked_shows),
            wish: WishList::from_items(wish_shows),
        })
    }

    /// Push the local truth to the remote store.
    ///
    /// Items without an external id are never pushed; they stay local-only.
    pub async fn persist(
        &self,
        user: &UserId,
        ranked: &RankedList,
        wish: &WishList,
    ) -> Result<(), SyncError> {
        let ranked_ids: Vec<CatalogId> =
            ranked.items().iter().filter_map(|s| s.external_id).collect();
        let ranked_set: HashSet<CatalogId> = ranked_ids.iter().copied().collect();
        let wish_ids: Vec<CatalogId> = wish
            .items()
            .iter()
            .filter_map(|s| s.external_id)
            .filter(|id| !ranked_set.contains(id))
            .collect();

        // Metadata first, so no row ever points at a missing entry.
        let metadata: Vec<MetadataRow> = ranked
            .items()
            .iter()
            .chain(wish.items())
            .filter_map(MetadataRow::from_show)
            .collect();
        self.remote.upsert_metadata(&metadata).await?;
        self.remote.replace_ranked_rows(user, &ranked_ids).await?;
        self.remote.replace_wish_rows(user, &wish_ids).await?;

        let skipped = ranked.len() + wish.len() - metadata.len();
        if skipped > 0 {
            debug!(skipped, "local-only items were not pushed");
        }
        info!(
            user = %user,
            ranked = ranked_ids.len(),
            wish = wish_ids.len(),
            "persisted lists to remote"
        );
        Ok(())
    }
}
