//! Engine facade over the ranked list, the wish list, and comparison
//! sessions.
//!
//! The engine owns the two lists for one user scope and applies resolved
//! sessions to them. Sessions themselves stay caller-owned values; the
//! engine never stores one, which also settles the concurrent-session
//! question: a second simultaneous session is simply a second value, and
//! serializing them is the caller's job.

use crate::error::{RankError, Result, ValidationError};
use crate::item::{CatalogId, Show};
use crate::list::{RankedList, WishList};
use crate::rating::RatedShow;
use crate::session::{ComparisonSession, Preference, SessionStep};

/// Outcome of feeding one answer or skip through the engine.
#[derive(Debug, Clone, PartialEq)]
pub enum InsertionStep {
    /// More questions to ask; hand the session back to the user.
    Pending(ComparisonSession),
    /// The show was spliced into the ranked list at this position.
    Inserted(usize),
}

/// Per-scope ranking engine.
#[derive(Debug, Clone, Default)]
pub struct RankingEngine {
    ranked: RankedList,
    wish: WishList,
}

impl RankingEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adopt already-assembled lists, e.g. from hydration.
    pub fn with_lists(ranked: RankedList, wish: WishList) -> Self {
        Self { ranked, wish }
    }

    pub fn ranked(&self) -> &RankedList {
        &self.ranked
    }

    pub fn wish(&self) -> &WishList {
        &self.wish
    }

    /// Replace both lists wholesale (hydration applies remote truth).
    pub fn replace_lists(&mut self, ranked: RankedList, wish: WishList) {
        self.ranked = ranked;
        self.wish = wish;
    }

    /// Seed an empty ranked list with its first show.
    pub fn insert_first(&mut self, item: Show) -> Result<()> {
        self.validate_candidate(&item)?;
        if !self.ranked.is_empty() {
            return Err(ValidationError::ListNotEmpty.into());
        }
        if !self.ranked.insert_first(item.clone()) {
            return Err(RankError::Invariant(
                "empty list refused its first insert".into(),
            ));
        }
        self.unwish(&item);
        Ok(())
    }

    /// Open a comparison session that will place `item` into the ranked
    /// list. Fails on an empty list (use [`insert_first`]) and on duplicate
    /// titles or catalog ids.
    ///
    /// [`insert_first`]: RankingEngine::insert_first
    pub fn start_insertion(&self, item: Show) -> Result<ComparisonSession> {
        self.validate_candidate(&item)?;
        if self.ranked.is_empty() {
            return Err(ValidationError::ListEmpty.into());
        }
        ComparisonSession::start(item, self.ranked.len())
            .ok_or_else(|| RankError::Invariant("session over an empty window".into()))
    }

    /// Feed a decisive answer through the session; applies the insertion
    /// when the window collapses.
    ///
    /// Fatal if the comparison target no longer exists (the list shrank
    /// under an active session); the caller must restart the insertion.
    pub fn answer(
        &mut self,
        session: ComparisonSession,
        preference: Preference,
    ) -> Result<InsertionStep> {
        if session.compare_index() >= self.ranked.len() {
            return Err(RankError::NotFound(format!(
                "comparison target at index {} is gone",
                session.compare_index()
            )));
        }
        self.apply_step(session.answer(preference))
    }

    /// Feed a skip through the session; applies the forced insertion when
    /// the skip limit or window exhaustion terminates it.
    pub fn skip(&mut self, session: ComparisonSession) -> Result<InsertionStep> {
        self.apply_step(session.skip())
    }

    /// The ranked list with derived ratings attached.
    pub fn ordered(&self) -> Vec<RatedShow> {
        self.ranked.rated()
    }

    pub fn reorder(&mut self, from: usize, to: usize) -> bool {
        self.ranked.reorder(from, to)
    }

    pub fn remove_by_external_id(&mut self, external_id: CatalogId) -> Option<Show> {
        self.ranked.remove_by_external_id(external_id)
    }

    /// Bookmark a show for later ranking. A show that is already ranked
    /// cannot be wished: ranked beats wished.
    pub fn add_to_wish(&mut self, item: Show) -> Result<()> {
        if item.title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle.into());
        }
        if let Some(id) = item.external_id {
            if self.ranked.contains_external_id(id) {
                return Err(ValidationError::DuplicateExternalId(id).into());
            }
        }
        if !self.wish.push(item.clone()) {
            return Err(ValidationError::DuplicateTitle(item.title).into());
        }
        Ok(())
    }

    pub fn remove_from_wish(&mut self, external_id: CatalogId) -> Option<Show> {
        self.wish.remove_by_external_id(external_id)
    }

    fn apply_step(&mut self, step: SessionStep) -> Result<InsertionStep> {
        match step {
            SessionStep::Active(session) => Ok(InsertionStep::Pending(session)),
            SessionStep::Resolved { item, position } => {
                if position > self.ranked.len() {
                    return Err(RankError::Invariant(format!(
                        "insertion point {position} outside a list of {}",
                        self.ranked.len()
                    )));
                }
                if !self.ranked.insert_at(item.clone(), position) {
                    // The list changed under the session (caller contract
                    // violation); abort rather than guess.
                    return Err(RankError::Invariant(format!(
                        "ranked list refused '{}' at {position}",
                        item.title
                    )));
                }
                self.unwish(&item);
                Ok(InsertionStep::Inserted(position))
            }
        }
    }

    /// A show that just became ranked leaves the wish list.
    fn unwish(&mut self, item: &Show) {
        if let Some(id) = item.external_id {
            self.wish.remove_by_external_id(id);
        }
    }

    fn validate_candidate(&self, item: &Show) -> Result<()> {
        if item.title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle.into());
        }
        if self.ranked.contains_title(&item.title) {
            return Err(ValidationError::DuplicateTitle(item.title.clone()).into());
        }
        if let Some(id) = item.external_id {
            if self.ranked.contains_external_id(id) {
                return Err(ValidationError::DuplicateExternalId(id).into());
            }
        }
        Ok(())
    }
}
