//! showdown-core - comparison-driven ranking engine
//!
//! Builds a strictly ordered personal ranking of shows from pairwise
//! comparisons instead of direct numeric scores:
//!
//! - **Item**: the show model (local identity + optional catalog reference)
//! - **List**: the ranked sequence and the wish-list bookmarks
//! - **Session**: adaptive binary-insertion protocol with skip and undo
//! - **Rating**: pure position-to-score derivation, never stored
//! - **Engine**: facade tying sessions to the lists
//! - **Store**: local persistence of both sequences per user scope

pub mod engine;
pub mod error;
pub mod item;
pub mod list;
pub mod rating;
pub mod recommend;
pub mod session;
pub mod store;

#[cfg(feature = "sqlite")]
pub mod sqlite_store;

pub use engine::{InsertionStep, RankingEngine};
pub use error::{RankError, Result, ValidationError};
pub use item::{CatalogId, Show, ShowId};
pub use list::{RankedList, WishList};
pub use rating::{derived_rating, RatedShow};
pub use recommend::{genre_affinities, ranked_wish_candidates, GenreAffinity};
pub use session::{ComparisonSession, Preference, SessionHistory, SessionStep, SKIP_LIMIT};
pub use store::{ListStore, ScopeKey, StoreError, StoredLists};

#[cfg(feature = "sqlite")]
pub use sqlite_store::SqliteListStore;
