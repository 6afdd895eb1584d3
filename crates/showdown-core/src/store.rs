//! Local list persistence.
//!
//! One ranked-sequence record and one wish-sequence record per user scope,
//! keyed by an identity-derived scope key. The encoding must round-trip
//! every `Show` field.

use serde::{Deserialize, Serialize};

use crate::item::Show;

/// Storage scope: a signed-in user or the guest scope.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScopeKey {
    User(String),
    Guest,
}

impl ScopeKey {
    /// The key the records are stored under.
    pub fn as_key(&self) -> String {
        match self {
            ScopeKey::User(id) => format!("user:{id}"),
            ScopeKey::Guest => "guest".to_string(),
        }
    }
}

impl std::fmt::Display for ScopeKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_key())
    }
}

/// Both sequences for one scope, as persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoredLists {
    pub ranked: Vec<Show>,
    pub wish: Vec<Show>,
}

/// The trait local storage backends implement.
pub trait ListStore: Send + Sync {
    /// Read both sequences for a scope; `None` if never saved.
    fn load(&self, scope: &ScopeKey) -> Result<Option<StoredLists>, StoreError>;

    /// Replace both sequences for a scope.
    fn save(&self, scope: &ScopeKey, lists: &StoredLists) -> Result<(), StoreError>;

    /// Drop everything stored for a scope.
    fn clear(&self, scope: &ScopeKey) -> Result<(), StoreError>;
}

/// Errors from local storage.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scope_keys_are_distinct() {
        assert_eq!(ScopeKey::Guest.as_key(), "guest");
        assert_eq!(ScopeKey::User("u1".into()).as_key(), "user:u1");
        assert_ne!(
            ScopeKey::User("guest".into()).as_key(),
            ScopeKey::Guest.as_key()
        );
    }

    #[test]
    fn stored_lists_serde_round_trip() {
        let lists = StoredLists {
            ranked: vec![Show::new("A").with_external_id(1)],
            wish: vec![Show::new("B")],
        };
        let json = serde_json::to_string(&lists).unwrap();
        let back: StoredLists = serde_json::from_str(&json).unwrap();
        assert_eq!(lists, back);
    }
}
