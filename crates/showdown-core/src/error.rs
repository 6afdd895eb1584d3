//! Error types for showdown-core

use thiserror::Error;

use crate::item::CatalogId;

/// Result type alias for ranking operations
pub type Result<T> = std::result::Result<T, RankError>;

/// Main error type for ranking operations
#[derive(Error, Debug)]
pub enum RankError {
    /// Rejected input; nothing was mutated
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// A comparison target or session referent is gone; the current session
    /// cannot continue and the caller must restart the insertion
    #[error("Not found: {0}")]
    NotFound(String),

    /// A remote call failed; the first failure's message, verbatim
    #[error("Remote error: {0}")]
    Remote(String),

    /// Session bounds or positions in a state correct use cannot produce.
    /// Aborts the session instead of guessing a recovery.
    #[error("State invariant violated: {0}")]
    Invariant(String),
}

/// Locally-recoverable rejections of an insertion request
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Title must not be empty")]
    EmptyTitle,

    #[error("A show titled '{0}' is already ranked")]
    DuplicateTitle(String),

    #[error("A show with catalog id {0} is already ranked")]
    DuplicateExternalId(CatalogId),

    /// `start_insertion` on an empty list; the first show is inserted
    /// directly, without a comparison session
    #[error("The ranked list is empty; insert the first show directly")]
    ListEmpty,

    /// `insert_first` on a list that already has entries
    #[error("The ranked list already has entries; start a comparison session instead")]
    ListNotEmpty,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_converts_into_rank_error() {
        let err: RankError = ValidationError::DuplicateTitle("Severance".into()).into();
        assert!(err.to_string().contains("Severance"));
    }

    #[test]
    fn remote_message_is_verbatim() {
        let err = RankError::Remote("replace_ranked_rows: connection reset".into());
        assert_eq!(
            err.to_string(),
            "Remote error: replace_ranked_rows: connection reset"
        );
    }
}
