//! Error types for showdown-sync

use thiserror::Error;

use crate::remote::RemoteError;

/// Errors from a push or pull.
#[derive(Error, Debug)]
pub enum SyncError {
    /// A remote store call failed; the first failure aborts the operation
    /// and committed steps stay committed.
    #[error("Remote error: {0}")]
    Remote(#[from] RemoteError),
}

/// Sync failures surface to the engine layer as remote errors, message
/// preserved verbatim.
impl From<SyncError> for showdown_core::RankError {
    fn from(e: SyncError) -> Self {
        match e {
            SyncError::Remote(inner) => showdown_core::RankError::Remote(inner.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_message_survives_the_climb() {
        let sync_err: SyncError = RemoteError::new("read_ranked", "timeout after 30s").into();
        let rank_err: showdown_core::RankError = sync_err.into();
        assert_eq!(rank_err.to_string(), "Remote error: read_ranked: timeout after 30s");
    }
}
