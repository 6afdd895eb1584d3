//! showdown-sync - local/remote list reconciliation
//!
//! Replace-semantics synchronization between the in-memory lists of
//! showdown-core and a remote persisted store, under one precedence rule:
//! ranked beats wished. Intentionally not a CRDT: concurrent pushes from
//! two devices race under last-writer-wins.

pub mod adapter;
pub mod error;
pub mod memory;
pub mod remote;

pub use adapter::{HydratedLists, SyncAdapter};
pub use error::SyncError;
pub use memory::MemoryRemote;
pub use remote::{MetadataRow, RankRow, RemoteError, RemoteStore, UserId};
