//! # fibseq-core
//!
//! Concurrent Fibonacci sequence state for the fibseq server: the three
//! tracked terms, their rolling update under a reader/writer lock, and the
//! snapshot restore and persistence that let the sequence survive restarts.

pub mod constants;
pub mod sequence;
pub mod snapshot;
pub mod store;
pub mod terms;

// Re-exports
pub use constants::{
    exit_codes, DEFAULT_CACHE_TIMEOUT, DEFAULT_LISTEN_ADDR, DEFAULT_REDIS_URL, SNAPSHOT_KEY,
};
pub use sequence::Sequence;
pub use snapshot::{parse_snapshot, restore_terms, SnapshotWriter};
pub use store::{MemoryStore, SnapshotStore, StoreError};
pub use terms::Terms;
