//! Shared, lock-protected sequence state.
//!
//! Readers take the shared side of a single `RwLock`; `advance` takes the
//! exclusive side for the arithmetic only. Snapshot persistence happens after
//! the lock is released, on a background task.

use std::sync::Arc;
use std::time::Duration;

use num_bigint::BigUint;
use parking_lot::RwLock;
use tracing::trace;

use crate::snapshot::{restore_terms, SnapshotWriter};
use crate::store::SnapshotStore;
use crate::terms::Terms;

/// The running Fibonacci sequence.
///
/// # Example
/// ```
/// use fibseq_core::Sequence;
///
/// let seq = Sequence::new();
/// assert_eq!(seq.current().to_string(), "0");
/// assert_eq!(seq.advance().to_string(), "1");
/// assert_eq!(seq.advance().to_string(), "1");
/// assert_eq!(seq.advance().to_string(), "2");
/// assert_eq!(seq.previous().to_string(), "1");
/// ```
#[derive(Debug)]
pub struct Sequence {
    state: RwLock<Terms>,
    writer: Option<SnapshotWriter>,
}

impl Sequence {
    /// A seeded, in-memory sequence with no persistence.
    #[must_use]
    pub fn new() -> Self {
        Self::from_terms(Terms::seed())
    }

    /// A sequence starting at `terms`, with no persistence.
    #[must_use]
    pub fn from_terms(terms: Terms) -> Self {
        Self {
            state: RwLock::new(terms),
            writer: None,
        }
    }

    /// A sequence starting at `terms` that persists every advance through `writer`.
    #[must_use]
    pub fn with_writer(terms: Terms, writer: SnapshotWriter) -> Self {
        Self {
            state: RwLock::new(terms),
            writer: Some(writer),
        }
    }

    /// Restore from `store` and persist subsequent advances back to it.
    ///
    /// Restore failures fall back to the seed; they are never returned.
    /// Must be called from within a tokio runtime, which is also where
    /// snapshot writes will be spawned.
    pub async fn restore(store: Arc<dyn SnapshotStore>, timeout: Duration) -> Self {
        let terms = restore_terms(store.as_ref(), timeout).await;
        Self::with_writer(terms, SnapshotWriter::on_current_runtime(store, timeout))
    }

    /// The current term.
    #[must_use]
    pub fn current(&self) -> BigUint {
        self.state.read().current.clone()
    }

    /// The previous term.
    #[must_use]
    pub fn previous(&self) -> BigUint {
        self.state.read().previous.clone()
    }

    /// All three terms from a single read.
    #[must_use]
    pub fn terms(&self) -> Terms {
        self.state.read().clone()
    }

    /// Advance by one term and return the new current term.
    ///
    /// When persistence is configured the new value is handed to the snapshot
    /// writer after the exclusive lock has been released; the write is not
    /// awaited.
    pub fn advance(&self) -> BigUint {
        let current = self.state.write().advance();
        trace!(%current, "advanced sequence");

        if let Some(writer) = &self.writer {
            writer.submit(&current);
        }
        current
    }

    /// Whether advances are persisted.
    #[must_use]
    pub fn is_persistent(&self) -> bool {
        self.writer.is_some()
    }
}

impl Default for Sequence {
    fn default() -> Self {
        Self::new()
    }
}
