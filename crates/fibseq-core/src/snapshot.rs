//! Snapshot restore at startup and fire-and-forget snapshot writes.

use std::sync::Arc;
use std::time::Duration;

use num_bigint::BigUint;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::constants::SNAPSHOT_KEY;
use crate::store::{SnapshotStore, StoreError};
use crate::terms::Terms;

/// Parse a stored snapshot into a non-negative integer.
///
/// Surrounding whitespace is ignored; signs and any other characters are
/// rejected.
///
/// # Example
/// ```
/// use fibseq_core::snapshot::parse_snapshot;
///
/// assert_eq!(parse_snapshot(" 21\n").unwrap().to_string(), "21");
/// assert!(parse_snapshot("five").is_err());
/// assert!(parse_snapshot("-5").is_err());
/// ```
pub fn parse_snapshot(raw: &str) -> Result<BigUint, StoreError> {
    let digits = raw.trim();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(StoreError::InvalidSnapshot(raw.to_owned()));
    }
    digits
        .parse()
        .map_err(|_| StoreError::InvalidSnapshot(raw.to_owned()))
}

/// Fetch and parse the persisted `current` term, bounded by `timeout`.
pub async fn fetch_snapshot(
    store: &dyn SnapshotStore,
    timeout: Duration,
) -> Result<Option<BigUint>, StoreError> {
    let raw = tokio::time::timeout(timeout, store.get(SNAPSHOT_KEY))
        .await
        .map_err(|_| StoreError::Timeout(timeout))??;
    raw.as_deref().map(parse_snapshot).transpose()
}

/// Reconcile the starting terms from the store.
///
/// Any failure (unreachable store, missing key, malformed value, timeout)
/// falls back to [`Terms::seed`]. Nothing is returned to the caller but the
/// terms; the reason is logged.
pub async fn restore_terms(store: &dyn SnapshotStore, timeout: Duration) -> Terms {
    match fetch_snapshot(store, timeout).await {
        Ok(Some(current)) => {
            let terms = Terms::from_current(current);
            info!(%terms, "restored sequence from snapshot");
            terms
        }
        Ok(None) => {
            info!(key = SNAPSHOT_KEY, "no snapshot found, starting from seed");
            Terms::seed()
        }
        Err(e) => {
            warn!(error = %e, "snapshot restore failed, starting from seed");
            Terms::seed()
        }
    }
}

/// Submits snapshot writes as independent background tasks.
///
/// Writes are at-most-once and unordered: nothing is retried, overlapping
/// writes may land in any order, and the last one to land wins. Each attempt
/// is bounded by the configured timeout. Failures are logged and dropped.
#[derive(Clone)]
pub struct SnapshotWriter {
    store: Arc<dyn SnapshotStore>,
    timeout: Duration,
    runtime: Handle,
}

impl SnapshotWriter {
    /// Create a writer that spawns onto `runtime`.
    #[must_use]
    pub fn new(store: Arc<dyn SnapshotStore>, timeout: Duration, runtime: Handle) -> Self {
        Self {
            store,
            timeout,
            runtime,
        }
    }

    /// Create a writer bound to the runtime of the calling task.
    ///
    /// Panics when called outside a tokio runtime.
    #[must_use]
    pub fn on_current_runtime(store: Arc<dyn SnapshotStore>, timeout: Duration) -> Self {
        Self::new(store, timeout, Handle::current())
    }

    /// Persist `current` in the background. The handle may be dropped.
    pub fn submit(&self, current: &BigUint) -> JoinHandle<()> {
        let store = Arc::clone(&self.store);
        let value = current.to_string();
        let timeout = self.timeout;
        self.runtime.spawn(async move {
            match tokio::time::timeout(timeout, store.set(SNAPSHOT_KEY, &value)).await {
                Ok(Ok(())) => debug!(current = %value, "snapshot persisted"),
                Ok(Err(e)) => warn!(error = %e, current = %value, "failed to persist snapshot"),
                Err(_) => warn!(
                    error = %StoreError::Timeout(timeout),
                    current = %value,
                    "failed to persist snapshot"
                ),
            }
        })
    }
}

impl std::fmt::Debug for SnapshotWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SnapshotWriter")
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}
