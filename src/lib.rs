//! Shared helpers for the workspace-level integration tests.

use std::time::Duration;

use fibseq_core::{MemoryStore, SNAPSHOT_KEY};

/// Poll `store` until the snapshot equals `expected` or `deadline` passes.
///
/// Snapshot writes are fire-and-forget, so tests have to wait for them to land.
pub async fn wait_for_snapshot(store: &MemoryStore, expected: &str, deadline: Duration) -> bool {
    let step = Duration::from_millis(5);
    let mut waited = Duration::ZERO;
    loop {
        if store.value(SNAPSHOT_KEY).as_deref() == Some(expected) {
            return true;
        }
        if waited >= deadline {
            return false;
        }
        tokio::time::sleep(step).await;
        waited += step;
    }
}
