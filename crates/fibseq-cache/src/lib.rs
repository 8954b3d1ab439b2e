//! # fibseq-cache
//!
//! Redis implementation of [`SnapshotStore`].
//!
//! The connection is opened lazily on first use and shared afterwards; the
//! underlying connection manager reconnects on its own after a dropped
//! connection. Address, credentials and database index all come from the
//! connection URL, e.g. `redis://:secret@redis:6379/0`.

use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::{AsyncCommands, RedisError};
use tokio::sync::OnceCell;
use tracing::debug;

use fibseq_core::store::{SnapshotStore, StoreError};

/// Snapshot store backed by a Redis server.
pub struct RedisStore {
    client: redis::Client,
    connection: OnceCell<ConnectionManager>,
}

impl RedisStore {
    /// Validate `url` and prepare a client. No connection is made yet.
    pub fn open(url: &str) -> Result<Self, StoreError> {
        let client = redis::Client::open(url).map_err(|e| StoreError::Backend(e.to_string()))?;
        Ok(Self {
            client,
            connection: OnceCell::new(),
        })
    }

    async fn connection(&self) -> Result<ConnectionManager, StoreError> {
        self.connection
            .get_or_try_init(|| async {
                debug!(addr = ?self.client.get_connection_info().addr, "connecting to redis");
                self.client
                    .get_connection_manager()
                    .await
                    .map_err(map_redis_error)
            })
            .await
            .cloned()
    }
}

impl std::fmt::Debug for RedisStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisStore")
            .field("addr", &self.client.get_connection_info().addr)
            .field("connected", &self.connection.initialized())
            .finish()
    }
}

#[async_trait]
impl SnapshotStore for RedisStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let mut conn = self.connection().await?;
        let value: Option<String> = conn.get(key).await.map_err(map_redis_error)?;
        Ok(value)
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut conn = self.connection().await?;
        let _: () = conn.set(key, value).await.map_err(map_redis_error)?;
        Ok(())
    }
}

fn map_redis_error(e: RedisError) -> StoreError {
    if e.is_io_error() || e.is_connection_refusal() || e.is_connection_dropped() || e.is_timeout()
    {
        StoreError::Unavailable(e.to_string())
    } else {
        StoreError::Backend(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_accepts_url_with_credentials() {
        let store = RedisStore::open("redis://:foobar@redis:2020/42").unwrap();
        let debug = format!("{store:?}");
        assert!(debug.contains("redis"));
        assert!(debug.contains("2020"));
        assert!(debug.contains("connected: false"));
        assert!(!debug.contains("foobar"));
    }

    #[test]
    fn open_rejects_invalid_url() {
        assert!(matches!(
            RedisStore::open("not a url"),
            Err(StoreError::Backend(_))
        ));
    }

    /// Requires a live server: `FIBSEQ_TEST_REDIS_URL=redis://127.0.0.1:6379/15`.
    #[tokio::test]
    #[ignore = "needs a running redis server"]
    async fn round_trip_against_live_server() {
        let url = std::env::var("FIBSEQ_TEST_REDIS_URL")
            .unwrap_or_else(|_| "redis://127.0.0.1:6379/15".into());
        let store = RedisStore::open(&url).unwrap();

        store.set("fibseq_test_key", "13").await.unwrap();
        assert_eq!(
            store.get("fibseq_test_key").await.unwrap().as_deref(),
            Some("13")
        );
        assert_eq!(store.get("fibseq_test_missing").await.unwrap(), None);
    }
}
