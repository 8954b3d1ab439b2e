//! # fibseq-server
//!
//! HTTP API over a shared [`Sequence`]:
//!
//! | Route | Body |
//! |---|---|
//! | `GET /current` | `{"current": <int>}` |
//! | `GET /next` | `{"next": <int>}`, advancing the sequence |
//! | `GET /previous` | `{"previous": <int>}` |
//! | `GET /health` | `{"status": "healthy"}` |
//!
//! Every route runs behind [`guard::catch_panic`].

pub mod body;
pub mod guard;
pub mod handlers;

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::routing::get;
use axum::{middleware, Router};
use tokio::net::TcpListener;
use tracing::info;

use fibseq_core::{Sequence, DEFAULT_LISTEN_ADDR};

/// Application context handed to every handler.
#[derive(Debug)]
pub struct AppState {
    pub sequence: Sequence,
}

impl AppState {
    #[must_use]
    pub fn new(sequence: Sequence) -> Self {
        Self { sequence }
    }
}

/// Server error type.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// The listen address could not be bound.
    #[error("failed to bind {addr}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// The server stopped with an I/O error.
    #[error("server stopped unexpectedly")]
    Serve(#[from] std::io::Error),
}

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// `host:port` to listen on.
    pub listen: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: DEFAULT_LISTEN_ADDR.into(),
        }
    }
}

/// Build the API router.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/current", get(handlers::current))
        .route("/next", get(handlers::next))
        .route("/previous", get(handlers::previous))
        .route("/health", get(handlers::health))
        .layer(middleware::from_fn(guard::catch_panic))
        .with_state(state)
}

/// Bind the listen address. Failure here is fatal and not retried.
pub async fn bind(config: &ServerConfig) -> Result<TcpListener, ServerError> {
    TcpListener::bind(&config.listen)
        .await
        .map_err(|source| ServerError::Bind {
            addr: config.listen.clone(),
            source,
        })
}

/// Serve the API on an already-bound listener until `shutdown` resolves.
pub async fn serve<F>(
    listener: TcpListener,
    state: Arc<AppState>,
    shutdown: F,
) -> Result<(), ServerError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr: SocketAddr = listener.local_addr()?;
    info!(%addr, persistent = state.sequence.is_persistent(), "HTTP server listening");

    axum::serve(listener, create_router(state))
        .with_graceful_shutdown(shutdown)
        .await?;

    info!("HTTP server stopped");
    Ok(())
}
