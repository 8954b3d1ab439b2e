//! Application entry point and bootstrap.

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use fibseq_cache::RedisStore;
use fibseq_core::Sequence;
use fibseq_server::{AppState, ServerConfig};

use crate::config::{AppConfig, ConfigError};
use crate::version;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        clap_complete::generate(shell, &mut cmd, "fibseq", &mut std::io::stdout());
        return Ok(());
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start the async runtime")?;

    runtime.block_on(serve(config))
}

async fn serve(config: &AppConfig) -> Result<()> {
    info!("starting {}", version::full_version());

    let timeout = config.cache_timeout_duration()?;
    let server_config = ServerConfig {
        listen: config.listen.clone(),
    };

    // Bind before restoring so a bad address fails fast.
    let listener = fibseq_server::bind(&server_config).await?;

    let sequence = if config.no_cache {
        info!("persistence disabled, starting from seed");
        Sequence::new()
    } else {
        let store =
            RedisStore::open(&config.redis_url).map_err(|e| ConfigError::RedisUrl(e.to_string()))?;
        Sequence::restore(Arc::new(store), timeout).await
    };

    let state = Arc::new(AppState::new(sequence));
    fibseq_server::serve(listener, state, shutdown_signal()).await?;
    Ok(())
}

/// Resolves on Ctrl+C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    info!("shutdown signal received");
}
