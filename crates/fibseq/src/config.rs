//! Application configuration from CLI flags and environment.

use std::time::Duration;

use clap::Parser;

use fibseq_core::{DEFAULT_CACHE_TIMEOUT, DEFAULT_LISTEN_ADDR, DEFAULT_REDIS_URL};

/// fibseq — a running Fibonacci sequence served over HTTP.
#[derive(Parser, Debug)]
#[command(name = "fibseq", version, about)]
pub struct AppConfig {
    /// Address to listen on (host:port).
    #[arg(short, long, default_value = DEFAULT_LISTEN_ADDR, env = "FIBSEQ_LISTEN")]
    pub listen: String,

    /// Redis URL used to persist and restore the sequence.
    #[arg(long, default_value = DEFAULT_REDIS_URL, env = "FIBSEQ_REDIS_URL")]
    pub redis_url: String,

    /// Keep the sequence in memory only.
    #[arg(long, env = "FIBSEQ_NO_CACHE")]
    pub no_cache: bool,

    /// Upper bound per cache operation (e.g., "500ms", "2s", "1m") [default: 2s].
    #[arg(long, env = "FIBSEQ_CACHE_TIMEOUT")]
    pub cache_timeout: Option<String>,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

/// Configuration error type.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid cache timeout {0:?}")]
    CacheTimeout(String),

    #[error("invalid redis url: {0}")]
    RedisUrl(String),
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Parse the cache timeout into a Duration.
    ///
    /// Falls back to [`DEFAULT_CACHE_TIMEOUT`] when none is given.
    pub fn cache_timeout_duration(&self) -> Result<Duration, ConfigError> {
        let Some(raw) = &self.cache_timeout else {
            return Ok(DEFAULT_CACHE_TIMEOUT);
        };
        match parse_duration(raw) {
            Some(d) if !d.is_zero() => Ok(d),
            _ => Err(ConfigError::CacheTimeout(raw.clone())),
        }
    }
}

/// Parse a duration string like "500ms", "30s", "5m", or bare seconds.
fn parse_duration(s: &str) -> Option<Duration> {
    let s = s.trim();
    if let Some(ms) = s.strip_suffix("ms") {
        let n: u64 = ms.parse().ok()?;
        Some(Duration::from_millis(n))
    } else if let Some(mins) = s.strip_suffix('m') {
        let n: u64 = mins.parse().ok()?;
        n.checked_mul(60).map(Duration::from_secs)
    } else if let Some(secs) = s.strip_suffix('s') {
        let n: u64 = secs.parse().ok()?;
        Some(Duration::from_secs(n))
    } else {
        let n: u64 = s.parse().ok()?;
        Some(Duration::from_secs(n))
    }
}
