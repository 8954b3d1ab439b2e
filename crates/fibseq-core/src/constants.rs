//! Constants shared by the sequence core, the server, and the binary.

use std::time::Duration;

/// Cache key under which the decimal `current` term is persisted.
pub const SNAPSHOT_KEY: &str = "fibonacci_current";

/// Address the HTTP server binds when none is configured.
pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";

/// Cache URL used when none is configured.
pub const DEFAULT_REDIS_URL: &str = "redis://redis:6379/0";

/// Upper bound on a single snapshot fetch or write.
pub const DEFAULT_CACHE_TIMEOUT: Duration = Duration::from_secs(2);

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Invalid configuration.
    pub const ERROR_CONFIG: i32 = 4;
    /// The listen address could not be bound.
    pub const ERROR_BIND: i32 = 5;
}
