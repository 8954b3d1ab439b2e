//! Error handling and exit codes.

use fibseq_core::constants::exit_codes;
use fibseq_server::ServerError;

use crate::config::ConfigError;

/// Map a fatal application error to the process exit code.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    if err.downcast_ref::<ConfigError>().is_some() {
        return exit_codes::ERROR_CONFIG;
    }
    match err.downcast_ref::<ServerError>() {
        Some(ServerError::Bind { .. }) => exit_codes::ERROR_BIND,
        _ => exit_codes::ERROR_GENERIC,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_codes() {
        let config = anyhow::Error::new(ConfigError::CacheTimeout("soon".into()));
        assert_eq!(exit_code(&config), 4);

        let bind = anyhow::Error::new(ServerError::Bind {
            addr: "0.0.0.0:8080".into(),
            source: std::io::ErrorKind::AddrInUse.into(),
        });
        assert_eq!(exit_code(&bind), 5);

        let serve = anyhow::Error::new(ServerError::Serve(std::io::ErrorKind::Other.into()));
        assert_eq!(exit_code(&serve), 1);

        assert_eq!(exit_code(&anyhow::anyhow!("unexpected")), 1);
    }

    #[test]
    fn context_does_not_hide_the_cause() {
        let err = anyhow::Error::new(ConfigError::RedisUrl("bad".into()))
            .context("while building the snapshot store");
        assert_eq!(exit_code(&err), 4);
    }
}
