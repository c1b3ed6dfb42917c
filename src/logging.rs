use std::sync::Once;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

static LOGGING_INIT: Once = Once::new();

#[derive(Error, Debug)]
#[error("failed to initialize logging: {reason}")]
pub struct LoggingError {
    reason: String,
}

/// Installs the global `tracing` subscriber for the compiler.
///
/// The filter comes from `RUST_LOG` and defaults to `warn`. Repeated calls are
/// no-ops once the first one has run.
pub fn init_logging() -> Result<(), LoggingError> {
    let mut init_result = Ok(());

    LOGGING_INIT.call_once(|| {
        init_result = tracing_subscriber::fmt()
            .with_env_filter(default_env_filter())
            .with_writer(std::io::stderr)
            .try_init()
            .map_err(|error| LoggingError {
                reason: error.to_string(),
            });
    });

    init_result
}

fn default_env_filter() -> EnvFilter {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::new("warn"),
    }
}

#[cfg(test)]
mod tests {
    use super::init_logging;

    #[test]
    fn test_init_logging_is_idempotent() {
        assert!(init_logging().is_ok());
        assert!(init_logging().is_ok());
    }
}
