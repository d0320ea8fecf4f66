//! Tracing subscriber and panic hook installation.

use std::sync::Once;

use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::{Config, ConfigError};

static TRACING_INSTALLED: Once = Once::new();

/// Builds the `EnvFilter` described by `config`.
///
/// # Errors
///
/// Returns [`ConfigError::Filter`] if the directive does not parse.
pub fn env_filter(config: &Config) -> Result<EnvFilter, ConfigError> {
    EnvFilter::try_new(&config.log.filter).map_err(|source| ConfigError::Filter {
        filter: config.log.filter.clone(),
        source,
    })
}

/// Installs a formatting subscriber and routes panics through `tracing`.
///
/// Only the first call has an effect. If another global subscriber is
/// already set, it is left in place and only the panic hook is installed.
///
/// # Errors
///
/// Returns [`ConfigError::Filter`] if the configured filter does not parse.
/// Nothing is installed in that case.
pub fn install_tracing(config: &Config) -> Result<(), ConfigError> {
    let filter = env_filter(config)?;
    let (ansi, target) = (config.log.ansi, config.log.target);

    TRACING_INSTALLED.call_once(move || {
        let installed = fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_ansi(ansi)
            .with_target(target)
            .without_time()
            .try_init();

        // Route panics through tracing
        std::panic::set_hook(Box::new(tracing_panic::panic_hook));

        match installed {
            Ok(()) => debug!(ansi, target, "tracing subscriber installed"),
            Err(err) => debug!(%err, "keeping the existing tracing subscriber"),
        }
    });
    Ok(())
}
