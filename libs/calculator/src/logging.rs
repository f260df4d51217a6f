//! Tracing setup.

use std::sync::Once;

use tracing_subscriber::util::TryInitError;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Only installs a subscriber when `RUST_LOG` is set, e.g.
/// `RUST_LOG=calculator=debug`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        if std::env::var("RUST_LOG").is_ok() {
            // The host may already own the global subscriber; report through it.
            if let Err(err) = install_subscriber() {
                tracing::debug!(%err, "keeping existing tracing subscriber");
            }
        }
    });
}

/// Installs the fmt layer with an `EnvFilter` as the global subscriber.
fn install_subscriber() -> Result<(), TryInitError> {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_level(true))
        .with(EnvFilter::from_default_env())
        .try_init()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_tracing_is_idempotent() {
        init_tracing();
        init_tracing();
    }

    #[test]
    fn test_second_install_reports_existing_subscriber() {
        let _ = install_subscriber();
        assert!(install_subscriber().is_err());
    }
}
