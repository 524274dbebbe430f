//! Tracing setup for binaries and hosts embedding `storm-days`.
//!
//! The library only emits `tracing` events. Installing a subscriber is left
//! to the host, or done through [`init_default_tracing`] when the
//! `telemetry` feature is enabled.

/// Directive used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "storm_days=info";

/// Installs a compact fmt subscriber filtered by `RUST_LOG` (falling back to
/// [`DEFAULT_FILTER`]).
///
/// Returns `false` when the `telemetry` feature is disabled or a global
/// subscriber is already installed.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_FILTER));

        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
