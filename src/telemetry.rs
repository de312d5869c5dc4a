//! Opt-in log output for hosts embedding `chart-dash`.
//!
//! The crate only emits `tracing` events. A host either installs its own
//! subscriber or calls `init_default_tracing` with the `telemetry` feature.

/// Directive used when `RUST_LOG` is unset or invalid: dashboard events at
/// `info`, everything else (reqwest, hyper) at `warn`.
pub const DEFAULT_LOG_DIRECTIVES: &str = "warn,chart_dash=info";

/// Installs a compact fmt subscriber filtered by `RUST_LOG`, falling back to
/// [`DEFAULT_LOG_DIRECTIVES`].
///
/// Returns `false` when the `telemetry` feature is off or a global subscriber
/// is already installed.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter())
            .with_target(true)
            .compact()
            .try_init()
            .is_ok()
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}

#[cfg(feature = "telemetry")]
fn env_filter() -> tracing_subscriber::EnvFilter {
    tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_LOG_DIRECTIVES))
}
