//! Opt-in tracing setup for hosts that do not wire their own subscriber.
//!
//! The engine only emits `tracing` events; nothing here runs unless the
//! `telemetry` feature is enabled and a host asks for it.

/// Installs a compact stderr subscriber honoring `RUST_LOG`.
///
/// Falls back to the given directive when the environment sets no filter.
/// Returns `false` when the `telemetry` feature is off or another global
/// subscriber won the race.
#[must_use]
pub fn try_init_tracing(default_directive: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_directive));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = default_directive;
        false
    }
}

/// `try_init_tracing` at `info` level.
#[must_use]
pub fn init_default_tracing() -> bool {
    try_init_tracing("info")
}
