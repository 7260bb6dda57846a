//! Opt-in `tracing` subscriber for hosts of `stream-charts`.
//!
//! Axis registration, resizes and filters log at `debug`, gesture fan-out and
//! stream following at `trace`, rolled-back updates at `warn`. Hosts that
//! already run a subscriber need nothing from this module.

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "stream_charts=info";

/// Installs a compact fmt subscriber filtered by `RUST_LOG`, falling back to
/// [`DEFAULT_FILTER`].
///
/// Returns `false` without the `telemetry` feature or when a global
/// subscriber is already set.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with(DEFAULT_FILTER)
}

/// Like [`init_default_tracing`] with `fallback_filter` as the directive used
/// when `RUST_LOG` is unset, e.g. `"stream_charts::api=trace"` to follow
/// every gesture.
#[must_use]
pub fn init_tracing_with(fallback_filter: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(fallback_filter));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok()
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback_filter;
        false
    }
}
