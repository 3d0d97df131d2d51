//! Telemetry helpers for hosts embedding `carousel-rs`.
//!
//! Tracing setup stays opt-in: hosts either call one of these helpers with the
//! `telemetry` feature enabled or install their own subscriber.

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_TRACING_FILTER: &str = "carousel_rs=info";

/// Initializes a compact `tracing` subscriber honoring `RUST_LOG`.
///
/// Returns `false` when the feature is disabled or a global subscriber was
/// already installed by the host.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_filter(DEFAULT_TRACING_FILTER)
}

/// Same as [`init_default_tracing`] but with an explicit fallback directive,
/// e.g. `"carousel_rs=trace"` to watch every render pass.
#[must_use]
pub fn init_tracing_with_filter(fallback_directive: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback_directive));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback_directive;
        false
    }
}
