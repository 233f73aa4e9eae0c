// ============================================================================
// Logging Bootstrap
// Installs a tracing subscriber for binaries, demos and benchmarks
// ============================================================================
//
// The library itself only emits `tracing` events. Nothing is printed until
// the host installs a subscriber, either its own or the one below.
//
// # Usage
//
// ```ignore
// use roman_numerals::utils::init_logging;
//
// init_logging();
// // RUST_LOG=roman_numerals=trace shows every generated numeral
// ```
// ============================================================================

/// Default filter when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "info";

/// Install a global fmt subscriber filtered by `RUST_LOG`.
///
/// # Returns
/// * `true` if this call installed the subscriber
/// * `false` if one was already installed
#[cfg(feature = "logging")]
pub fn init_logging() -> bool {
    use tracing_subscriber::EnvFilter;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_ok()
}

// ============================================================================
// Stub implementation when logging feature is disabled
// ============================================================================

/// Without the `logging` feature there is no subscriber to install.
#[cfg(not(feature = "logging"))]
pub fn init_logging() -> bool {
    false
}
