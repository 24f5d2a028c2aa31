//! Tracing/logging initialization.
//!
//! Guard denials and session-check failures are emitted as structured
//! `tracing` events by `tavola-auth`; this module is where a host process
//! turns them into output.

use tracing_subscriber::EnvFilter;

/// Initialize tracing/logging for the process.
///
/// JSON logs with timestamps, filtered via `RUST_LOG` (default `info`).
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init() {
    init_with_default_filter("info");
}

/// Like [`init`], but with an explicit fallback filter for when `RUST_LOG`
/// is unset (hosts embedding the authorization layer in tests use `warn`).
pub fn init_with_default_filter(fallback: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_is_idempotent() {
        super::init();
        super::init_with_default_filter("warn");
    }
}
