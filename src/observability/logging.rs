//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber for hosts that want crate logs
//!
//! # Design Decisions
//! - Log level configurable via `RUST_LOG`, defaulting to crate-level debug
//! - Initialization is idempotent: a second call (e.g. from tests) is a no-op

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Install the tracing subscriber. Safe to call more than once; only the
/// first call wins.
pub fn init() {
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "viewtree=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}
