//! Crate-wide error types.
//!
//! # Design Decisions
//! - A failed route match is `Option::None`, never an error: callers fall
//!   through to full-page navigation
//! - Unknown view types and url-less navigation targets fail loudly (caller
//!   or configuration bugs)
//! - Malformed history state is silently dropped at the router, so it has no
//!   variant here

use thiserror::Error;

/// Errors surfaced by the view/router toolkit.
#[derive(Debug, Error)]
pub enum Error {
    /// The view factory was asked for a type name nobody registered.
    #[error("no view registered under '{0}'")]
    UnknownViewType(String),

    /// A click-originated navigation carried no href to navigate to.
    #[error("navigation target does not carry a url")]
    NavigationTargetMissingUrl,

    /// The render round-trip failed at the transport level.
    #[error("render request failed: {0}")]
    RenderRequest(#[from] reqwest::Error),

    /// The render backend answered with a non-success status.
    #[error("render backend returned status {0}")]
    RenderStatus(u16),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
