//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Url change (anchor click or programmatic)
//!     → router.rs (ordered scan, first match wins)
//!     → route.rs (match + placeholder substitution)
//!     → Return: populated ViewConfig or NoMatch (None)
//!
//! Route compilation (at registration):
//!     RouteDescriptor
//!     → pattern.rs (template → literal/placeholder tokens)
//!     → Appended to the router in registration order
//! ```
//!
//! # Design Decisions
//! - Routes compiled at registration, immutable afterwards
//! - No regex: literal segments match byte-for-byte
//! - Explicit NoMatch (`None`) so callers fall through to the browser

pub mod pattern;
pub mod route;
pub mod router;
