//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured logging via tracing; route resolution, history decisions,
//!   and render round-trips all emit events
//! - No metrics endpoint: this crate runs inside a page, logging is the
//!   whole observability surface

pub mod logging;
