//! View subsystem.
//!
//! # Data Flow
//! ```text
//! Descriptor (route match, render answer, or history state)
//!     → registry.rs (string-keyed factory, recursive children)
//!     → node.rs (tree node: params, fetch, element, children)
//!
//! Navigation:
//!     node.navigate → router resolve → event.rs notification
//!     → node.trigger_navigate (bubble to root, cancellation-aware)
//! ```
//!
//! # Design Decisions
//! - Parents own children; children keep a weak back-reference
//! - View variants are behavior implementations behind one trait, not
//!   subclasses
//! - Cancellation suppresses default actions, never the bubble walk

pub mod config;
pub mod event;
pub mod node;
pub mod registry;
