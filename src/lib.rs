//! Client-side single-page-application toolkit: a url router mapping paths to
//! view descriptors, and a hierarchical view tree that renders itself through
//! server round-trips and bubbles navigation events upward.
//!
//! # Architecture Overview
//!
//! ```text
//!   anchor click / programmatic url
//!        │
//!        ▼
//!   View::navigate ──▶ Router::resolve ──▶ Route::prepare (match + populate)
//!        │                                      │
//!        │              resolved ViewConfig ◀───┘
//!        ▼
//!   NavigateEvent bubbles child → root (any hook may claim the default)
//!        │
//!        ├─ claimed: Router::push_history (tree snapshot → history state)
//!        └─ unclaimed / unresolved / forced: full-page browser navigation
//!
//!   View::render ──▶ RenderBackend (POST {path, params, fetch})
//!                         │
//!        {html, tree} ◀───┘  → element content + rebuilt children
//! ```
//!
//! The rendering backend, the DOM, and the history API are collaborators
//! consumed through the [`RenderBackend`], [`Element`], and [`Environment`]
//! seams; this crate only implements route matching and the view lifecycle.

// Core subsystems
pub mod routing;
pub mod view;

// External seams
pub mod env;
pub mod render;

// Cross-cutting concerns
pub mod app;
pub mod error;
pub mod observability;
pub mod util;

pub use app::{App, Context};
pub use env::{ClickHandler, Element, Environment, PopStateHandler};
pub use error::{Error, Result};
pub use render::{HttpRenderBackend, RenderBackend, RenderResponse};
pub use routing::pattern::RoutePattern;
pub use routing::route::{Route, RouteDescriptor};
pub use routing::router::Router;
pub use view::config::{ParamMap, ViewConfig};
pub use view::event::{ClickEvent, NavigateEvent, NavigationOutcome, NavigationTarget};
pub use view::node::{View, WeakView};
pub use view::registry::{DefaultBehavior, ViewBehavior, ViewRegistry};
