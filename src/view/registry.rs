//! View registry and factory.
//!
//! # Responsibilities
//! - Record view variants process-wide, keyed by type name
//! - Instantiate view trees from descriptors
//!
//! # Design Decisions
//! - Variants are a closed set behind one behavior trait, selected by a
//!   string-keyed factory rather than subclassing
//! - Re-registering a name overwrites the previous binding
//! - Instantiating an unregistered type fails loudly: that is a
//!   configuration bug, not a runtime condition

use std::collections::HashMap;
use std::rc::Rc;

use crate::app::Context;
use crate::error::{Error, Result};
use crate::view::config::ViewConfig;
use crate::view::event::NavigateEvent;
use crate::view::node::View;

/// Per-variant behavior hooks. Every hook has a no-op default, so a variant
/// only overrides what it cares about.
pub trait ViewBehavior {
    /// Navigation hook, invoked while a navigation notification bubbles
    /// through this view (or when history state is replayed onto the root).
    ///
    /// `push_history`, when present, records the navigation in browser
    /// history for the whole tree; a hook that claims the navigation calls
    /// it and marks the event's default as prevented.
    fn on_navigate(
        &self,
        _view: &View,
        _event: &mut NavigateEvent,
        _push_history: Option<&dyn Fn() -> bool>,
    ) {
    }

    /// Post-render hook; runs after every render attempt, successful or not.
    fn after_render(&self, _view: &View, _succeeded: bool) {}
}

/// The base behavior: every hook keeps its default.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultBehavior;

impl ViewBehavior for DefaultBehavior {}

/// Process-wide registry of view variants.
#[derive(Default)]
pub struct ViewRegistry {
    views: HashMap<String, Rc<dyn ViewBehavior>>,
}

impl ViewRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a variant under `name`, replacing any previous binding.
    pub fn register(&mut self, name: impl Into<String>, behavior: impl ViewBehavior + 'static) {
        let name = name.into();
        tracing::debug!(view = %name, "registering view variant");
        self.views.insert(name, Rc::new(behavior));
    }

    /// Whether a variant is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.views.contains_key(name)
    }

    /// Instantiate the view tree described by `descriptor`, recursively
    /// building and attaching nested children. Fails if any `path` in the
    /// descriptor tree names an unregistered variant.
    pub fn initialize(&self, descriptor: &ViewConfig, ctx: &Rc<Context>) -> Result<View> {
        let behavior = self
            .views
            .get(&descriptor.path)
            .cloned()
            .ok_or_else(|| Error::UnknownViewType(descriptor.path.clone()))?;

        let view = View::construct(ctx.clone(), descriptor.path.clone(), behavior, descriptor);
        for child_descriptor in descriptor.children.iter().flatten() {
            let child = self.initialize(child_descriptor, ctx)?;
            view.add_child(child);
        }
        Ok(view)
    }
}
