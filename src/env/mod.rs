//! Host environment capabilities.
//!
//! # Responsibilities
//! - Abstract the browser history API, location, and document
//! - Abstract element attachment and anchor-click interception
//!
//! # Design Decisions
//! - The toolkit consumes these capabilities, it never implements them; a
//!   wasm binding, a test double, or a headless shell all plug in here
//! - Environments without history support degrade to full-page navigation,
//!   they never fail
//! - History state payloads cross this seam as plain JSON values

use std::rc::Rc;

use serde_json::Value;

use crate::view::event::ClickEvent;

/// Callback invoked on back/forward history navigation with the stored state.
pub type PopStateHandler = Box<dyn Fn(Option<Value>)>;

/// Callback invoked when a descendant anchor of an adopted element is clicked.
pub type ClickHandler = Box<dyn Fn(&ClickEvent)>;

/// Capabilities of the hosting page.
pub trait Environment {
    /// Whether history manipulation is available.
    fn history_supported(&self) -> bool;

    /// The current location url.
    fn current_url(&self) -> String;

    /// The current document title.
    fn document_title(&self) -> String;

    /// Push a history entry for `url` carrying `state`.
    fn push_state(&self, state: Value, title: &str, url: &str);

    /// Replace the current history entry with `state` for `url`.
    fn replace_state(&self, state: Value, title: &str, url: &str);

    /// Perform a full-page navigation to `url`, leaving the application.
    fn assign_location(&self, url: &str);

    /// Look up an existing element by id for a view to adopt.
    fn element_by_id(&self, id: &str) -> Option<Rc<dyn Element>>;

    /// Subscribe to back/forward history notifications for the rest of the
    /// session. A later call replaces the previous subscription.
    fn set_pop_state_handler(&self, handler: PopStateHandler);
}

/// A host element owned by a view: the view controls its content and
/// lifecycle from adoption until removal.
pub trait Element {
    /// Remove the identifying id attribute after adoption.
    fn strip_id(&self);

    /// Replace the element's rendered content.
    fn set_html(&self, html: &str);

    /// Detach the element and everything below it from the page.
    fn remove(&self);

    /// Install delegated click interception for descendant anchors. A later
    /// call replaces the previous handler.
    fn set_click_handler(&self, handler: ClickHandler);
}
