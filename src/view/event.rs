//! Navigation notifications and click events.
//!
//! # Design Decisions
//! - The bubbling notification is an explicit value with a cancellation flag,
//!   passed by mutable reference up the parent chain; every fallback decision
//!   point re-checks the flag
//! - Cancellation suppresses default actions only; the bubble walk itself
//!   always reaches the root
//! - Click events share their flags behind an `Rc` so the interception layer
//!   observes `prevent_default`/`stop_propagation` calls made by the view

use std::cell::Cell;
use std::rc::Rc;

use crate::view::config::ViewConfig;

/// The bubbling message describing an attempted url change.
#[derive(Debug)]
pub struct NavigateEvent {
    url: String,
    config: ViewConfig,
    default_prevented: bool,
}

impl NavigateEvent {
    /// Build a notification for a resolved navigation.
    pub fn new(url: impl Into<String>, config: ViewConfig) -> Self {
        Self {
            url: url.into(),
            config,
            default_prevented: false,
        }
    }

    /// The url being navigated to.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// The resolved view configuration for the target url.
    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    /// Mark the navigation as handled: remaining default hook invocations and
    /// the eventual full-page fallback are suppressed.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    /// Whether some handler already claimed the default action.
    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// How a navigation request was supplied to [`View::navigate`](crate::View::navigate).
#[derive(Debug, Clone)]
pub enum NavigationTarget {
    /// A literal url string.
    Url(String),
    /// A click intercepted on an anchor inside the view's element.
    Click(ClickEvent),
}

impl From<&str> for NavigationTarget {
    fn from(url: &str) -> Self {
        Self::Url(url.to_string())
    }
}

impl From<String> for NavigationTarget {
    fn from(url: String) -> Self {
        Self::Url(url)
    }
}

/// How a navigation request was ultimately handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationOutcome {
    /// The url resolved to a route and bubbled through the view tree.
    Bubbled,
    /// The url was handed to the browser for a full-page navigation.
    FullPage,
}

#[derive(Debug)]
struct ClickState {
    href: Option<String>,
    default_prevented: Cell<bool>,
    propagation_stopped: Cell<bool>,
}

/// An intercepted anchor click. Clones share state, mirroring a single
/// browser event observed by several handlers.
#[derive(Debug, Clone)]
pub struct ClickEvent {
    state: Rc<ClickState>,
}

impl ClickEvent {
    /// Build a click event carrying the anchor's href, if any.
    pub fn new(href: Option<String>) -> Self {
        Self {
            state: Rc::new(ClickState {
                href,
                default_prevented: Cell::new(false),
                propagation_stopped: Cell::new(false),
            }),
        }
    }

    /// The href of the clicked anchor.
    pub fn href(&self) -> Option<&str> {
        self.state.href.as_deref()
    }

    /// Suppress the browser's default handling of the click.
    pub fn prevent_default(&self) {
        self.state.default_prevented.set(true);
    }

    /// Whether default handling was suppressed.
    pub fn is_default_prevented(&self) -> bool {
        self.state.default_prevented.get()
    }

    /// Stop the click from reaching further DOM handlers.
    pub fn stop_propagation(&self) {
        self.state.propagation_stopped.set(true);
    }

    /// Whether propagation was stopped.
    pub fn is_propagation_stopped(&self) -> bool {
        self.state.propagation_stopped.get()
    }
}
