//! View tree nodes.
//!
//! # Responsibilities
//! - Own one region of the interface and its ordered child views
//! - Render via the backend and rebuild the subtree from the answer
//! - Resolve navigation requests and bubble them to the root
//!
//! # Design Decisions
//! - A parent exclusively owns its children; children hold a non-owning
//!   back-reference, so the tree cannot cycle and `main_view` terminates
//! - Bubbling is synchronous and depth-first up the parent chain; the only
//!   suspension point in a view's life is the render round-trip
//! - A drop guard clears the pending-render flag on every exit path of
//!   `render`, matching the always-runs post-render bookkeeping contract

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use serde_json::Value;
use url::Url;

use crate::app::Context;
use crate::error::{Error, Result};
use crate::view::config::{ParamMap, ViewConfig};
use crate::view::event::{NavigateEvent, NavigationOutcome, NavigationTarget};
use crate::view::registry::ViewBehavior;

pub(crate) struct ViewInner {
    name: String,
    params: ParamMap,
    fetch: Option<Value>,
    children: Vec<View>,
    parent: Weak<RefCell<ViewInner>>,
    element: Option<Rc<dyn crate::env::Element>>,
    behavior: Rc<dyn ViewBehavior>,
    pending_render: bool,
    ctx: Rc<Context>,
}

/// Handle to a node of the view tree. Cloning the handle shares the node.
#[derive(Clone)]
pub struct View {
    inner: Rc<RefCell<ViewInner>>,
}

/// Non-owning handle to a view, used where a strong reference would keep the
/// tree alive (e.g. the router's root binding).
#[derive(Clone)]
pub struct WeakView {
    inner: Weak<RefCell<ViewInner>>,
}

impl WeakView {
    /// Upgrade to a live handle if the view still exists.
    pub fn upgrade(&self) -> Option<View> {
        self.inner.upgrade().map(|inner| View { inner })
    }
}

impl std::fmt::Debug for View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("View")
            .field("name", &inner.name)
            .field("children", &inner.children.len())
            .finish_non_exhaustive()
    }
}

impl View {
    /// Build a view from a descriptor: set params/fetch and, when the
    /// descriptor names an element id the environment can find, adopt that
    /// element (stripping its id attribute and installing anchor-click
    /// interception). Children are attached by the registry.
    pub(crate) fn construct(
        ctx: Rc<Context>,
        name: String,
        behavior: Rc<dyn ViewBehavior>,
        descriptor: &ViewConfig,
    ) -> Self {
        let view = Self {
            inner: Rc::new(RefCell::new(ViewInner {
                name,
                params: descriptor.params.clone(),
                fetch: descriptor.fetch.clone(),
                children: Vec::new(),
                parent: Weak::new(),
                element: None,
                behavior,
                pending_render: false,
                ctx,
            })),
        };
        if let Some(id) = descriptor.id.as_deref() {
            view.adopt_element(id);
        }
        view
    }

    fn adopt_element(&self, id: &str) {
        let ctx = self.context();
        let Some(element) = ctx.env.element_by_id(id) else {
            return;
        };
        element.strip_id();
        let weak = Rc::downgrade(&self.inner);
        element.set_click_handler(Box::new(move |click| {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            let view = View { inner };
            if let Err(error) = view.navigate(NavigationTarget::Click(click.clone()), false) {
                tracing::warn!(%error, "anchor click navigation rejected");
            }
        }));
        self.inner.borrow_mut().element = Some(element);
    }

    /// Downgrade to a non-owning handle.
    pub fn downgrade(&self) -> WeakView {
        WeakView {
            inner: Rc::downgrade(&self.inner),
        }
    }

    pub(crate) fn context(&self) -> Rc<Context> {
        self.inner.borrow().ctx.clone()
    }

    /// The view's type name, as registered.
    pub fn name(&self) -> String {
        self.inner.borrow().name.clone()
    }

    /// Snapshot of the view's params.
    pub fn params(&self) -> ParamMap {
        self.inner.borrow().params.clone()
    }

    /// Snapshot of the view's fetch instructions.
    pub fn fetch(&self) -> Option<Value> {
        self.inner.borrow().fetch.clone()
    }

    /// Handles to the view's children, in order.
    pub fn children(&self) -> Vec<View> {
        self.inner.borrow().children.clone()
    }

    /// The owning parent, if this view is not the root.
    pub fn parent(&self) -> Option<View> {
        self.inner.borrow().parent.upgrade().map(|inner| View { inner })
    }

    /// Whether two handles point at the same node.
    pub fn ptr_eq(&self, other: &View) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// Whether a render round-trip is currently in flight.
    pub fn is_render_pending(&self) -> bool {
        self.inner.borrow().pending_render
    }

    /// Append `child` to this view's children and point the child back at
    /// this view. A child already owned elsewhere is re-parented: it leaves
    /// its previous parent's list first, so it sits in exactly one list.
    pub fn add_child(&self, child: View) {
        if let Some(previous) = child.parent() {
            previous.forget_child(&child);
        }
        child.inner.borrow_mut().parent = Rc::downgrade(&self.inner);
        self.inner.borrow_mut().children.push(child);
    }

    /// Remove `child` from this view's children, clear its parent reference,
    /// and detach its rendered content and bindings.
    pub fn remove_child(&self, child: &View) {
        self.forget_child(child);
        child.inner.borrow_mut().parent = Weak::new();
        child.detach();
    }

    fn forget_child(&self, child: &View) {
        self.inner
            .borrow_mut()
            .children
            .retain(|existing| !Rc::ptr_eq(&existing.inner, &child.inner));
    }

    fn detach(&self) {
        let element = self.inner.borrow_mut().element.take();
        if let Some(element) = element {
            element.remove();
        }
    }

    /// Structural snapshot of this view: `{path, params, fetch}` plus, only
    /// when `with_children` is set, the recursively computed `children` list.
    pub fn get_config(&self, with_children: bool) -> ViewConfig {
        let mut config = {
            let inner = self.inner.borrow();
            ViewConfig {
                path: inner.name.clone(),
                params: inner.params.clone(),
                fetch: inner.fetch.clone(),
                children: None,
                id: None,
            }
        };
        if with_children {
            config.children = Some(
                self.children()
                    .iter()
                    .map(|child| child.get_config(true))
                    .collect(),
            );
        }
        config
    }

    /// Walk parent references to the root of the tree.
    pub fn main_view(&self) -> View {
        let mut current = self.clone();
        while let Some(parent) = current.parent() {
            current = parent;
        }
        current
    }

    /// Render this view: POST the current configuration (without children) to
    /// the backend, replace the element content with the returned markup, and
    /// rebuild params/fetch/children from the returned tree. The behavior's
    /// `after_render` hook runs whether the round-trip succeeds or fails, and
    /// the pending flag is cleared on every exit path.
    pub async fn render(&self) -> Result<()> {
        self.inner.borrow_mut().pending_render = true;
        let _pending = RenderGuard {
            inner: Rc::downgrade(&self.inner),
        };

        let ctx = self.context();
        let config = self.get_config(false);
        tracing::debug!(view = %config.path, "requesting render");
        let result = ctx.backend.render(&config).await;

        let outcome = match result {
            Ok(response) => {
                let element = self.inner.borrow().element.clone();
                if let Some(element) = element {
                    element.set_html(&response.html);
                }
                self.apply_config(response.tree)
            }
            Err(error) => {
                tracing::warn!(view = %config.path, %error, "render request failed");
                Err(error)
            }
        };

        let behavior = self.inner.borrow().behavior.clone();
        behavior.after_render(self, outcome.is_ok());
        outcome
    }

    /// Re-derive params/fetch/children from a tree descriptor, discarding any
    /// previously attached children.
    fn apply_config(&self, descriptor: ViewConfig) -> Result<()> {
        let ctx = self.context();
        let discarded = {
            let mut inner = self.inner.borrow_mut();
            inner.params = descriptor.params;
            inner.fetch = descriptor.fetch;
            std::mem::take(&mut inner.children)
        };
        for child in discarded {
            child.inner.borrow_mut().parent = Weak::new();
        }
        for child_descriptor in descriptor.children.iter().flatten() {
            let child = ctx.registry.borrow().initialize(child_descriptor, &ctx)?;
            self.add_child(child);
        }
        Ok(())
    }

    /// Navigate to a url or an intercepted anchor click.
    ///
    /// Click events get default handling and propagation suppressed and the
    /// href extracted; a click without an href is caller misuse and fails.
    /// The url is resolved through the router (absolute hrefs by their path
    /// component): unresolved urls and forced navigations go straight to the
    /// browser, resolved ones bubble a navigation notification to the root.
    pub fn navigate(
        &self,
        target: impl Into<NavigationTarget>,
        force: bool,
    ) -> Result<NavigationOutcome> {
        let url = match target.into() {
            NavigationTarget::Url(url) => url,
            NavigationTarget::Click(click) => {
                click.prevent_default();
                click.stop_propagation();
                click
                    .href()
                    .map(str::to_string)
                    .ok_or(Error::NavigationTargetMissingUrl)?
            }
        };

        let ctx = self.context();
        let lookup = resolution_path(&url);
        let resolved = ctx.router.borrow().resolve(&lookup);
        match resolved {
            Some(config) if !force => {
                tracing::debug!(url = %url, view = %config.path, "navigation resolved, bubbling");
                let mut event = NavigateEvent::new(url, config);
                self.trigger_navigate(&mut event);
                Ok(NavigationOutcome::Bubbled)
            }
            _ => {
                tracing::debug!(url = %url, force, "full page navigation");
                ctx.env.assign_location(&url);
                Ok(NavigationOutcome::FullPage)
            }
        }
    }

    /// Bubble a navigation notification upward. At each node whose default
    /// action is still allowed, the node's hook runs with a continuation that
    /// pushes history state for the whole tree. The walk always continues to
    /// the parent; at the root, an unclaimed notification falls back to a
    /// full-page navigation.
    pub fn trigger_navigate(&self, event: &mut NavigateEvent) {
        if !event.is_default_prevented() {
            let behavior = self.inner.borrow().behavior.clone();
            let ctx = self.context();
            let root = self.main_view();
            let url = event.url().to_string();
            let push = move || ctx.router.borrow().push_history(&url, &root);
            let push_history: &dyn Fn() -> bool = &push;
            behavior.on_navigate(self, event, Some(push_history));
        }

        if let Some(parent) = self.parent() {
            parent.trigger_navigate(event);
        } else if !event.is_default_prevented() {
            self.context().env.assign_location(event.url());
        }
    }

    /// Dispatch this view's navigation hook without bubbling and without a
    /// push-history continuation. Used by the router when replaying history
    /// state on back/forward navigation.
    pub fn notify_navigate(&self, event: &mut NavigateEvent) {
        let behavior = self.inner.borrow().behavior.clone();
        behavior.on_navigate(self, event, None);
    }
}

/// Clears the pending-render flag when a render call completes, errors, or is
/// dropped mid-flight.
struct RenderGuard {
    inner: Weak<RefCell<ViewInner>>,
}

impl Drop for RenderGuard {
    fn drop(&mut self) {
        if let Some(inner) = self.inner.upgrade() {
            inner.borrow_mut().pending_render = false;
        }
    }
}

/// Absolute urls resolve by their path component; anything unparseable is
/// taken as an in-application path already.
fn resolution_path(url: &str) -> String {
    match Url::parse(url) {
        Ok(parsed) => parsed.path().to_string(),
        Err(_) => url.to_string(),
    }
}
