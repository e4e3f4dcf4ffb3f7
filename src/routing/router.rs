//! Route registry and history integration.
//!
//! # Responsibilities
//! - Store compiled routes in registration order
//! - Resolve urls to view configurations, first match wins
//! - Push and replay browser history state for the bound view tree
//!
//! # Design Decisions
//! - Registration is additive for the life of the session; `add` never
//!   deduplicates and re-initializing appends
//! - Resolution returns an explicit `None` rather than a default route
//! - History state is untrusted (stale across page versions), so malformed
//!   payloads are dropped silently instead of surfacing an error
//! - Environments without a history API degrade to full-page navigation

use std::rc::Rc;

use serde_json::Value;

use crate::env::Environment;
use crate::routing::route::{Route, RouteDescriptor};
use crate::view::config::ViewConfig;
use crate::view::event::NavigateEvent;
use crate::view::node::{View, WeakView};

/// Ordered route registry bound to at most one root view at a time.
pub struct Router {
    routes: Vec<Route>,
    env: Rc<dyn Environment>,
    app_view: Option<WeakView>,
}

impl Router {
    /// Build an empty router on top of the host environment.
    pub fn new(env: Rc<dyn Environment>) -> Self {
        Self {
            routes: Vec::new(),
            env,
            app_view: None,
        }
    }

    /// Compile and append a route. Registration order is resolution order.
    pub fn add(&mut self, descriptor: RouteDescriptor) {
        tracing::debug!(view = %descriptor.view, rule = %descriptor.rule, "route registered");
        self.routes.push(Route::new(descriptor));
    }

    /// The registered routes, in registration order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Resolve `url` to a populated view configuration via the first route
    /// that matches, or `None` when nothing does.
    pub fn resolve(&self, url: &str) -> Option<ViewConfig> {
        for route in &self.routes {
            if let Some(config) = route.prepare(url) {
                tracing::debug!(url = %url, view = %config.path, "url resolved");
                return Some(config);
            }
        }
        tracing::debug!(url = %url, "no route matched");
        None
    }

    /// Bind the root view and record the current location as the initial
    /// history entry (a replace, so the entry the page loaded with gains the
    /// tree snapshot without growing the stack).
    pub fn start(&mut self, root: &View) {
        self.app_view = Some(root.downgrade());
        let url = self.env.current_url();
        let state = tree_state(root);
        tracing::debug!(url = %url, "router started");
        self.env
            .replace_state(state, &self.env.document_title(), &url);
    }

    /// The currently bound root view, if it is still alive.
    pub fn app_view(&self) -> Option<View> {
        self.app_view.as_ref().and_then(WeakView::upgrade)
    }

    /// Record a client-side navigation: snapshot the full tree configuration
    /// of `root` and push it as history state for `url`. Returns `false` —
    /// after falling back to a full-page navigation — when the environment
    /// has no history support, signalling "not handled client-side".
    pub fn push_history(&self, url: &str, root: &View) -> bool {
        if self.env.history_supported() {
            let state = tree_state(root);
            tracing::debug!(url = %url, "pushing history state");
            self.env.push_state(state, &self.env.document_title(), url);
            true
        } else {
            tracing::debug!(url = %url, "history unsupported, full page navigation");
            self.env.assign_location(url);
            false
        }
    }

    /// Replay history state delivered by a back/forward navigation. The
    /// stored payload must carry the tree's first child configuration;
    /// anything absent or malformed is ignored.
    pub fn on_history_change(&self, state: Option<&Value>) {
        let Some(state) = state else {
            tracing::debug!("history event without state, ignored");
            return;
        };
        let Some(first_child) = state.get("children").and_then(|children| children.get(0)) else {
            tracing::debug!("history state without view tree, ignored");
            return;
        };
        let Ok(config) = serde_json::from_value::<ViewConfig>(first_child.clone()) else {
            tracing::debug!("history state not a view configuration, ignored");
            return;
        };
        let Some(root) = self.app_view() else {
            tracing::debug!("history event before router start, ignored");
            return;
        };

        let mut event = NavigateEvent::new(self.env.current_url(), config);
        root.notify_navigate(&mut event);
    }
}

/// Full-tree history state payload: the structural snapshot of `root` and all
/// descendants.
fn tree_state(root: &View) -> Value {
    serde_json::to_value(root.get_config(true)).unwrap_or_else(|error| {
        tracing::debug!(%error, "tree snapshot not serializable, storing null state");
        Value::Null
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    mod stub {
        use std::rc::Rc;

        use serde_json::Value;

        use crate::env::{Element, Environment, PopStateHandler};

        pub struct NullEnvironment;

        impl Environment for NullEnvironment {
            fn history_supported(&self) -> bool {
                false
            }
            fn current_url(&self) -> String {
                "/".to_string()
            }
            fn document_title(&self) -> String {
                String::new()
            }
            fn push_state(&self, _state: Value, _title: &str, _url: &str) {}
            fn replace_state(&self, _state: Value, _title: &str, _url: &str) {}
            fn assign_location(&self, _url: &str) {}
            fn element_by_id(&self, _id: &str) -> Option<Rc<dyn Element>> {
                None
            }
            fn set_pop_state_handler(&self, _handler: PopStateHandler) {}
        }
    }

    fn router() -> Router {
        Router::new(Rc::new(stub::NullEnvironment))
    }

    fn descriptor(view: &str, rule: &str) -> RouteDescriptor {
        RouteDescriptor {
            view: view.to_string(),
            rule: rule.to_string(),
            ..RouteDescriptor::default()
        }
    }

    #[test]
    fn test_resolution_is_first_match_wins() {
        let mut router = router();
        router.add(RouteDescriptor {
            keys: vec!["<name>".to_string()],
            ..descriptor("First", "/artist/<name>/")
        });
        router.add(RouteDescriptor {
            keys: vec!["<name>".to_string()],
            ..descriptor("Second", "/artist/<name>/")
        });

        let config = router.resolve("/artist/Miles/").unwrap();
        assert_eq!(config.path, "First");
    }

    #[test]
    fn test_resolution_returns_none_without_match() {
        let mut router = router();
        router.add(descriptor("Artist", "/artist/<name>/"));
        assert!(router.resolve("/nomatch/").is_none());

        let empty = self::router();
        assert!(empty.resolve("/anything/").is_none());
    }

    #[test]
    fn test_add_keeps_registration_order_and_duplicates() {
        let mut router = router();
        router.add(descriptor("A", "/a/"));
        router.add(descriptor("B", "/b/"));
        router.add(descriptor("A", "/a/"));
        let views: Vec<&str> = router.routes().iter().map(Route::view).collect();
        assert_eq!(views, ["A", "B", "A"]);
    }

    #[test]
    fn test_resolved_config_carries_substituted_params() {
        let mut router = router();
        router.add(RouteDescriptor {
            keys: vec!["<name>".to_string()],
            params: serde_json::from_value(json!({"q": "<name>"})).unwrap(),
            ..descriptor("Artist", "/artist/<name>/")
        });
        let config = router.resolve("/artist/Miles/").unwrap();
        assert_eq!(config.params["q"], json!("Miles"));
        assert!(config.fetch.is_none());
    }

    #[test]
    fn test_history_change_without_root_is_ignored() {
        let router = router();
        // No panic, no dispatch: the router has no bound view yet.
        router.on_history_change(Some(&json!({
            "children": [{"path": "Artist"}]
        })));
        router.on_history_change(Some(&json!({})));
        router.on_history_change(None);
    }
}
