//! Application wiring.
//!
//! # Responsibilities
//! - Assemble the shared context (router, registry, capabilities)
//! - Initialize the view tree and routes handed over by the server
//! - Subscribe the router to history notifications
//!
//! # Design Decisions
//! - Process-wide state is injected explicitly through one shared context
//!   instead of a hidden singleton; views reach the router through their
//!   context handle
//! - `initialize` is additive: calling it again appends routes to the same
//!   router rather than replacing it

use std::cell::RefCell;
use std::rc::Rc;

use crate::env::Environment;
use crate::error::Result;
use crate::render::RenderBackend;
use crate::routing::route::RouteDescriptor;
use crate::routing::router::Router;
use crate::view::config::ViewConfig;
use crate::view::node::View;
use crate::view::registry::{ViewBehavior, ViewRegistry};

/// Shared state every view can reach: the host capabilities, the render
/// backend, the view registry, and the router.
pub struct Context {
    /// Host page capabilities (history, location, elements).
    pub env: Rc<dyn Environment>,
    /// The rendering backend collaborator.
    pub backend: Rc<dyn RenderBackend>,
    /// Registered view variants.
    pub registry: RefCell<ViewRegistry>,
    /// Route registry and history manager.
    pub router: RefCell<Router>,
}

/// Top of the toolkit: owns the shared context and wires views, routes, and
/// history together.
///
/// Typical startup, with descriptors produced by the server:
///
/// ```no_run
/// # use std::rc::Rc;
/// # use viewtree::{App, DefaultBehavior, HttpRenderBackend, ViewConfig};
/// # fn wire(env: Rc<dyn viewtree::Environment>) -> viewtree::Result<()> {
/// let backend = Rc::new(HttpRenderBackend::new("http://localhost:8080/view/".parse().unwrap()));
/// let app = App::new(env, backend);
/// app.register_view("App", DefaultBehavior);
/// app.initialize(Some(&ViewConfig::new("App")), vec![])?;
/// # Ok(())
/// # }
/// ```
pub struct App {
    ctx: Rc<Context>,
}

impl App {
    /// Build an application on top of the host environment and a render
    /// backend.
    pub fn new(env: Rc<dyn Environment>, backend: Rc<dyn RenderBackend>) -> Self {
        let router = RefCell::new(Router::new(env.clone()));
        Self {
            ctx: Rc::new(Context {
                env,
                backend,
                registry: RefCell::new(ViewRegistry::new()),
                router,
            }),
        }
    }

    /// The shared context handle.
    pub fn context(&self) -> &Rc<Context> {
        &self.ctx
    }

    /// Record a view variant under `name`, replacing any previous binding.
    pub fn register_view(&self, name: impl Into<String>, behavior: impl ViewBehavior + 'static) {
        self.ctx.registry.borrow_mut().register(name, behavior);
    }

    /// Register `routes` and, when a root descriptor is given, build the view
    /// tree, start the router on it, and subscribe to history notifications.
    ///
    /// Routes append to whatever was registered before; the router instance
    /// persists for the page session.
    pub fn initialize(
        &self,
        root: Option<&ViewConfig>,
        routes: Vec<RouteDescriptor>,
    ) -> Result<Option<View>> {
        {
            let mut router = self.ctx.router.borrow_mut();
            for descriptor in routes {
                router.add(descriptor);
            }
        }

        let Some(root) = root else {
            return Ok(None);
        };

        let view = self.ctx.registry.borrow().initialize(root, &self.ctx)?;
        self.ctx.router.borrow_mut().start(&view);

        let ctx = Rc::downgrade(&self.ctx);
        self.ctx.env.set_pop_state_handler(Box::new(move |state| {
            if let Some(ctx) = ctx.upgrade() {
                ctx.router.borrow().on_history_change(state.as_ref());
            }
        }));

        tracing::info!(root = %view.name(), "application initialized");
        Ok(Some(view))
    }
}
