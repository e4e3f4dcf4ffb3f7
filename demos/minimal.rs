//! Minimal wiring demo: a headless environment, a canned render backend, one
//! view type, one route, and a couple of navigations.
//!
//! Run with: `cargo run --example demo`

use std::cell::RefCell;
use std::rc::Rc;

use futures_util::future::LocalBoxFuture;
use futures_util::FutureExt;
use serde_json::{json, Value};

use viewtree::{
    App, Element, Environment, NavigateEvent, PopStateHandler, RenderBackend, RenderResponse,
    RouteDescriptor, View, ViewBehavior, ViewConfig,
};

/// Headless stand-in for the browser: prints what a real host would do.
struct ShellEnvironment {
    pop_handler: RefCell<Option<PopStateHandler>>,
}

impl Environment for ShellEnvironment {
    fn history_supported(&self) -> bool {
        true
    }

    fn current_url(&self) -> String {
        "/".to_string()
    }

    fn document_title(&self) -> String {
        "viewtree demo".to_string()
    }

    fn push_state(&self, state: Value, _title: &str, url: &str) {
        println!("history.pushState({url}) state={state}");
    }

    fn replace_state(&self, _state: Value, _title: &str, url: &str) {
        println!("history.replaceState({url})");
    }

    fn assign_location(&self, url: &str) {
        println!("location.assign({url})  (full page navigation)");
    }

    fn element_by_id(&self, _id: &str) -> Option<Rc<dyn Element>> {
        None
    }

    fn set_pop_state_handler(&self, handler: PopStateHandler) {
        *self.pop_handler.borrow_mut() = Some(handler);
    }
}

/// Backend answering every request with a canned artist page.
struct CannedBackend;

impl RenderBackend for CannedBackend {
    fn render(&self, config: &ViewConfig) -> LocalBoxFuture<'static, viewtree::Result<RenderResponse>> {
        let name = config.params.get("q").cloned().unwrap_or(json!("unknown"));
        async move {
            Ok(RenderResponse {
                html: format!("<div class=\"artist\">{name}</div>"),
                tree: serde_json::from_value(json!({
                    "path": "Artist",
                    "params": {"q": name},
                }))
                .expect("canned tree is a valid descriptor"),
            })
        }
        .boxed_local()
    }
}

/// Root view: claims resolved navigations and records them in history.
struct AppViewBehavior;

impl ViewBehavior for AppViewBehavior {
    fn on_navigate(
        &self,
        _view: &View,
        event: &mut NavigateEvent,
        push_history: Option<&dyn Fn() -> bool>,
    ) {
        println!("App view handles navigation to {}", event.url());
        if let Some(push) = push_history {
            push();
        }
        event.prevent_default();
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> viewtree::Result<()> {
    viewtree::observability::logging::init();

    let env = Rc::new(ShellEnvironment {
        pop_handler: RefCell::new(None),
    });
    let app = App::new(env, Rc::new(CannedBackend));

    app.register_view("App", AppViewBehavior);
    app.register_view("Artist", viewtree::DefaultBehavior);

    let routes: Vec<RouteDescriptor> = serde_json::from_value(json!([{
        "view": "Artist",
        "rule": "/artist/<name>/",
        "keys": ["<name>"],
        "params": {"q": "<name>"},
    }]))
    .expect("route table is valid");

    let root_descriptor: ViewConfig = serde_json::from_value(json!({
        "path": "App",
        "children": [{"path": "Artist", "params": {"q": "Miles"}}],
    }))
    .expect("root descriptor is valid");

    let root = app
        .initialize(Some(&root_descriptor), routes)?
        .expect("a root descriptor was supplied");

    // Resolvable: bubbles to the App view, which pushes history.
    let artist = root.children().pop().expect("root has one child");
    artist.navigate("/artist/Coltrane/", false)?;

    // Unresolvable: handed to the browser.
    artist.navigate("/about/", false)?;

    // A render round-trip against the canned backend.
    artist.render().await?;
    println!("artist params after render: {:?}", artist.params());

    Ok(())
}
