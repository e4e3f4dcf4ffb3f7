//! Shared doubles for integration tests: a recording host environment, DOM
//! elements, a scriptable render backend, and a recording view behavior.

// Each test binary uses its own subset of these helpers.
#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

use futures_util::future::LocalBoxFuture;
use futures_util::FutureExt;
use serde_json::Value;

use viewtree::{
    ClickEvent, ClickHandler, Element, Environment, Error, NavigateEvent, PopStateHandler,
    RenderBackend, RenderResponse, View, ViewBehavior, ViewConfig,
};

/// Host environment recording every capability call.
pub struct MockEnvironment {
    pub history_supported: Cell<bool>,
    pub url: RefCell<String>,
    pub title: RefCell<String>,
    pub pushes: RefCell<Vec<(Value, String)>>,
    pub replaces: RefCell<Vec<(Value, String)>>,
    pub assigns: RefCell<Vec<String>>,
    pub elements: RefCell<HashMap<String, Rc<MockElement>>>,
    pop_handler: RefCell<Option<PopStateHandler>>,
}

impl MockEnvironment {
    pub fn new() -> Rc<Self> {
        Rc::new(Self {
            history_supported: Cell::new(true),
            url: RefCell::new("/".to_string()),
            title: RefCell::new("test page".to_string()),
            pushes: RefCell::new(Vec::new()),
            replaces: RefCell::new(Vec::new()),
            assigns: RefCell::new(Vec::new()),
            elements: RefCell::new(HashMap::new()),
            pop_handler: RefCell::new(None),
        })
    }

    /// Register an adoptable element under `id` and return it.
    pub fn add_element(&self, id: &str) -> Rc<MockElement> {
        let element = Rc::new(MockElement::default());
        self.elements.borrow_mut().insert(id.to_string(), element.clone());
        element
    }

    /// Deliver a back/forward notification to the subscribed handler.
    pub fn fire_pop_state(&self, state: Option<Value>) {
        let handler = self.pop_handler.borrow();
        if let Some(handler) = handler.as_ref() {
            handler(state);
        }
    }

    pub fn has_pop_handler(&self) -> bool {
        self.pop_handler.borrow().is_some()
    }
}

impl Environment for MockEnvironment {
    fn history_supported(&self) -> bool {
        self.history_supported.get()
    }

    fn current_url(&self) -> String {
        self.url.borrow().clone()
    }

    fn document_title(&self) -> String {
        self.title.borrow().clone()
    }

    fn push_state(&self, state: Value, _title: &str, url: &str) {
        self.pushes.borrow_mut().push((state, url.to_string()));
    }

    fn replace_state(&self, state: Value, _title: &str, url: &str) {
        self.replaces.borrow_mut().push((state, url.to_string()));
    }

    fn assign_location(&self, url: &str) {
        self.assigns.borrow_mut().push(url.to_string());
    }

    fn element_by_id(&self, id: &str) -> Option<Rc<dyn Element>> {
        self.elements
            .borrow()
            .get(id)
            .map(|element| element.clone() as Rc<dyn Element>)
    }

    fn set_pop_state_handler(&self, handler: PopStateHandler) {
        *self.pop_handler.borrow_mut() = Some(handler);
    }
}

/// Adoptable element recording content changes and lifecycle calls.
#[derive(Default)]
pub struct MockElement {
    pub id_stripped: Cell<bool>,
    pub html: RefCell<Option<String>>,
    pub removed: Cell<bool>,
    click_handler: RefCell<Option<ClickHandler>>,
}

impl MockElement {
    /// Simulate a click on a descendant anchor with the given href.
    pub fn click_anchor(&self, href: Option<&str>) -> ClickEvent {
        let event = ClickEvent::new(href.map(str::to_string));
        let handler = self.click_handler.borrow();
        if let Some(handler) = handler.as_ref() {
            handler(&event);
        }
        event
    }

    pub fn has_click_handler(&self) -> bool {
        self.click_handler.borrow().is_some()
    }
}

impl Element for MockElement {
    fn strip_id(&self) {
        self.id_stripped.set(true);
    }

    fn set_html(&self, html: &str) {
        *self.html.borrow_mut() = Some(html.to_string());
    }

    fn remove(&self) {
        self.removed.set(true);
    }

    fn set_click_handler(&self, handler: ClickHandler) {
        *self.click_handler.borrow_mut() = Some(handler);
    }
}

/// Scripted reply for one render request.
pub enum MockReply {
    Ok(RenderResponse),
    Status(u16),
}

/// Render backend answering from a scripted queue and recording every
/// request body it sees.
#[derive(Default)]
pub struct MockBackend {
    pub requests: RefCell<Vec<ViewConfig>>,
    replies: RefCell<VecDeque<MockReply>>,
}

impl MockBackend {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn enqueue(&self, reply: MockReply) {
        self.replies.borrow_mut().push_back(reply);
    }

    pub fn enqueue_ok(&self, html: &str, tree: ViewConfig) {
        self.enqueue(MockReply::Ok(RenderResponse {
            html: html.to_string(),
            tree,
        }));
    }
}

impl RenderBackend for MockBackend {
    fn render(&self, config: &ViewConfig) -> LocalBoxFuture<'static, viewtree::Result<RenderResponse>> {
        self.requests.borrow_mut().push(config.clone());
        let reply = self.replies.borrow_mut().pop_front();
        async move {
            match reply {
                Some(MockReply::Ok(response)) => Ok(response),
                Some(MockReply::Status(status)) => Err(Error::RenderStatus(status)),
                None => Err(Error::RenderStatus(503)),
            }
        }
        .boxed_local()
    }
}

/// Behavior writing every hook invocation into a shared log, optionally
/// claiming navigations (push history + prevent default).
pub struct RecordingBehavior {
    pub label: String,
    pub log: Rc<RefCell<Vec<String>>>,
    pub claim_navigation: bool,
}

impl RecordingBehavior {
    pub fn new(label: &str, log: &Rc<RefCell<Vec<String>>>) -> Self {
        Self {
            label: label.to_string(),
            log: log.clone(),
            claim_navigation: false,
        }
    }

    pub fn claiming(label: &str, log: &Rc<RefCell<Vec<String>>>) -> Self {
        Self {
            claim_navigation: true,
            ..Self::new(label, log)
        }
    }
}

impl ViewBehavior for RecordingBehavior {
    fn on_navigate(
        &self,
        _view: &View,
        event: &mut NavigateEvent,
        push_history: Option<&dyn Fn() -> bool>,
    ) {
        self.log
            .borrow_mut()
            .push(format!("{}:navigate:{}", self.label, event.url()));
        if self.claim_navigation {
            if let Some(push) = push_history {
                push();
            }
            event.prevent_default();
        }
    }

    fn after_render(&self, _view: &View, succeeded: bool) {
        self.log
            .borrow_mut()
            .push(format!("{}:after_render:{}", self.label, succeeded));
    }
}
