//! Compiled routes.
//!
//! # Responsibilities
//! - Compile a route descriptor into a matchable route
//! - Prepare a view configuration from a matching url
//!
//! # Design Decisions
//! - Routes are immutable after creation; `prepare` always works on a fresh
//!   structural copy of the params/fetch trees
//! - Captured url segments are zipped with the declared `keys` in positional
//!   order; extra captures without a key are dropped

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::routing::pattern::RoutePattern;
use crate::util;
use crate::view::config::{ParamMap, ViewConfig};

/// Route registration input, produced externally (e.g. by a server-side
/// router table).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RouteDescriptor {
    /// Name of the view the route resolves to.
    pub view: String,

    /// Url template, e.g. `/artist/<name>/`.
    pub rule: String,

    /// Placeholder tokens, in capture order, e.g. `["<name>"]`.
    #[serde(default)]
    pub keys: Vec<String>,

    /// View params; string leaves equal to a key are substituted on match.
    #[serde(default)]
    pub params: ParamMap,

    /// View fetch instructions; substituted the same way as `params`.
    #[serde(default)]
    pub fetch: Option<Value>,
}

/// A registered route: a compiled matcher plus the view configuration
/// template it populates.
#[derive(Debug, Clone)]
pub struct Route {
    view: String,
    pattern: RoutePattern,
    keys: Vec<String>,
    params: ParamMap,
    fetch: Option<Value>,
}

impl Route {
    /// Compile a descriptor into a route.
    pub fn new(descriptor: RouteDescriptor) -> Self {
        Self {
            pattern: RoutePattern::compile(&descriptor.rule),
            view: descriptor.view,
            keys: descriptor.keys,
            params: descriptor.params,
            fetch: descriptor.fetch,
        }
    }

    /// Name of the view this route resolves to.
    pub fn view(&self) -> &str {
        &self.view
    }

    /// The compiled url pattern.
    pub fn pattern(&self) -> &RoutePattern {
        &self.pattern
    }

    /// The unsubstituted view configuration carried by this route.
    pub fn config(&self) -> ViewConfig {
        ViewConfig {
            path: self.view.clone(),
            params: self.params.clone(),
            fetch: self.fetch.clone(),
            children: None,
            id: None,
        }
    }

    /// Match `url` against the compiled pattern. On a match, return a view
    /// configuration whose placeholder leaves are replaced by the captured
    /// url segments; on a mismatch return `None`. The route itself is never
    /// mutated.
    pub fn prepare(&self, url: &str) -> Option<ViewConfig> {
        let captured = self.pattern.captures(url)?;
        let replacements: HashMap<String, String> =
            self.keys.iter().cloned().zip(captured).collect();

        let mut config = self.config();
        config.params = util::substitute_map(&config.params, &replacements);
        config.fetch = config
            .fetch
            .as_ref()
            .map(|fetch| util::substitute(fetch, &replacements));
        Some(config)
    }
}
