//! View configuration schema.
//!
//! This module defines the plain data descriptors exchanged between the
//! router, the view tree, the render backend, and browser history state.
//! All types derive Serde traits so the same shape flows through every seam.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// String-keyed parameter mapping; values may be strings or nested mappings.
pub type ParamMap = serde_json::Map<String, Value>;

/// Structural descriptor of a view: its type, parameters, fetch instructions,
/// and (optionally) its descendants.
///
/// Produced by two sources that must stay interchangeable: route preparation
/// (from a URL match) and [`View::get_config`](crate::View::get_config) (from
/// the live tree), since history state replays one through the other.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewConfig {
    /// View type identifier, resolved through the view registry.
    pub path: String,

    /// Options controlling how the view behaves.
    #[serde(default)]
    pub params: ParamMap,

    /// Where the view's data is fetched from; opaque to this crate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fetch: Option<Value>,

    /// Descendant descriptors. Absent unless explicitly requested, keeping
    /// render round-trip payloads minimal.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<ViewConfig>>,

    /// Id of an existing host element the view should adopt. Input-side only;
    /// snapshots never emit it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl ViewConfig {
    /// Descriptor for a view type with no parameters.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }
}
