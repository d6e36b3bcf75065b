//! # Navigation State
//!
//! The flat `NavIndex` and the read-side helpers consumers use on it.
//!
//! ```text
//! NavStore
//! └── index: NavIndex               // id → Arc<MenuNode>
//!       ├── "home"       → MenuNode (no parent)
//!       ├── "cfg"        → MenuNode ──parent──► home
//!       ├── "users"      → MenuNode ──parent──► cfg
//!       ├── "not-found"  → warning page
//!       └── "error"      → warning page
//! ```
//!
//! State changes only happen through `update(index, action)` in action.rs.
//! `NavStore` just holds whichever index is current. An absent key means
//! "no such navigation entry", never an error.

use log::debug;
use std::collections::HashMap;
use std::sync::Arc;

use crate::core::action::{self, Action};
use crate::core::builder::{HOME_NAV_ID, NOT_FOUND_NAV_ID};
use crate::core::node::{DisplayPair, MenuNode, build_warning_nav};

pub type NavIndex = HashMap<String, Arc<MenuNode>>;

/// The entry for `id` followed by its ancestors, nearest first.
/// Empty when `id` is not in the index.
pub fn breadcrumbs(index: &NavIndex, id: &str) -> Vec<Arc<MenuNode>> {
    let mut trail = Vec::new();
    let mut current = index.get(id).cloned();
    while let Some(node) = current {
        current = node.parent_item.clone();
        trail.push(node);
    }
    trail
}

/// Walks up from `node` to the highest ancestor below home.
pub fn section_root(node: &Arc<MenuNode>) -> Arc<MenuNode> {
    let mut root = Arc::clone(node);
    while let Some(parent) = root.parent_item.clone() {
        if parent.id == HOME_NAV_ID {
            break;
        }
        root = parent;
    }
    root
}

/// Resolves `id` to the page to display and its section root.
/// Unknown ids resolve to the not-found page.
pub fn nav_model(index: &NavIndex, id: &str) -> DisplayPair {
    if let Some(node) = index.get(id) {
        return DisplayPair {
            main: section_root(node),
            node: Arc::clone(node),
        };
    }
    debug!("No navigation entry for '{id}', using the not-found page");
    match index.get(NOT_FOUND_NAV_ID) {
        Some(not_found) => DisplayPair::single(Arc::clone(not_found)),
        None => build_warning_nav("Page not found", Some("404 Error")),
    }
}

/// Holds the current index and swaps in the result of each action.
#[derive(Debug, Default)]
pub struct NavStore {
    index: NavIndex,
}

impl NavStore {
    pub fn new(index: NavIndex) -> Self {
        Self { index }
    }

    pub fn index(&self) -> &NavIndex {
        &self.index
    }

    pub fn dispatch(&mut self, action: &Action) -> &NavIndex {
        self.index = action::update(&self.index, action);
        &self.index
    }

    pub fn dispatch_all(&mut self, actions: &[Action]) -> &NavIndex {
        self.index = action::replay(&self.index, actions);
        &self.index
    }
}
