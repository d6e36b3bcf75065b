//! # Index Builder
//!
//! Flattens the configured menu tree into a `NavIndex` once at startup.
//!
//! The traversal runs over an arena of slots so that parents can be assigned
//! top-down before any `Arc` exists:
//!
//! ```text
//!  roots ──► alloc slots ──► visit (DFS, keys last-write-wins)
//!                                   │
//!                                   ▼
//!                         detach home's parent
//!                                   │
//!                                   ▼
//!              freeze slots parents-first ──► NavIndex + warning pages
//! ```
//!
//! Top-level siblings get the `home` node as their parent. Home itself is a
//! top-level sibling, so its slot points at itself until the post-pass
//! clears it.

use log::debug;
use std::collections::HashMap;
use std::sync::Arc;

use crate::core::node::{MenuNode, build_warning_nav};
use crate::core::state::NavIndex;

pub const HOME_NAV_ID: &str = "home";
pub const NOT_FOUND_NAV_ID: &str = "not-found";
pub const ERROR_NAV_ID: &str = "error";

/// Builds a flat index from the top-level menu nodes.
///
/// Never fails: a missing home node leaves top-level entries without a
/// parent, and duplicate ids are resolved last-write-wins.
pub fn build(roots: &[Arc<MenuNode>]) -> NavIndex {
    let mut arena = Arena::default();

    let home = roots.iter().position(|node| node.id == HOME_NAV_ID);
    // Top-level nodes take slots 0..roots.len(), so `home` is also a slot.
    for root in roots {
        arena.alloc(root, home);
    }
    for slot in 0..roots.len() {
        arena.visit(slot);
    }

    arena.detach(HOME_NAV_ID);

    let mut index = arena.freeze();
    insert_warning_pages(&mut index);

    debug!(
        "Built navigation index: {} entries from {} nodes",
        index.len(),
        arena.slots.len()
    );
    index
}

/// Adds the `not-found` and `error` pages, replacing any configured
/// entries with the same ids.
fn insert_warning_pages(index: &mut NavIndex) {
    let not_found = build_warning_nav("Page not found", Some("404 Error"));
    let error = build_warning_nav("Page error", Some("An unexpected error"));

    index.insert(NOT_FOUND_NAV_ID.to_string(), not_found.node);
    index.insert(ERROR_NAV_ID.to_string(), error.node);
}

#[derive(Clone, Copy)]
struct Slot<'a> {
    node: &'a MenuNode,
    parent: Option<usize>,
}

#[derive(Default)]
struct Arena<'a> {
    slots: Vec<Slot<'a>>,
    keys: HashMap<&'a str, usize>,
}

impl<'a> Arena<'a> {
    fn alloc(&mut self, node: &'a MenuNode, parent: Option<usize>) -> usize {
        self.slots.push(Slot { node, parent });
        self.slots.len() - 1
    }

    /// Keys `slot` by its id, then descends with `slot` as the parent.
    fn visit(&mut self, slot: usize) {
        let node = self.slots[slot].node;
        if self.keys.insert(node.id.as_str(), slot).is_some() {
            debug!("Navigation id '{}' appears more than once, keeping the latest", node.id);
        }
        for child in &node.children {
            let child_slot = self.alloc(child, Some(slot));
            self.visit(child_slot);
        }
    }

    fn detach(&mut self, id: &str) {
        if let Some(&slot) = self.keys.get(id) {
            self.slots[slot].parent = None;
        }
    }

    fn freeze(&self) -> NavIndex {
        let mut frozen = vec![None; self.slots.len()];
        self.keys
            .iter()
            .map(|(id, &slot)| (id.to_string(), self.freeze_slot(slot, &mut frozen)))
            .collect()
    }

    fn freeze_slot(&self, slot: usize, frozen: &mut [Option<Arc<MenuNode>>]) -> Arc<MenuNode> {
        if let Some(node) = &frozen[slot] {
            return Arc::clone(node);
        }
        let Slot { node, parent } = self.slots[slot];
        // A shadowed duplicate `home` keeps pointing at itself; drop that link.
        let parent_item = match parent {
            Some(parent) if parent != slot => Some(self.freeze_slot(parent, frozen)),
            _ => None,
        };

        let node = Arc::new(node.with_parent(parent_item));
        frozen[slot] = Some(Arc::clone(&node));
        node
    }
}
