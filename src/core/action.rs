//! # Actions
//!
//! Everything that can change the navigation index becomes an `Action`.
//! A plugin page registers its tabs? That's `Action::ReplaceSubtree`.
//! The organization is renamed? That's `Action::BroadcastSubtitle`.
//!
//! The `update()` function takes the current index and an action,
//! then returns the next index. No side effects here. I/O happens elsewhere.
//!
//! ```text
//! NavIndex + Action  →  update()  →  New NavIndex
//! ```
//!
//! The input index is never modified. Entries the action does not touch are
//! shared with the input by `Arc`, so `Arc::ptr_eq` tells a consumer exactly
//! which keys changed. A sequence of states is a fold over the event log,
//! see [`replay`].

use log::debug;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::core::node::MenuNode;
use crate::core::state::NavIndex;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Action {
    /// Re-parents the immediate children of `item` under `item`.
    ReplaceSubtree { item: Arc<MenuNode> },
    /// Writes `Organization: <name>` into the organization-scoped pages.
    #[serde(rename_all = "camelCase")]
    BroadcastSubtitle { organization_name: String },
}

/// Which node of an entry receives the organization subtitle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubtitleTarget {
    /// The entry's own `sub_title`.
    Node,
    /// The `sub_title` of the entry's `parent_item` (its breadcrumb parent).
    Parent,
}

/// Entries rewritten by [`Action::BroadcastSubtitle`].
pub const ORGANIZATION_SUBTITLE_TARGETS: [(&str, SubtitleTarget); 8] = [
    ("cfg", SubtitleTarget::Node),
    ("datasources", SubtitleTarget::Parent),
    ("correlations", SubtitleTarget::Parent),
    ("users", SubtitleTarget::Parent),
    ("teams", SubtitleTarget::Parent),
    ("plugins", SubtitleTarget::Parent),
    ("org-settings", SubtitleTarget::Parent),
    ("apikeys", SubtitleTarget::Parent),
];

pub fn organization_subtitle(organization_name: &str) -> String {
    format!("Organization: {organization_name}")
}

/// Applies one action to `index` and returns the next index.
pub fn update(index: &NavIndex, action: &Action) -> NavIndex {
    match action {
        Action::ReplaceSubtree { item } => replace_subtree(index, item),
        Action::BroadcastSubtitle { organization_name } => {
            broadcast_subtitle(index, organization_name)
        }
    }
}

/// Applies `actions` in order, starting from `index`.
pub fn replay(index: &NavIndex, actions: &[Action]) -> NavIndex {
    actions
        .iter()
        .fold(index.clone(), |current, action| update(&current, action))
}

fn replace_subtree(index: &NavIndex, item: &Arc<MenuNode>) -> NavIndex {
    let mut next = index.clone();
    for child in &item.children {
        let entry = child.with_parent(Some(Arc::clone(item)));
        next.insert(child.id.clone(), Arc::new(entry));
    }
    debug!(
        "Replaced {} children of '{}' in navigation index",
        item.children.len(),
        item.id
    );
    next
}

fn broadcast_subtitle(index: &NavIndex, organization_name: &str) -> NavIndex {
    let sub_title = organization_subtitle(organization_name);
    let mut next = index.clone();

    for (key, target) in ORGANIZATION_SUBTITLE_TARGETS {
        let current = index.get(key);
        if current.is_none() {
            debug!("No navigation entry for '{key}', creating one for the subtitle");
        }
        let entry = match target {
            SubtitleTarget::Node => with_sub_title(current, key, &sub_title),
            SubtitleTarget::Parent => with_parent_sub_title(current, key, &sub_title),
        };
        next.insert(key.to_string(), Arc::new(entry));
    }

    debug!("Broadcast subtitle '{sub_title}'");
    next
}

fn copy_or_stub(entry: Option<&Arc<MenuNode>>, key: &str) -> MenuNode {
    match entry {
        Some(entry) => MenuNode::clone(entry),
        None => MenuNode::new(key, ""),
    }
}

fn with_sub_title(entry: Option<&Arc<MenuNode>>, key: &str, sub_title: &str) -> MenuNode {
    MenuNode {
        sub_title: Some(sub_title.to_string()),
        ..copy_or_stub(entry, key)
    }
}

fn with_parent_sub_title(entry: Option<&Arc<MenuNode>>, key: &str, sub_title: &str) -> MenuNode {
    let entry = copy_or_stub(entry, key);
    // A missing parent becomes an empty-text node carrying just the subtitle.
    let parent = entry.parent_item.as_deref().cloned().unwrap_or_default();
    MenuNode {
        parent_item: Some(Arc::new(MenuNode {
            sub_title: Some(sub_title.to_string()),
            ..parent
        })),
        ..entry
    }
}
