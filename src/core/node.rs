//! # Menu Nodes
//!
//! A `MenuNode` is one navigation entry. Nodes arrive as a tree from the
//! menu configuration and end up as values in the flat `NavIndex`.
//!
//! ```text
//! MenuNode
//! ├── id: String                     // key in the flat index
//! ├── text / sub_title / icon / url  // display attributes
//! ├── children: Vec<Arc<MenuNode>>   // owned, top-down
//! └── parent_item: Option<Arc<..>>   // back-reference, bottom-up
//! ```
//!
//! Ownership only ever points one way per field: `children` down the tree,
//! `parent_item` up it. A parent is always allocated before anything that
//! points at it, so the `Arc` graph never forms a cycle.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Icon used by the synthetic warning pages.
pub const WARNING_ICON: &str = "exclamation-triangle";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuNode {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// The configured subtree. These are the source nodes: they carry no
    /// `parent_item` and are not the `Arc`s stored in the index, so walk
    /// down by looking each child's id up in the index.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Arc<MenuNode>>,
    /// Owning node, for upward lookups (breadcrumbs). Assigned by the
    /// builder or the updater, never read from configuration.
    #[serde(skip)]
    pub parent_item: Option<Arc<MenuNode>>,
}

impl MenuNode {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn with_children(mut self, children: Vec<MenuNode>) -> Self {
        self.children = children.into_iter().map(Arc::new).collect();
        self
    }

    /// Shallow copy of this node with `parent_item` replaced.
    /// Children are shared with the original, not copied.
    pub fn with_parent(&self, parent_item: Option<Arc<MenuNode>>) -> MenuNode {
        MenuNode {
            parent_item,
            ..self.clone()
        }
    }

    pub fn parent_id(&self) -> Option<&str> {
        self.parent_item.as_deref().map(|parent| parent.id.as_str())
    }
}

/// A single displayable page: the node being shown and the section it
/// belongs to. For standalone pages both point at the same node.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayPair {
    pub node: Arc<MenuNode>,
    pub main: Arc<MenuNode>,
}

impl DisplayPair {
    pub fn single(node: Arc<MenuNode>) -> Self {
        Self {
            main: Arc::clone(&node),
            node,
        }
    }
}

/// Builds a standalone warning page (no id, no parent, no children).
pub fn build_warning_nav(text: &str, sub_title: Option<&str>) -> DisplayPair {
    let node = MenuNode {
        text: text.to_string(),
        sub_title: sub_title.map(str::to_string),
        icon: Some(WARNING_ICON.to_string()),
        ..Default::default()
    };
    DisplayPair::single(Arc::new(node))
}
