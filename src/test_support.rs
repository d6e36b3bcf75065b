//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;

use crate::core::node::MenuNode;

/// A childless node whose text is its id.
pub fn leaf(id: &str) -> MenuNode {
    MenuNode::new(id, id)
}

pub fn roots(nodes: Vec<MenuNode>) -> Vec<Arc<MenuNode>> {
    nodes.into_iter().map(Arc::new).collect()
}

fn page(id: &str, text: &str, url: &str) -> MenuNode {
    MenuNode {
        url: Some(url.to_string()),
        ..MenuNode::new(id, text)
    }
}

/// A home page, a dashboards section and an administration section
/// holding every organization-scoped page.
pub fn admin_tree() -> Vec<Arc<MenuNode>> {
    roots(vec![
        page("home", "Home", "/"),
        page("dashboards", "Dashboards", "/dashboards")
            .with_children(vec![page("dashboards/browse", "Browse", "/dashboards/browse")]),
        MenuNode {
            icon: Some("cog".to_string()),
            ..page("cfg", "Administration", "/admin")
        }
        .with_children(vec![
            page("datasources", "Data sources", "/connections/datasources"),
            page("correlations", "Correlations", "/datasources/correlations"),
            page("users", "Users", "/admin/users"),
            page("teams", "Teams", "/org/teams"),
            page("plugins", "Plugins", "/plugins"),
            page("org-settings", "Default preferences", "/org"),
            page("apikeys", "API keys", "/org/apikeys"),
        ]),
    ])
}
