use navindex::core::action::{Action, ORGANIZATION_SUBTITLE_TARGETS, replay, update};
use navindex::core::builder::{ERROR_NAV_ID, HOME_NAV_ID, NOT_FOUND_NAV_ID, build};
use navindex::core::source::{SourceError, build_initial_state, parse_events, parse_tree};
use navindex::core::state::{NavStore, breadcrumbs, nav_model};
use navindex::core::{MenuNode, NavIndex};
use std::io::Write;
use std::sync::Arc;

// ============================================================================
// Helper Functions
// ============================================================================

const MENU_JSON: &str = r#"[
    { "id": "home", "text": "Home", "icon": "home-alt", "url": "/" },
    { "id": "explore", "text": "Explore", "url": "/explore" },
    { "id": "cfg", "text": "Administration", "icon": "cog", "url": "/admin", "children": [
        { "id": "datasources", "text": "Data sources", "url": "/connections/datasources" },
        { "id": "users", "text": "Users", "url": "/admin/users", "children": [
            { "id": "users/invite", "text": "Invite", "url": "/admin/users/invite" }
        ]},
        { "id": "teams", "text": "Teams", "url": "/org/teams" }
    ]}
]"#;

fn menu_index() -> NavIndex {
    build(&parse_tree(MENU_JSON).unwrap())
}

/// Every non-home, non-warning entry must point at the indexed entry of its parent.
fn assert_parents_are_indexed(index: &NavIndex) {
    for (id, node) in index {
        if let Some(parent) = &node.parent_item {
            assert!(
                Arc::ptr_eq(parent, &index[&parent.id]),
                "{id} points at a detached copy of {}",
                parent.id
            );
        }
    }
}

// ============================================================================
// Build
// ============================================================================

#[test]
fn test_build_from_json_indexes_every_node() {
    let index = menu_index();
    let mut ids: Vec<&str> = index.keys().map(String::as_str).collect();
    ids.sort();
    assert_eq!(
        ids,
        vec![
            "cfg",
            "datasources",
            "error",
            "explore",
            "home",
            "not-found",
            "teams",
            "users",
            "users/invite"
        ]
    );
    assert_parents_are_indexed(&index);
}

#[test]
fn test_build_home_and_warning_pages_have_no_parent() {
    let index = menu_index();
    for id in [HOME_NAV_ID, NOT_FOUND_NAV_ID, ERROR_NAV_ID] {
        assert!(index[id].parent_item.is_none(), "{id} has a parent");
    }
    assert_eq!(index["explore"].parent_id(), Some(HOME_NAV_ID));
}

#[test]
fn test_build_initial_state_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(MENU_JSON.as_bytes()).unwrap();

    let index = build_initial_state(file.path()).unwrap();
    assert_eq!(index, menu_index());
}

#[test]
fn test_build_initial_state_bad_json() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"[{ \"id\": ").unwrap();

    let err = build_initial_state(file.path()).unwrap_err();
    assert!(matches!(err, SourceError::Parse(_)));
}

// ============================================================================
// Update
// ============================================================================

#[test]
fn test_replace_subtree_from_event_json() {
    let index = menu_index();
    let actions = parse_events(
        r#"[{ "type": "replaceSubtree", "item": {
            "id": "users", "text": "Users", "children": [
                { "id": "users/invite", "text": "Invite people" },
                { "id": "users/roles", "text": "Roles" }
            ]
        }}]"#,
    )
    .unwrap();

    let next = update(&index, &actions[0]);

    assert_eq!(next["users/invite"].text, "Invite people");
    assert_eq!(next["users/roles"].parent_id(), Some("users"));
    // The payload is the new parent, not the indexed `users` entry.
    let Action::ReplaceSubtree { item } = &actions[0] else {
        panic!("Expected ReplaceSubtree");
    };
    assert!(Arc::ptr_eq(next["users/roles"].parent_item.as_ref().unwrap(), item));
    assert!(Arc::ptr_eq(&index["users"], &next["users"]));
    assert_eq!(index["users/invite"].text, "Invite");
}

#[test]
fn test_broadcast_updates_exactly_the_fixed_keys() {
    let index = menu_index();
    let next = update(
        &index,
        &Action::BroadcastSubtitle {
            organization_name: "Acme".to_string(),
        },
    );

    let targets: Vec<&str> = ORGANIZATION_SUBTITLE_TARGETS.iter().map(|(key, _)| *key).collect();
    for (id, node) in &index {
        if targets.contains(&id.as_str()) {
            assert!(!Arc::ptr_eq(node, &next[id]));
        } else {
            assert!(Arc::ptr_eq(node, &next[id]), "{id} changed");
        }
    }
    for key in targets {
        assert!(next.contains_key(key));
    }

    assert_eq!(next["cfg"].sub_title.as_deref(), Some("Organization: Acme"));
    let users_parent = next["users"].parent_item.as_ref().unwrap();
    assert_eq!(users_parent.sub_title.as_deref(), Some("Organization: Acme"));
    assert_eq!(next["users"].text, "Users");
    // Only the copied parent carries the subtitle; the indexed cfg is a separate node.
    assert!(!Arc::ptr_eq(users_parent, &next["cfg"]));
    assert_eq!(next["users/invite"].parent_id(), Some("users"));
}

#[test]
fn test_replay_matches_step_by_step_dispatch() {
    let index = menu_index();
    let actions = vec![
        Action::BroadcastSubtitle {
            organization_name: "First".to_string(),
        },
        Action::ReplaceSubtree {
            item: Arc::new(MenuNode::new("cfg", "Administration").with_children(vec![
                MenuNode::new("datasources", "Connections"),
            ])),
        },
        Action::BroadcastSubtitle {
            organization_name: "Second".to_string(),
        },
    ];

    let mut store = NavStore::new(index.clone());
    for action in &actions {
        store.dispatch(action);
    }
    assert_eq!(store.index(), &replay(&index, &actions));
    assert_eq!(store.index()["datasources"].text, "Connections");
    assert_eq!(
        store.index()["datasources"]
            .parent_item
            .as_ref()
            .and_then(|parent| parent.sub_title.as_deref()),
        Some("Organization: Second")
    );
}

// ============================================================================
// Lookups
// ============================================================================

#[test]
fn test_breadcrumbs_and_nav_model_after_build() {
    let index = menu_index();
    let trail = breadcrumbs(&index, "users/invite");
    let labels: Vec<&str> = trail.iter().map(|node| node.text.as_str()).collect();
    assert_eq!(labels, vec!["Invite", "Users", "Administration", "Home"]);

    let model = nav_model(&index, "users/invite");
    assert_eq!(model.node.id, "users/invite");
    assert_eq!(model.main.id, "cfg");

    let missing = nav_model(&index, "does-not-exist");
    assert_eq!(missing.node.text, "Page not found");
}
