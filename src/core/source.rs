//! # Menu Sources
//!
//! Reads the menu tree and the update-event log from JSON files, and builds
//! the startup index from the tree file. All file I/O of the core lives here.
//!
//! The tree file is an array of top-level nodes; the event file is an
//! array of actions:
//!
//! ```text
//! nav_tree.json  [{ "id": "home", "text": "Home" }, { "id": "cfg", "children": [...] }]
//! events.json    [{ "type": "broadcastSubtitle", "organizationName": "Acme" }]
//! ```

use log::{debug, info};
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;
use std::sync::Arc;

use crate::core::action::Action;
use crate::core::builder;
use crate::core::node::MenuNode;
use crate::core::state::NavIndex;

#[derive(Debug)]
pub enum SourceError {
    Io(io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceError::Io(e) => write!(f, "menu source I/O error: {e}"),
            SourceError::Parse(e) => write!(f, "menu source parse error: {e}"),
        }
    }
}

impl std::error::Error for SourceError {}

pub fn parse_tree(json: &str) -> Result<Vec<Arc<MenuNode>>, SourceError> {
    serde_json::from_str(json).map_err(SourceError::Parse)
}

/// Load the top-level menu nodes from a JSON file.
pub fn load_tree(path: &Path) -> Result<Vec<Arc<MenuNode>>, SourceError> {
    let json = fs::read_to_string(path).map_err(SourceError::Io)?;
    let roots = parse_tree(&json)?;
    info!("Loaded {} top-level menu nodes from {}", roots.len(), path.display());
    Ok(roots)
}

/// Loads the menu tree at `path` and builds the initial index from it.
///
/// The loaded tree belongs to this call alone, so nothing outside the
/// returned index ever sees the parent references.
pub fn build_initial_state(path: &Path) -> Result<NavIndex, SourceError> {
    let roots = load_tree(path)?;
    Ok(builder::build(&roots))
}

pub fn parse_events(json: &str) -> Result<Vec<Action>, SourceError> {
    serde_json::from_str(json).map_err(SourceError::Parse)
}

/// Load an event log to replay on top of the initial index.
pub fn load_events(path: &Path) -> Result<Vec<Action>, SourceError> {
    let json = fs::read_to_string(path).map_err(SourceError::Io)?;
    let actions = parse_events(&json)?;
    debug!("Loaded {} navigation events from {}", actions.len(), path.display());
    Ok(actions)
}
