//! # Core Navigation Logic
//!
//! This module contains the navigation index and everything that changes it.
//! `build()` and `update()` know nothing about where the menu comes from or
//! who renders it. File access is confined to [`source`] and [`config`].
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • build() (flatten)    │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  build/update: pure     │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    CLI     │      │  Menu UI   │      │ Breadcrumb │
//!     │  (main.rs) │      │ (consumer) │      │ (consumer) │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`node`]: `MenuNode` and `DisplayPair`
//! - [`builder`]: tree → `NavIndex` flattening
//! - [`action`]: the `Action` enum and the `update()` reducer
//! - [`state`]: `NavIndex`, lookups and the `NavStore` container
//! - [`source`]: JSON loading for the menu tree and event log, `build_initial_state` (I/O lives here)
//! - [`config`]: `~/.navindex/config.toml` and override resolution

pub mod action;
pub mod builder;
pub mod config;
pub mod node;
pub mod source;
pub mod state;

// Re-export commonly used types for convenience
pub use action::{Action, update};
pub use node::{DisplayPair, MenuNode};
pub use state::NavIndex;
