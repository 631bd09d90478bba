//! treeview - a collapsible tree widget for ratatui
//!
//! The [`Tree`] widget renders nested [`TreeItem`]s. What is opened and
//! selected lives in a [`TreeState`] owned by the caller, which also handles
//! keyboard navigation over the currently visible rows.
//!
//! The crate also ships the `treeview` binary, a terminal viewer for
//! directories and JSON / YAML / TOML documents built on the widget.

#![forbid(unsafe_code)]

pub mod config;
pub mod source;
pub mod tree;
pub mod tui;

pub use tree::{
    flatten, get_item, get_item_mut, get_without_leaf as get_identifier_without_leaf, Flattened,
    Tree, TreeIdentifier, TreeIdentifierVec, TreeItem, TreeItemRender, TreeState,
};
