//! Collapsible tree widget
//!
//! - `identifier`: paths addressing nodes
//! - `item`: tree items and their labels
//! - `flatten`: the visible rows of a tree
//! - `state`: selection, opened nodes and keyboard navigation
//! - `widget`: rendering into a ratatui buffer

mod flatten;
mod identifier;
mod item;
mod state;
mod widget;

pub use flatten::{flatten, Flattened};
pub use identifier::{get_without_leaf, TreeIdentifier, TreeIdentifierVec};
pub use item::{get_item, get_item_mut, TreeItem, TreeItemRender};
pub use state::TreeState;
pub use widget::Tree;
