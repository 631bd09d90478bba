use std::collections::HashSet;

use tracing::trace;

use super::flatten::flatten;
use super::identifier::{get_without_leaf, TreeIdentifier, TreeIdentifierVec};
use super::item::{get_item, get_item_mut, TreeItem};

/// Keeps the state of what is currently selected and what was opened in a [`Tree`](super::Tree)
///
/// # Example
///
/// ```
/// # use treeview::TreeState;
/// let mut state = TreeState::default();
/// state.select_first();
/// assert_eq!(state.selected(), vec![0]);
/// ```
#[derive(Debug, Default, Clone)]
pub struct TreeState {
    pub(crate) offset: usize,
    pub(crate) opened: HashSet<TreeIdentifierVec>,
    pub(crate) selected: TreeIdentifierVec,
}

impl TreeState {
    /// Index of the first visible row the last render started at
    pub const fn get_offset(&self) -> usize {
        self.offset
    }

    pub fn get_all_opened(&self) -> Vec<TreeIdentifierVec> {
        self.opened.iter().cloned().collect()
    }

    pub fn is_open(&self, identifier: TreeIdentifier<'_>) -> bool {
        self.opened.contains(identifier)
    }

    pub fn selected(&self) -> TreeIdentifierVec {
        self.selected.clone()
    }

    pub fn select<I>(&mut self, identifier: I)
    where
        I: Into<TreeIdentifierVec>,
    {
        self.selected = identifier.into();
        trace!(selected = ?self.selected, "tree selection changed");

        if self.selected.is_empty() {
            self.offset = 0;
        }
    }

    /// Open a tree node.
    /// Returns `true` if the node was closed and has been opened.
    /// Returns `false` if the node was already open or the identifier is empty.
    pub fn open(&mut self, identifier: TreeIdentifierVec) -> bool {
        if identifier.is_empty() {
            false
        } else {
            trace!(node = ?identifier, "opening tree node");
            self.opened.insert(identifier)
        }
    }

    /// Close a tree node.
    /// Returns `true` if the node was open and has been closed.
    pub fn close(&mut self, identifier: TreeIdentifier<'_>) -> bool {
        let closed = self.opened.remove(identifier);
        if closed {
            trace!(node = ?identifier, "closed tree node");
        }
        closed
    }

    /// Close an open node, open a closed one.
    pub fn toggle(&mut self, identifier: TreeIdentifierVec) {
        if self.opened.contains(&identifier) {
            self.close(&identifier);
        } else {
            self.open(identifier);
        }
    }

    /// Toggles the currently selected tree node.
    /// See also [`toggle`](TreeState::toggle)
    pub fn toggle_selected(&mut self) {
        self.toggle(self.selected());
    }

    pub fn close_all(&mut self) {
        self.opened.clear();
    }

    /// Open every node in `items` that has children.
    pub fn open_all<A>(&mut self, items: &[TreeItem<A>]) {
        fn walk<A>(opened: &mut HashSet<TreeIdentifierVec>, items: &[TreeItem<A>], parent: &[usize]) {
            for (index, item) in items.iter().enumerate() {
                if item.children.is_empty() {
                    continue;
                }
                let mut identifier = parent.to_vec();
                identifier.push(index);
                walk(opened, &item.children, &identifier);
                opened.insert(identifier);
            }
        }

        walk(&mut self.opened, items, &[]);
    }

    /// Select the first node.
    pub fn select_first(&mut self) {
        self.select(vec![0]);
    }

    /// Select the last visible node.
    pub fn select_last<A>(&mut self, items: &[TreeItem<A>]) {
        let visible = flatten(&self.opened, items);
        let new_identifier = visible
            .last()
            .map(|row| row.identifier.clone())
            .unwrap_or_default();
        self.select(new_identifier);
    }

    /// Handles the up arrow key.
    /// Moves up in the current depth or to its parent.
    pub fn key_up<A>(&mut self, items: &[TreeItem<A>]) {
        self.move_selection(items, |index| index.saturating_sub(1));
    }

    /// Handles the down arrow key.
    /// Moves down in the current depth or into a child node.
    pub fn key_down<A>(&mut self, items: &[TreeItem<A>]) {
        self.move_selection(items, |index| index.saturating_add(1));
    }

    /// Handles the left arrow key.
    /// Closes the currently selected or moves to its parent.
    pub fn key_left(&mut self) {
        let selected = self.selected();
        if !self.close(&selected) {
            let (head, _) = get_without_leaf(&selected);
            self.select(head);
        }
    }

    /// Handles the right arrow key.
    /// Opens the currently selected.
    pub fn key_right(&mut self) {
        self.open(self.selected());
    }

    /// The item at the current selection, if the selection points at one.
    pub fn selected_item<'a, A>(&self, items: &'a [TreeItem<A>]) -> Option<&'a TreeItem<A>> {
        get_item(items, &self.selected)
    }

    pub fn selected_item_mut<'a, A>(
        &self,
        items: &'a mut [TreeItem<A>],
    ) -> Option<&'a mut TreeItem<A>> {
        get_item_mut(items, &self.selected)
    }

    /// Move to another visible row. An unknown selection lands on the first row.
    fn move_selection<A>(&mut self, items: &[TreeItem<A>], step: impl FnOnce(usize) -> usize) {
        let visible = flatten(&self.opened, items);
        let Some(last_index) = visible.len().checked_sub(1) else {
            return;
        };

        let new_index = visible
            .iter()
            .position(|row| row.identifier == self.selected)
            .map_or(0, |current| step(current).min(last_index));

        let new_identifier = visible[new_index].identifier.clone();
        self.select(new_identifier);
    }
}
