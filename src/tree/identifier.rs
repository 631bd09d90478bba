//! Paths of child indices addressing nodes in a tree

/// Reference to a node: the child index at every level, starting at the root list.
///
/// An empty identifier addresses no node.
pub type TreeIdentifier<'a> = &'a [usize];

/// Owned form of [`TreeIdentifier`]
pub type TreeIdentifierVec = Vec<usize>;

/// Split an identifier into its parent path and its own index.
///
/// ```
/// # use treeview::get_identifier_without_leaf;
/// let (head, leaf) = get_identifier_without_leaf(&[2, 4, 6]);
/// assert_eq!(head, [2, 4]);
/// assert_eq!(leaf, Some(6));
/// ```
pub fn get_without_leaf(identifier: TreeIdentifier<'_>) -> (TreeIdentifier<'_>, Option<usize>) {
    match identifier {
        [head @ .., leaf] => (head, Some(*leaf)),
        [] => (&[], None),
    }
}
