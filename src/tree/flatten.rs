//! Visible rows of a tree in display order

use std::collections::HashSet;

use super::identifier::{TreeIdentifier, TreeIdentifierVec};
use super::item::TreeItem;

/// A visible row of the tree
#[derive(Debug)]
pub struct Flattened<'a, A> {
    pub identifier: TreeIdentifierVec,
    pub item: &'a TreeItem<A>,
}

impl<A> Flattened<'_, A> {
    /// Nesting level, `0` for items of the root list
    pub fn depth(&self) -> usize {
        self.identifier.len().saturating_sub(1)
    }
}

/// Get a flat list of all visible [`TreeItem`]s in display order.
///
/// Children are only included when their parent identifier is in `opened`.
pub fn flatten<'a, A>(
    opened: &HashSet<TreeIdentifierVec>,
    items: &'a [TreeItem<A>],
) -> Vec<Flattened<'a, A>> {
    let mut result = Vec::new();
    flatten_into(opened, items, &[], &mut result);
    result
}

fn flatten_into<'a, A>(
    opened: &HashSet<TreeIdentifierVec>,
    items: &'a [TreeItem<A>],
    parent: TreeIdentifier<'_>,
    result: &mut Vec<Flattened<'a, A>>,
) {
    for (index, item) in items.iter().enumerate() {
        let mut identifier = parent.to_vec();
        identifier.push(index);
        let is_open = opened.contains(&identifier);

        result.push(Flattened {
            identifier: identifier.clone(),
            item,
        });

        if is_open {
            flatten_into(opened, &item.children, &identifier, result);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<TreeItem<&'static str>> {
        vec![
            TreeItem::new_leaf("a"),
            TreeItem::new(
                "b",
                vec![
                    TreeItem::new_leaf("c"),
                    TreeItem::new("d", vec![TreeItem::new_leaf("e"), TreeItem::new_leaf("f")]),
                    TreeItem::new_leaf("g"),
                ],
            ),
            TreeItem::new_leaf("h"),
        ]
    }

    fn labels(opened: &[Vec<usize>]) -> Vec<&'static str> {
        let items = sample();
        let opened: HashSet<TreeIdentifierVec> = opened.iter().cloned().collect();
        flatten(&opened, &items).iter().map(|f| *f.item.elem()).collect()
    }

    #[test]
    fn test_flatten_nothing_open() {
        assert_eq!(labels(&[]), ["a", "b", "h"]);
    }

    #[test]
    fn test_flatten_one_level_open() {
        assert_eq!(labels(&[vec![1]]), ["a", "b", "c", "d", "g", "h"]);
    }

    #[test]
    fn test_flatten_nested_open() {
        assert_eq!(
            labels(&[vec![1], vec![1, 1]]),
            ["a", "b", "c", "d", "e", "f", "g", "h"]
        );
    }

    #[test]
    fn test_flatten_ignores_open_child_of_closed_parent() {
        assert_eq!(labels(&[vec![1, 1]]), ["a", "b", "h"]);
    }

    #[test]
    fn test_flatten_depth_and_identifiers() {
        let items = sample();
        let opened: HashSet<TreeIdentifierVec> = [vec![1], vec![1, 1]].into_iter().collect();
        let visible = flatten(&opened, &items);

        let e = visible.iter().find(|f| *f.item.elem() == "e").map(|f| (f.identifier.clone(), f.depth()));
        assert_eq!(e, Some((vec![1, 1, 0], 2)));
        assert_eq!(visible[0].depth(), 0);
    }

    #[test]
    fn test_flatten_empty() {
        let items: Vec<TreeItem<&str>> = Vec::new();
        assert!(flatten(&HashSet::new(), &items).is_empty());
    }
}
