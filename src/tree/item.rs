//! Tree items and how their elements turn into text

use ratatui::style::Style;
use ratatui::text::{Line, Span, Text};

use super::identifier::TreeIdentifier;

/// Anything that can be drawn as the label of a [`TreeItem`]
pub trait TreeItemRender {
    fn as_text(&self) -> Text<'_>;
}

impl TreeItemRender for &str {
    fn as_text(&self) -> Text<'_> {
        Text::from(*self)
    }
}

impl TreeItemRender for String {
    fn as_text(&self) -> Text<'_> {
        Text::from(self.as_str())
    }
}

impl TreeItemRender for Span<'_> {
    fn as_text(&self) -> Text<'_> {
        Text::from(self.clone())
    }
}

impl TreeItemRender for Line<'_> {
    fn as_text(&self) -> Text<'_> {
        Text::from(self.clone())
    }
}

impl TreeItemRender for Text<'_> {
    fn as_text(&self) -> Text<'_> {
        self.clone()
    }
}

/// One item inside a [`Tree`](super::Tree)
///
/// Has zero or more `children`.
///
/// # Example
///
/// ```
/// # use treeview::TreeItem;
/// let a = TreeItem::new_leaf("leaf");
/// let b = TreeItem::new("root", vec![a]);
/// assert_eq!(b.children().len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct TreeItem<A> {
    pub(crate) elem: A,
    pub(crate) style: Style,
    pub(crate) children: Vec<TreeItem<A>>,
}

impl<A> TreeItem<A> {
    pub fn new_leaf(elem: A) -> Self {
        Self {
            elem,
            style: Style::default(),
            children: Vec::new(),
        }
    }

    pub fn new<Children>(elem: A, children: Children) -> Self
    where
        Children: Into<Vec<TreeItem<A>>>,
    {
        Self {
            elem,
            style: Style::default(),
            children: children.into(),
        }
    }

    pub fn elem(&self) -> &A {
        &self.elem
    }

    pub fn children(&self) -> &[TreeItem<A>] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut [TreeItem<A>] {
        &mut self.children
    }

    pub fn child(&self, index: usize) -> Option<&Self> {
        self.children.get(index)
    }

    pub fn child_mut(&mut self, index: usize) -> Option<&mut Self> {
        self.children.get_mut(index)
    }

    #[must_use]
    pub const fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn add_child(&mut self, child: TreeItem<A>) {
        self.children.push(child);
    }
}

impl<A: TreeItemRender> TreeItem<A> {
    /// Number of terminal rows the element takes
    pub fn height(&self) -> usize {
        self.elem.as_text().height()
    }
}

/// Look up the item addressed by `identifier`.
///
/// Returns `None` for an empty identifier or when any index is out of range.
pub fn get_item<'a, A>(
    items: &'a [TreeItem<A>],
    identifier: TreeIdentifier<'_>,
) -> Option<&'a TreeItem<A>> {
    let (first, rest) = identifier.split_first()?;
    let item = items.get(*first)?;
    if rest.is_empty() {
        Some(item)
    } else {
        get_item(&item.children, rest)
    }
}

/// Mutable variant of [`get_item`]
pub fn get_item_mut<'a, A>(
    items: &'a mut [TreeItem<A>],
    identifier: TreeIdentifier<'_>,
) -> Option<&'a mut TreeItem<A>> {
    let (first, rest) = identifier.split_first()?;
    let item = items.get_mut(*first)?;
    if rest.is_empty() {
        Some(item)
    } else {
        get_item_mut(&mut item.children, rest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::{Color, Modifier};

    fn sample() -> Vec<TreeItem<&'static str>> {
        vec![
            TreeItem::new_leaf("a"),
            TreeItem::new(
                "b",
                vec![
                    TreeItem::new_leaf("c"),
                    TreeItem::new("d", vec![TreeItem::new_leaf("e")]),
                ],
            ),
        ]
    }

    #[test]
    fn test_get_item_by_path() {
        let items = sample();
        assert_eq!(get_item(&items, &[0]).map(|i| *i.elem()), Some("a"));
        assert_eq!(get_item(&items, &[1, 1, 0]).map(|i| *i.elem()), Some("e"));
    }

    #[test]
    fn test_get_item_invalid_paths() {
        let items = sample();
        assert!(get_item(&items, &[]).is_none());
        assert!(get_item(&items, &[2]).is_none());
        assert!(get_item(&items, &[0, 0]).is_none());
        assert!(get_item(&items, &[1, 1, 0, 0]).is_none());
    }

    #[test]
    fn test_get_item_mut_adds_child() {
        let mut items = sample();
        if let Some(item) = get_item_mut(&mut items, &[0]) {
            item.add_child(TreeItem::new_leaf("new"));
        }
        assert_eq!(items[0].children().len(), 1);
        assert_eq!(items[0].child(0).map(|i| *i.elem()), Some("new"));
    }

    #[test]
    fn test_child_access() {
        let mut items = sample();
        assert!(items[1].child(5).is_none());
        if let Some(child) = items[1].child_mut(0) {
            *child = TreeItem::new_leaf("replaced");
        }
        assert_eq!(items[1].children()[0].elem(), &"replaced");
    }

    #[test]
    fn test_height_follows_text_lines() {
        assert_eq!(TreeItem::new_leaf("one line").height(), 1);
        assert_eq!(TreeItem::new_leaf("two\nlines").height(), 2);
        let text = Text::from(vec![Line::from("x"), Line::from("y"), Line::from("z")]);
        assert_eq!(TreeItem::new_leaf(text).height(), 3);
    }

    #[test]
    fn test_style_builder() {
        let style = Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD);
        let item = TreeItem::new_leaf(String::from("dir/")).style(style);
        assert_eq!(item.style, style);
    }
}
