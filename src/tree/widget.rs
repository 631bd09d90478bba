//! Rendering of a tree into a ratatui buffer

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Block, ListDirection, StatefulWidget, Widget};
use unicode_width::UnicodeWidthStr;

use super::flatten::flatten;
use super::item::{TreeItem, TreeItemRender};
use super::state::TreeState;

const OPENED_SYMBOL: &str = "\u{25bc}";
const CLOSED_SYMBOL: &str = "\u{25b6}";
const LEAF_SYMBOL: &str = " ";

/// A `Tree` which can be rendered
///
/// # Example
///
/// ```
/// # use treeview::{Tree, TreeItem, TreeState};
/// # use ratatui::backend::TestBackend;
/// # use ratatui::Terminal;
/// # use ratatui::widgets::{Block, Borders};
/// # fn main() -> std::io::Result<()> {
/// #     let mut terminal = Terminal::new(TestBackend::new(32, 32))?;
/// let mut state = TreeState::default();
///
/// let item = TreeItem::new_leaf("leaf");
/// let items = vec![item];
///
/// terminal.draw(|f| {
///     let area = f.area();
///
///     let tree_widget = Tree::new(items.clone())
///         .block(Block::default().borders(Borders::ALL).title("Tree Widget"));
///
///     f.render_stateful_widget(tree_widget, area, &mut state);
/// })?;
/// #     Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Tree<'a, A> {
    block: Option<Block<'a>>,
    items: Items<'a, A>,
    /// Style used as a base style for the widget
    style: Style,
    direction: ListDirection,
    /// Style used to render selected item
    highlight_style: Style,
    /// Symbol in front of the selected item (Shift all items to the right)
    highlight_symbol: Option<&'a str>,
}

/// Items a [`Tree`] either owns or borrows from the caller
#[derive(Debug, Clone)]
enum Items<'a, A> {
    Owned(Vec<TreeItem<A>>),
    Borrowed(&'a [TreeItem<A>]),
}

impl<A> Items<'_, A> {
    fn as_slice(&self) -> &[TreeItem<A>] {
        match self {
            Items::Owned(items) => items,
            Items::Borrowed(items) => items,
        }
    }
}

impl<'a, A> Tree<'a, A> {
    pub fn new<T>(items: T) -> Self
    where
        T: Into<Vec<TreeItem<A>>>,
    {
        Self::with_items(Items::Owned(items.into()))
    }

    /// A tree drawing `items` in place, for callers that keep the items across frames.
    pub fn borrowed(items: &'a [TreeItem<A>]) -> Self {
        Self::with_items(Items::Borrowed(items))
    }

    fn with_items(items: Items<'a, A>) -> Self {
        Self {
            block: None,
            items,
            style: Style::default(),
            direction: ListDirection::TopToBottom,
            highlight_style: Style::default(),
            highlight_symbol: None,
        }
    }

    #[must_use]
    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }

    #[must_use]
    pub const fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub const fn highlight_symbol(mut self, highlight_symbol: &'a str) -> Self {
        self.highlight_symbol = Some(highlight_symbol);
        self
    }

    #[must_use]
    pub const fn highlight_style(mut self, style: Style) -> Self {
        self.highlight_style = style;
        self
    }

    /// Render rows from the top edge downwards (default) or from the bottom edge upwards.
    #[must_use]
    pub const fn direction(mut self, direction: ListDirection) -> Self {
        self.direction = direction;
        self
    }
}

/// Rows `start..end` of `heights` that fit into `available` and contain `selected`.
///
/// The window starts at `offset` (or earlier, when the selection is above it)
/// and is pushed down until the selected row is inside.
fn visible_window(heights: &[usize], offset: usize, selected: usize, available: usize) -> (usize, usize) {
    let mut start = offset.min(selected);
    let mut end = start;
    let mut height = 0;
    for row_height in heights.iter().skip(start) {
        if height + row_height > available {
            break;
        }
        height += row_height;
        end += 1;
    }

    while selected >= end {
        height = height.saturating_add(heights[end]);
        end += 1;
        while height > available {
            height = height.saturating_sub(heights[start]);
            start += 1;
        }
    }

    (start, end)
}

impl<A: TreeItemRender> StatefulWidget for Tree<'_, A> {
    type State = TreeState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        buf.set_style(area, self.style);

        // Get the inner area inside a possible block, otherwise use the full area
        let area = match self.block {
            Some(block) => {
                let inner_area = block.inner(area);
                block.render(area, buf);
                inner_area
            }
            None => area,
        };

        if area.width < 1 || area.height < 1 {
            return;
        }

        let visible = flatten(&state.opened, self.items.as_slice());
        if visible.is_empty() {
            return;
        }

        let heights: Vec<usize> = visible.iter().map(|row| row.item.height()).collect();
        let selected_index = if state.selected.is_empty() {
            0
        } else {
            visible
                .iter()
                .position(|row| row.identifier == state.selected)
                .unwrap_or(0)
        };

        let (start, end) = visible_window(&heights, state.offset, selected_index, area.height as usize);
        state.offset = start;

        let highlight_symbol = self.highlight_symbol.unwrap_or("");
        let blank_symbol = " ".repeat(highlight_symbol.width());
        let has_selection = !state.selected.is_empty();

        let mut current_height: u16 = 0;
        #[allow(clippy::cast_possible_truncation)]
        for row in visible.iter().skip(start).take(end - start) {
            let row_height = row.item.height() as u16;
            let (x, y) = match self.direction {
                ListDirection::BottomToTop => {
                    current_height += row_height;
                    (area.left(), area.bottom() - current_height)
                }
                ListDirection::TopToBottom => {
                    let pos = (area.left(), area.top() + current_height);
                    current_height += row_height;
                    pos
                }
            };
            let row_area = Rect {
                x,
                y,
                width: area.width,
                height: row_height,
            };

            let row_style = self.style.patch(row.item.style);
            buf.set_style(row_area, row_style);

            let is_selected = state.selected == row.identifier;
            let after_highlight_symbol_x = if has_selection {
                let symbol = if is_selected {
                    highlight_symbol
                } else {
                    blank_symbol.as_str()
                };
                let (x, _) = buf.set_stringn(x, y, symbol, area.width as usize, row_style);
                x
            } else {
                x
            };

            let after_depth_x = {
                let symbol = if row.item.children.is_empty() {
                    LEAF_SYMBOL
                } else if state.opened.contains(&row.identifier) {
                    OPENED_SYMBOL
                } else {
                    CLOSED_SYMBOL
                };
                let prefix = format!("{:>width$}{symbol} ", "", width = row.depth() * 2);
                let max_width = area.width.saturating_sub(after_highlight_symbol_x - x);
                let (x, _) = buf.set_stringn(
                    after_highlight_symbol_x,
                    y,
                    prefix,
                    max_width as usize,
                    row_style,
                );
                x
            };

            let max_element_width = area.width.saturating_sub(after_depth_x - x);
            for (j, line) in row.item.elem.as_text().lines.iter().enumerate() {
                buf.set_line(after_depth_x, y + j as u16, line, max_element_width);
            }
            if is_selected {
                buf.set_style(row_area, self.highlight_style);
            }
        }
    }
}

impl<A: TreeItemRender> Widget for Tree<'_, A> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut state = TreeState::default();
        StatefulWidget::render(self, area, buf, &mut state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_fits_everything() {
        assert_eq!(visible_window(&[1, 1, 1], 0, 0, 10), (0, 3));
    }

    #[test]
    fn test_window_scrolls_to_selection() {
        let heights = [1; 10];
        assert_eq!(visible_window(&heights, 0, 7, 3), (5, 8));
    }

    #[test]
    fn test_window_keeps_offset_when_selection_visible() {
        let heights = [1; 10];
        assert_eq!(visible_window(&heights, 4, 5, 3), (4, 7));
    }

    #[test]
    fn test_window_moves_up_to_selection() {
        let heights = [1; 10];
        assert_eq!(visible_window(&heights, 6, 2, 3), (2, 5));
    }

    #[test]
    fn test_window_multi_line_rows() {
        let heights = [2, 2, 2, 2];
        assert_eq!(visible_window(&heights, 0, 2, 4), (1, 3));
    }
}
