//! UI rendering functions
//!
//! - `colors`: Color constants for the fixed parts of the UI
//! - `help_bar`: Selected path and key hints at the bottom
//! - `popups`: Key reference popup

mod colors;
mod help_bar;
mod popups;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Style,
    text::Span,
    widgets::{Block, Borders},
    Frame,
};

use crate::config::{Theme, ViewerConfig};
use crate::{Tree, TreeItem, TreeState};

/// Render the main UI
#[allow(clippy::too_many_arguments)]
pub fn render(
    frame: &mut Frame,
    title: &str,
    items: &[TreeItem<String>],
    state: &mut TreeState,
    config: &ViewerConfig,
    theme: &Theme,
    selected_path: &[String],
    show_help: bool,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1), Constraint::Length(1)])
        .split(frame.area());

    let tree = Tree::borrowed(items)
        .block(
            Block::default()
                .title(Span::styled(format!(" {title} "), theme.border))
                .borders(Borders::ALL)
                .border_style(theme.border),
        )
        .style(Style::default().bg(colors::BG))
        .highlight_style(theme.highlight)
        .highlight_symbol(&config.highlight_symbol)
        .direction(config.direction.into());
    frame.render_stateful_widget(tree, chunks[0], state);

    help_bar::render_path(frame, chunks[1], selected_path, theme);
    help_bar::render(frame, chunks[2]);

    if show_help {
        popups::render_help(frame);
    }
}
