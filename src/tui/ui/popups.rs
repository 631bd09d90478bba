//! Popup rendering

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::colors::*;

/// Create a centered rectangle
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

const SHORTCUTS: &[(&str, &str)] = &[
    ("↑/↓ k/j", "Previous / next row"),
    ("←/h", "Close node, or go to parent"),
    ("→/l", "Open node"),
    ("Enter/Space", "Toggle node"),
    ("Home/g", "First row"),
    ("End/G", "Last row"),
    ("o", "Open everything"),
    ("c", "Close everything"),
    ("?", "Toggle this help"),
    ("q/Esc", "Quit"),
];

/// Render the key reference popup
pub fn render_help(frame: &mut Frame) {
    let area = centered_rect(60, 60, frame.area());

    let mut help_text = vec![
        Line::from(Span::styled(
            "Keyboard Shortcuts",
            Style::default().fg(CYAN).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    help_text.extend(SHORTCUTS.iter().map(|(keys, action)| {
        Line::from(vec![
            Span::styled(format!("  {keys:<13}"), Style::default().fg(YELLOW)),
            Span::styled(*action, Style::default().fg(WHITE)),
        ])
    }));

    let popup = Paragraph::new(help_text).block(
        Block::default()
            .title(" Help ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(CYAN))
            .style(Style::default().bg(BG)),
    );

    frame.render_widget(Clear, area);
    frame.render_widget(popup, area);
}
