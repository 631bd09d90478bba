//! Selected path line and key hint bar

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::colors::*;
use crate::config::Theme;

/// Render the labels along the selected path, e.g. `src/ › tree/ › mod.rs`
pub fn render_path(frame: &mut Frame, area: Rect, selected_path: &[String], theme: &Theme) {
    let text = if selected_path.is_empty() {
        " (nothing selected)".to_string()
    } else {
        format!(" {}", selected_path.join(" › "))
    };
    frame.render_widget(Paragraph::new(text).style(theme.status_bar.bg(BG)), area);
}

/// Render the key hints at the bottom
pub fn render(frame: &mut Frame, area: Rect) {
    let key = |label: &'static str, color: Color| Span::styled(label, Style::default().fg(Color::Black).bg(color));
    let hint = |label: &'static str| Span::styled(label, Style::default().fg(GRAY));

    let help = Line::from(vec![
        key(" ↑↓ ", WHITE),
        hint(" Nav "),
        key(" ←→ ", WHITE),
        hint(" Close/Open "),
        key(" ⏎ ", GREEN),
        hint(" Toggle "),
        key(" ? ", MAGENTA),
        hint(" Help "),
        key(" q ", GRAY),
        hint(" Quit "),
    ]);
    frame.render_widget(Paragraph::new(help).style(Style::default().bg(BG)), area);
}
