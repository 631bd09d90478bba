//! Color constants for the parts of the UI that are not themed

use ratatui::style::Color;

pub const CYAN: Color = Color::Cyan;
pub const GREEN: Color = Color::LightGreen;
pub const YELLOW: Color = Color::Yellow;
pub const MAGENTA: Color = Color::Magenta;
pub const WHITE: Color = Color::White;
pub const GRAY: Color = Color::Gray;

// Reset keeps the terminal's own background
pub const BG: Color = Color::Reset;
