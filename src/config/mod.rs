//! Viewer configuration loading and management

mod io;

use std::path::PathBuf;
use std::str::FromStr;

use glob::Pattern;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::ListDirection;
use serde::{Deserialize, Serialize};

/// Error type for configuration loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid color '{value}' for {field}")]
    InvalidColor { field: &'static str, value: String },

    #[error("Invalid exclude pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ViewerConfig {
    /// Symbol drawn in front of the selected row
    pub highlight_symbol: String,

    /// Event poll interval in milliseconds
    pub tick_rate_ms: u64,

    /// Whether rows stack from the top or from the bottom of the panel
    pub direction: RowDirection,

    pub theme: ThemeConfig,

    pub source: SourceConfig,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            highlight_symbol: ">> ".to_string(),
            tick_rate_ms: 250,
            direction: RowDirection::TopToBottom,
            theme: ThemeConfig::default(),
            source: SourceConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum RowDirection {
    #[default]
    TopToBottom,
    BottomToTop,
}

impl From<RowDirection> for ListDirection {
    fn from(direction: RowDirection) -> Self {
        match direction {
            RowDirection::TopToBottom => ListDirection::TopToBottom,
            RowDirection::BottomToTop => ListDirection::BottomToTop,
        }
    }
}

/// Colors, as ratatui color names ("lightgreen") or hex ("#ff8800")
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ThemeConfig {
    pub highlight_fg: String,
    pub highlight_bg: String,
    pub border: String,
    pub directory: String,
    pub status_bar: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            highlight_fg: "black".to_string(),
            highlight_bg: "lightgreen".to_string(),
            border: "cyan".to_string(),
            directory: "lightblue".to_string(),
            status_bar: "darkgray".to_string(),
        }
    }
}

/// Resolved styles for the viewer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub highlight: Style,
    pub border: Style,
    pub directory: Style,
    pub status_bar: Style,
}

impl ThemeConfig {
    /// Parse every configured color into the styles the viewer draws with.
    pub fn resolve(&self) -> Result<Theme, ConfigError> {
        Ok(Theme {
            highlight: Style::default()
                .fg(parse_color("highlight_fg", &self.highlight_fg)?)
                .bg(parse_color("highlight_bg", &self.highlight_bg)?)
                .add_modifier(Modifier::BOLD),
            border: Style::default().fg(parse_color("border", &self.border)?),
            directory: Style::default()
                .fg(parse_color("directory", &self.directory)?)
                .add_modifier(Modifier::BOLD),
            status_bar: Style::default().fg(parse_color("status_bar", &self.status_bar)?),
        })
    }
}

fn parse_color(field: &'static str, value: &str) -> Result<Color, ConfigError> {
    Color::from_str(value).map_err(|_| ConfigError::InvalidColor {
        field,
        value: value.to_string(),
    })
}

/// What the directory reader includes
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SourceConfig {
    /// Deepest directory level read below the root (root children are level 1)
    pub max_depth: usize,

    /// Include entries whose name starts with a dot
    pub show_hidden: bool,

    /// Glob patterns matched against entry names
    pub exclude: Vec<String>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            max_depth: 8,
            show_hidden: false,
            exclude: vec!["target".to_string(), "node_modules".to_string()],
        }
    }
}

impl SourceConfig {
    /// Compile the exclude globs.
    pub fn exclude_patterns(&self) -> Result<Vec<Pattern>, ConfigError> {
        self.exclude
            .iter()
            .map(|pattern| {
                Pattern::new(pattern).map_err(|source| ConfigError::InvalidPattern {
                    pattern: pattern.clone(),
                    source,
                })
            })
            .collect()
    }
}
