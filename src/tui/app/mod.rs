//! Main viewer application

use anyhow::Result;
use crossterm::{
    cursor,
    event::{KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io;
use std::time::Duration;
use tracing::{debug, info};

use super::event::{is_quit_event, AppEvent, EventHandler};
use super::ui;
use crate::config::{Theme, ViewerConfig};
use crate::{get_item, TreeItem, TreeState};

#[cfg(test)]
mod tests;

/// Run `body`, then `restore` whatever happened. A `body` error wins over a `restore` error.
fn with_restore<T>(body: impl FnOnce() -> Result<T>, restore: impl FnOnce() -> io::Result<()>) -> Result<T> {
    let result = body();
    let restored = restore();
    let value = result?;
    restored?;
    Ok(value)
}

/// Leave raw mode and the alternate screen. Every step is attempted; the first error is returned.
fn restore_terminal() -> io::Result<()> {
    let raw_mode = disable_raw_mode();
    let screen = execute!(io::stdout(), LeaveAlternateScreen, cursor::Show);
    raw_mode.and(screen)
}

/// Viewer state: the tree being browsed and what is selected in it
pub struct App {
    /// Title of the tree panel
    title: String,

    items: Vec<TreeItem<String>>,

    state: TreeState,

    config: ViewerConfig,

    /// Styles resolved from the config
    theme: Theme,

    /// Whether the key reference popup is shown
    show_help: bool,

    should_quit: bool,
}

impl App {
    /// Create a viewer for `items`. The first row starts selected.
    pub fn new(title: impl Into<String>, items: Vec<TreeItem<String>>, config: ViewerConfig) -> Result<Self> {
        let theme = config.theme.resolve()?;
        let mut state = TreeState::default();
        if !items.is_empty() {
            state.select_first();
        }

        Ok(Self {
            title: title.into(),
            items,
            state,
            config,
            theme,
            show_help: false,
            should_quit: false,
        })
    }

    pub fn state(&self) -> &TreeState {
        &self.state
    }

    pub fn items(&self) -> &[TreeItem<String>] {
        &self.items
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn show_help(&self) -> bool {
        self.show_help
    }

    /// Run the viewer until the user quits
    pub fn run(&mut self) -> Result<()> {
        enable_raw_mode()?;

        with_restore(
            || {
                execute!(io::stdout(), EnterAlternateScreen)?;
                let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

                info!("Viewer started with {} root items", self.items.len());
                self.event_loop(&mut terminal)
            },
            restore_terminal,
        )
    }

    fn event_loop<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        let event_handler = EventHandler::new(Duration::from_millis(self.config.tick_rate_ms));

        while !self.should_quit {
            self.draw(terminal)?;

            match event_handler.next()? {
                AppEvent::Key(key) => self.handle_key(key),
                AppEvent::Resize(w, h) => debug!("Terminal resized to {}x{}", w, h),
                AppEvent::Tick => {}
            }
        }

        Ok(())
    }

    /// Draw the UI
    pub fn draw<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        let selected_path = self.selected_path();
        let Self {
            title,
            items,
            state,
            config,
            theme,
            show_help,
            ..
        } = self;

        terminal.draw(|frame| {
            ui::render(
                frame,
                title,
                items,
                state,
                config,
                theme,
                &selected_path,
                *show_help,
            );
        })?;

        Ok(())
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers == KeyModifiers::CONTROL {
            self.should_quit = true;
            return;
        }

        // The help popup swallows keys until it is closed
        if self.show_help {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
                self.show_help = false;
            }
            return;
        }

        if is_quit_event(&key) {
            self.should_quit = true;
            return;
        }

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.state.key_up(&self.items),
            KeyCode::Down | KeyCode::Char('j') => self.state.key_down(&self.items),
            KeyCode::Left | KeyCode::Char('h') => self.state.key_left(),
            KeyCode::Right | KeyCode::Char('l') => self.state.key_right(),
            KeyCode::Enter | KeyCode::Char(' ') => self.state.toggle_selected(),
            KeyCode::Home | KeyCode::Char('g') => self.state.select_first(),
            KeyCode::End | KeyCode::Char('G') => self.state.select_last(&self.items),
            KeyCode::Char('c') => self.state.close_all(),
            KeyCode::Char('o') => self.state.open_all(&self.items),
            KeyCode::Char('?') => self.show_help = true,
            _ => {}
        }
    }

    /// Labels of every node from the root down to the selection
    pub fn selected_path(&self) -> Vec<String> {
        let selected = self.state.selected();
        (1..=selected.len())
            .filter_map(|depth| get_item(&self.items, &selected[..depth]))
            .map(|item| item.elem().lines().next().unwrap_or_default().to_string())
            .collect()
    }
}
