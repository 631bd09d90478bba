//! Tests for the viewer app

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};

use std::cell::Cell;
use std::io;

use super::{with_restore, App};
use crate::config::ViewerConfig;
use crate::source::demo_items;

fn app() -> App {
    App::new("demo", demo_items(), ViewerConfig::default()).unwrap()
}

fn press(app: &mut App, code: KeyCode) {
    app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
}

fn screen(terminal: &Terminal<TestBackend>) -> Vec<String> {
    let buffer = terminal.backend().buffer();
    (0..buffer.area.height)
        .map(|y| {
            (0..buffer.area.width)
                .map(|x| buffer[(x, y)].symbol())
                .collect::<String>()
        })
        .collect()
}

#[test]
fn test_first_row_selected_on_start() {
    let app = app();
    assert_eq!(app.state().selected(), vec![0]);
    assert_eq!(app.selected_path(), vec!["a".to_string()]);
}

#[test]
fn test_empty_tree_has_no_selection() {
    let app = App::new("empty", Vec::new(), ViewerConfig::default()).unwrap();
    assert!(app.state().selected().is_empty());
    assert!(app.selected_path().is_empty());
}

#[test]
fn test_invalid_theme_is_rejected() {
    let mut config = ViewerConfig::default();
    config.theme.border = "nope".to_string();
    assert!(App::new("demo", demo_items(), config).is_err());
}

#[test]
fn test_navigation_keys() {
    let mut app = app();
    press(&mut app, KeyCode::Down);
    assert_eq!(app.state().selected(), vec![1]);

    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Char('j'));
    assert_eq!(app.state().selected(), vec![1, 0]);
    assert_eq!(app.selected_path(), vec!["b".to_string(), "c".to_string()]);

    press(&mut app, KeyCode::Char('h'));
    assert_eq!(app.state().selected(), vec![1]);

    press(&mut app, KeyCode::Enter);
    assert!(!app.state().is_open(&[1]));

    press(&mut app, KeyCode::End);
    assert_eq!(app.state().selected(), vec![4]);

    press(&mut app, KeyCode::Char('g'));
    assert_eq!(app.state().selected(), vec![0]);
}

#[test]
fn test_open_and_close_all() {
    let mut app = app();
    press(&mut app, KeyCode::Char('o'));
    assert!(app.state().is_open(&[3, 1, 0]));

    press(&mut app, KeyCode::End);
    assert_eq!(app.state().selected(), vec![4]);
    press(&mut app, KeyCode::Up);
    assert_eq!(app.state().selected(), vec![3, 2]);

    press(&mut app, KeyCode::Char('c'));
    assert!(app.state().get_all_opened().is_empty());
}

#[test]
fn test_quit_keys() {
    let mut app = app();
    press(&mut app, KeyCode::Char('x'));
    assert!(!app.should_quit());
    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit());
}

#[test]
fn test_help_popup_swallows_keys() {
    let mut app = app();
    press(&mut app, KeyCode::Char('?'));
    assert!(app.show_help());

    press(&mut app, KeyCode::Down);
    assert_eq!(app.state().selected(), vec![0], "keys do not reach the tree");

    press(&mut app, KeyCode::Esc);
    assert!(!app.show_help());
    assert!(!app.should_quit(), "closing help does not quit");
}

#[test]
fn test_ctrl_c_quits_from_help_popup() {
    let mut app = app();
    press(&mut app, KeyCode::Char('?'));
    app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert!(app.should_quit());
}

#[test]
fn test_restore_runs_when_body_fails() {
    let restored = Cell::new(false);
    let result: anyhow::Result<()> = with_restore(
        || anyhow::bail!("setup failed"),
        || {
            restored.set(true);
            Ok(())
        },
    );

    assert!(restored.get(), "terminal should be restored after a failure");
    assert_eq!(result.unwrap_err().to_string(), "setup failed");
}

#[test]
fn test_body_error_wins_over_restore_error() {
    let result: anyhow::Result<()> = with_restore(
        || anyhow::bail!("loop failed"),
        || Err(io::Error::other("restore failed")),
    );
    assert_eq!(result.unwrap_err().to_string(), "loop failed");
}

#[test]
fn test_restore_error_reported_after_success() {
    let result = with_restore(|| Ok(7), || Err(io::Error::other("restore failed")));
    assert_eq!(result.unwrap_err().to_string(), "restore failed");

    let result = with_restore(|| Ok(7), || Ok(()));
    assert_eq!(result.unwrap(), 7);
}

#[test]
fn test_draw_shows_tree_and_path() {
    let mut app = app();
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Right);

    let mut terminal = Terminal::new(TestBackend::new(30, 12)).unwrap();
    app.draw(&mut terminal).unwrap();
    let lines = screen(&terminal);

    assert!(lines[0].contains(" demo "), "title in border: {:?}", lines[0]);
    assert_eq!(&lines[1], "│     a                      │");
    assert_eq!(&lines[2], "│>> ▼ b                      │");
    assert_eq!(&lines[3], "│       c                    │");
    assert_eq!(&lines[4], "│     ▶ d                    │");
    assert!(lines[10].starts_with(" b"), "path line: {:?}", lines[10]);
}
