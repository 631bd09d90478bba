//! Interactive terminal viewer built on the tree widget

mod app;
mod event;
mod ui;

pub use app::App;
pub use event::{is_quit_event, AppEvent, EventHandler};
