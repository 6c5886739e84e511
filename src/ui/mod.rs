//! UI rendering for the Charmbooks TUI.
//!
//! - Login screen: email/passcode panel
//! - Library screen: book tab strip, book editor panel, charm grid
//! - Overlays: modal dialogs and the blocking notice, rendered last

mod dialogs;
mod helpers;
mod library;
mod login;
pub mod theme;
pub mod view_model;

pub use library::grid_columns;

use ratatui::Frame;

use crate::app::{App, Screen};

/// Render the UI for the current screen; overlays go last.
pub fn render(frame: &mut Frame, app: &App) {
    match app.screen {
        Screen::Login => login::render(frame, app),
        Screen::Library => library::render(frame, app),
    }
    dialogs::render(frame, app);
}
