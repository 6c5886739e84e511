//! The finite set of UI intents.
//!
//! Key handling maps terminal events to these named intents; the App
//! dispatches them to store operations. This keeps the view layer a thin
//! adapter that tests can drive without a terminal.

use crate::models::CharmDraft;

#[derive(Debug, Clone)]
pub enum UiIntent {
    /// Full resynchronization from the server session outward.
    Boot,
    Login {
        email: String,
        passcode: String,
    },
    Register {
        email: String,
        passcode: String,
    },
    Logout,
    SelectBook(String),
    CreateBook {
        title: String,
    },
    /// Save the book editor panel to the current selection.
    SaveBook,
    DeleteBook(String),
    /// Create (no id) or update (with id) a charm from the editor dialog.
    SubmitCharm {
        existing_id: Option<String>,
        draft: CharmDraft,
    },
    DeleteCharm(String),
    /// Copy a charm's hidden text value to the clipboard.
    CopyCharm(String),
}
