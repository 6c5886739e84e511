//! Application state and logic for the TUI.
//!
//! The [`App`] owns the API client, the three stores, and the UI-local
//! state (screen, focus, dialogs, forms). All mutation flows through
//! [`App::dispatch`] with a [`UiIntent`]; nothing below this layer talks
//! back upward except via return values and errors.

mod handlers;
mod intents;
mod types;

pub use intents::UiIntent;
pub use types::{
    BookField, BookForm, CharmField, CharmForm, Dialog, Focus, LoginField, LoginForm, Screen,
};

use crate::api::ApiClient;
use crate::models::Charm;
use crate::state::{BookStore, CharmStore, SessionStore};
use crate::widgets::InputField;

pub struct App {
    pub api: ApiClient,
    pub session: SessionStore,
    pub books: BookStore,
    pub charms: CharmStore,

    pub screen: Screen,
    pub focus: Focus,
    /// At most one modal dialog is open at a time.
    pub dialog: Option<Dialog>,
    pub login_form: LoginForm,
    pub book_form: BookForm,
    /// Cursor into the charm grid.
    pub selected_charm: usize,
    /// Blocking notice (auth failures); dismissed with any key.
    pub notice: Option<String>,
    /// Transient status line message, replaced on the next action.
    pub status: Option<String>,
    pub needs_redraw: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            session: SessionStore::new(),
            books: BookStore::new(),
            charms: CharmStore::new(),
            screen: Screen::Login,
            focus: Focus::Grid,
            dialog: None,
            login_form: LoginForm::default(),
            book_form: BookForm::default(),
            selected_charm: 0,
            notice: None,
            status: None,
            needs_redraw: true,
            should_quit: false,
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// The charm under the grid cursor, if any.
    pub fn charm_under_cursor(&self) -> Option<&Charm> {
        self.charms.charms.get(self.selected_charm)
    }

    /// Move the grid cursor by `delta` positions, clamped to the list.
    pub fn move_charm_cursor(&mut self, delta: isize) {
        let len = self.charms.charms.len();
        if len == 0 {
            self.selected_charm = 0;
            return;
        }
        let next = self.selected_charm as isize + delta;
        self.selected_charm = next.clamp(0, len as isize - 1) as usize;
    }

    /// Id of the book tab `delta` steps away from the selection (wrapping),
    /// for tab navigation. `None` when the list is empty.
    pub fn neighbor_book_id(&self, delta: isize) -> Option<String> {
        let books = &self.books.books;
        if books.is_empty() {
            return None;
        }
        let len = books.len() as isize;
        let current = self
            .books
            .selected_id()
            .and_then(|id| books.iter().position(|b| b.id == id))
            .unwrap_or(0) as isize;
        let next = (current + delta).rem_euclid(len) as usize;
        Some(books[next].id.clone())
    }

    pub fn open_new_book_prompt(&mut self) {
        self.dialog = Some(Dialog::NewBook(InputField::new()));
    }

    /// Open the charm editor, blank or pre-filled from the grid cursor.
    pub fn open_charm_editor(&mut self, existing: Option<&Charm>) {
        let form = match existing {
            Some(charm) => CharmForm::for_charm(charm),
            None => CharmForm::blank(),
        };
        self.dialog = Some(Dialog::CharmEditor(form));
    }

    pub fn confirm_delete_selected_charm(&mut self) {
        if let Some(charm) = self.charm_under_cursor() {
            self.dialog = Some(Dialog::ConfirmDeleteCharm {
                id: charm.id.clone(),
                title: charm.title.clone(),
            });
        }
    }

    pub fn confirm_delete_current_book(&mut self) {
        if let Some(book) = &self.books.current {
            self.dialog = Some(Dialog::ConfirmDeleteBook {
                id: book.id.clone(),
                title: book.title.clone(),
            });
        }
    }

    pub fn close_dialog(&mut self) {
        self.dialog = None;
    }
}
