//! Screen, focus, form and dialog types for the App.

use crate::models::{Book, BookDraft, Charm, CharmDraft, ColorTag, Shape};
use crate::widgets::InputField;

/// Which screen is currently displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    Library,
}

/// Which library panel owns plain key input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The charm grid.
    Grid,
    /// The book editor panel.
    BookForm,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginField {
    Email,
    Passcode,
}

/// The login panel's two fields.
#[derive(Debug, Default)]
pub struct LoginForm {
    pub email: InputField,
    pub passcode: InputField,
    pub field: LoginField,
}

impl Default for LoginField {
    fn default() -> Self {
        LoginField::Email
    }
}

impl LoginForm {
    pub fn toggle_field(&mut self) {
        self.field = match self.field {
            LoginField::Email => LoginField::Passcode,
            LoginField::Passcode => LoginField::Email,
        };
    }

    pub fn active_field(&mut self) -> &mut InputField {
        match self.field {
            LoginField::Email => &mut self.email,
            LoginField::Passcode => &mut self.passcode,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookField {
    Title,
    Note,
    Public,
}

/// The book editor panel: the selected book's writable fields.
#[derive(Debug)]
pub struct BookForm {
    pub title: InputField,
    pub note: InputField,
    pub is_public: bool,
    pub field: BookField,
}

impl Default for BookForm {
    fn default() -> Self {
        Self {
            title: InputField::new(),
            note: InputField::new(),
            is_public: false,
            field: BookField::Title,
        }
    }
}

impl BookForm {
    /// Mirror a freshly selected book into the form.
    pub fn load_from(&mut self, book: &Book) {
        self.title.set_content(book.title.clone());
        self.note.set_content(book.note.clone());
        self.is_public = book.is_public;
    }

    pub fn reset(&mut self) {
        self.title.clear();
        self.note.clear();
        self.is_public = false;
        self.field = BookField::Title;
    }

    pub fn draft(&self) -> BookDraft {
        BookDraft {
            title: self.title.content().to_string(),
            note: self.note.content().to_string(),
            is_public: self.is_public,
        }
    }

    pub fn next_field(&mut self) {
        self.field = match self.field {
            BookField::Title => BookField::Note,
            BookField::Note => BookField::Public,
            BookField::Public => BookField::Title,
        };
    }

    pub fn prev_field(&mut self) {
        self.field = match self.field {
            BookField::Title => BookField::Public,
            BookField::Note => BookField::Title,
            BookField::Public => BookField::Note,
        };
    }

    pub fn active_field(&mut self) -> Option<&mut InputField> {
        match self.field {
            BookField::Title => Some(&mut self.title),
            BookField::Note => Some(&mut self.note),
            BookField::Public => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharmField {
    Title,
    Value,
    Shape,
    Color,
}

/// The charm editor dialog: create when `existing_id` is `None`,
/// otherwise update.
#[derive(Debug)]
pub struct CharmForm {
    pub existing_id: Option<String>,
    pub title: InputField,
    pub value: InputField,
    pub shape: Shape,
    pub color: ColorTag,
    pub field: CharmField,
}

impl CharmForm {
    /// Blank form with the editor defaults.
    pub fn blank() -> Self {
        Self {
            existing_id: None,
            title: InputField::new(),
            value: InputField::new(),
            shape: Shape::Square,
            color: ColorTag::Blue,
            field: CharmField::Title,
        }
    }

    /// Form pre-filled from an existing charm. Unknown shapes/colors are
    /// kept as-is so an untouched field round-trips verbatim.
    pub fn for_charm(charm: &Charm) -> Self {
        Self {
            existing_id: Some(charm.id.clone()),
            title: InputField::with_content(charm.title.clone()),
            value: InputField::with_content(charm.text_value.clone()),
            shape: charm.shape.clone(),
            color: charm.color.clone(),
            field: CharmField::Title,
        }
    }

    pub fn draft(&self) -> CharmDraft {
        CharmDraft {
            title: self.title.content().to_string(),
            text_value: self.value.content().to_string(),
            shape: self.shape.clone(),
            color: self.color.clone(),
        }
    }

    pub fn next_field(&mut self) {
        self.field = match self.field {
            CharmField::Title => CharmField::Value,
            CharmField::Value => CharmField::Shape,
            CharmField::Shape => CharmField::Color,
            CharmField::Color => CharmField::Title,
        };
    }

    pub fn prev_field(&mut self) {
        self.field = match self.field {
            CharmField::Title => CharmField::Color,
            CharmField::Value => CharmField::Title,
            CharmField::Shape => CharmField::Value,
            CharmField::Color => CharmField::Shape,
        };
    }

    pub fn active_field(&mut self) -> Option<&mut InputField> {
        match self.field {
            CharmField::Title => Some(&mut self.title),
            CharmField::Value => Some(&mut self.value),
            _ => None,
        }
    }

    /// Step the shape selection through the known set. An unknown shape
    /// enters the cycle at its start.
    pub fn cycle_shape(&mut self, forward: bool) {
        self.shape = cycle(&Shape::ALL, &self.shape, forward);
    }

    pub fn cycle_color(&mut self, forward: bool) {
        self.color = cycle(&ColorTag::ALL, &self.color, forward);
    }
}

fn cycle<T: Clone + PartialEq>(all: &[T], current: &T, forward: bool) -> T {
    let len = all.len();
    match all.iter().position(|v| v == current) {
        Some(i) if forward => all[(i + 1) % len].clone(),
        Some(i) => all[(i + len - 1) % len].clone(),
        None => all[0].clone(),
    }
}

/// Modal dialogs, rendered over the library screen. At most one is open.
#[derive(Debug)]
pub enum Dialog {
    /// Title prompt for a new book.
    NewBook(InputField),
    CharmEditor(CharmForm),
    ConfirmDeleteCharm { id: String, title: String },
    ConfirmDeleteBook { id: String, title: String },
}
