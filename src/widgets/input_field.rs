//! Single-line text input used by the login form, the book editor and
//! the dialogs.
//!
//! Owns content plus a cursor; rendering is done by the ui layer, which
//! asks for the display width before the cursor to place the caret.

use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, Default)]
pub struct InputField {
    content: String,
    /// Cursor position as a character index into `content`.
    cursor: usize,
}

impl InputField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a field pre-filled with `content`, cursor at the end.
    pub fn with_content(content: impl Into<String>) -> Self {
        let content = content.into();
        let cursor = content.chars().count();
        Self { content, cursor }
    }

    /// Byte offset of the cursor within the content.
    fn byte_index(&self) -> usize {
        self.content
            .char_indices()
            .nth(self.cursor)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }

    pub fn insert_char(&mut self, c: char) {
        let at = self.byte_index();
        self.content.insert(at, c);
        self.cursor += 1;
    }

    /// Delete the character before the cursor.
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_index();
            self.content.remove(at);
        }
    }

    /// Delete the character under the cursor.
    pub fn delete_char(&mut self) {
        if self.cursor < self.content.chars().count() {
            let at = self.byte_index();
            self.content.remove(at);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.content.chars().count() {
            self.cursor += 1;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.content.chars().count();
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
        self.cursor = self.content.chars().count();
    }

    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Display width of the text before the cursor, in terminal cells.
    pub fn width_before_cursor(&self) -> usize {
        let at = self.byte_index();
        self.content[..at].width()
    }

    /// Bullet-masked copy for secret fields.
    pub fn masked(&self) -> String {
        "•".repeat(self.content.chars().count())
    }
}
