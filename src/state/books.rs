//! Book store: the user's book list and the current selection.
//!
//! The list keeps the server's order (latest edit first) and is treated
//! as stable for tab rendering. Selection is client-local UI state; at
//! most one book is selected at a time.

use crate::api::{ApiClient, ApiError};
use crate::models::{Book, BookDraft};

#[derive(Debug, Clone, Default)]
pub struct BookStore {
    pub books: Vec<Book>,
    /// Full record of the selected book, or `None`.
    pub current: Option<Book>,
}

impl BookStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.current.as_ref().map(|b| b.id.as_str())
    }

    /// Replace the book list with the server's. Selection untouched.
    pub async fn load(&mut self, api: &ApiClient) -> Result<(), ApiError> {
        self.books = api.list_books().await?;
        Ok(())
    }

    /// Select a book by id, re-fetching the full record so the editor
    /// shows authoritative timestamps rather than a stale list copy.
    /// Returns the selected id; the caller reloads charms for it.
    pub async fn select(&mut self, api: &ApiClient, id: &str) -> Result<String, ApiError> {
        let book = api.get_book(id).await?;
        let id = book.id.clone();
        self.current = Some(book);
        Ok(id)
    }

    /// Create a book, reload the list, and select the new book. Returns
    /// the new id. Title presence is the caller's concern.
    pub async fn create(&mut self, api: &ApiClient, draft: &BookDraft) -> Result<String, ApiError> {
        let created = api.create_book(draft).await?;
        self.load(api).await?;
        self.select(api, &created.id).await
    }

    /// Save the current selection's writable fields, then re-select it
    /// (fresh fetch, so `updated_at` reflects the server's write) and
    /// reload the list so title changes reach the tabs. No-op when
    /// nothing is selected.
    pub async fn save(&mut self, api: &ApiClient, draft: &BookDraft) -> Result<(), ApiError> {
        let Some(id) = self.selected_id().map(str::to_string) else {
            return Ok(());
        };
        api.save_book(&id, draft).await?;
        self.select(api, &id).await?;
        self.load(api).await
    }

    /// Delete a book on the server. Clears the selection if it pointed at
    /// the deleted book; the caller chooses a replacement (the store does
    /// not auto-select one).
    pub async fn delete(&mut self, api: &ApiClient, id: &str) -> Result<(), ApiError> {
        api.delete_book(id).await?;
        if self.selected_id() == Some(id) {
            self.current = None;
        }
        Ok(())
    }

    /// Drop list and selection (logout path).
    pub fn clear(&mut self) {
        self.books.clear();
        self.current = None;
    }
}
