//! Charm store: the charm list of the currently selected book.
//!
//! The displayed list always corresponds to the selected book; switching
//! books replaces it wholesale, never merges. The selection itself lives
//! in the [`BookStore`] and is read fresh when an operation begins.

use crate::api::{ApiClient, ApiError};
use crate::models::{BookDraft, Charm, CharmDraft};

use super::BookStore;

#[derive(Debug, Clone, Default)]
pub struct CharmStore {
    pub charms: Vec<Charm>,
}

impl CharmStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the list with the server's list for `book_id`.
    pub async fn load(&mut self, api: &ApiClient, book_id: &str) -> Result<(), ApiError> {
        self.charms = api.list_charms(book_id).await?;
        Ok(())
    }

    /// Create or update a charm in the selected book.
    ///
    /// If no book is selected, a private book titled "New Book" is
    /// created and selected first. This is the sole auto-creation rule,
    /// keeping every charm under a parent. After the write the whole list is
    /// re-fetched rather than patched: the server orders by last edit,
    /// so a write reorders it.
    pub async fn create_or_update(
        &mut self,
        api: &ApiClient,
        books: &mut BookStore,
        existing_id: Option<&str>,
        draft: &CharmDraft,
    ) -> Result<(), ApiError> {
        let book_id = match books.selected_id() {
            Some(id) => id.to_string(),
            None => books.create(api, &BookDraft::titled("New Book")).await?,
        };
        match existing_id {
            Some(id) => {
                api.update_charm(id, draft).await?;
            }
            None => {
                api.create_charm(&book_id, draft).await?;
            }
        }
        self.load(api, &book_id).await
    }

    /// Delete a charm, then drop it from the local list by filtering.
    /// No re-fetch: deletion cannot change the remaining charms' fields,
    /// so the round trip is skipped.
    pub async fn delete(&mut self, api: &ApiClient, id: &str) -> Result<(), ApiError> {
        api.delete_charm(id).await?;
        self.charms.retain(|c| c.id != id);
        Ok(())
    }

    pub fn clear(&mut self) {
        self.charms.clear();
    }
}
