//! Intent dispatch and the boot sequence.
//!
//! Error policy: auth-flow failures (login/register) raise a blocking
//! notice and leave prior state untouched; every other store-level
//! failure is logged only, degrading to a stale-but-consistent UI. No
//! operation is retried; nothing here is fatal to the process.

use tracing::{error, info};

use crate::api::ApiError;
use crate::clipboard;
use crate::models::BookDraft;

use super::{App, Focus, Screen, UiIntent};

impl App {
    /// Execute one UI intent. Operations are awaited inline on the event
    /// loop, so user-triggered operations never overlap.
    pub async fn dispatch(&mut self, intent: UiIntent) {
        self.status = None;
        match intent {
            UiIntent::Boot => self.boot().await,

            UiIntent::Login { email, passcode } => {
                match self.session.login(&self.api, &email, &passcode).await {
                    Ok(()) => {
                        info!("login ok");
                        self.login_form.passcode.clear();
                        self.boot().await;
                    }
                    Err(err) => {
                        error!("login failed: {err}");
                        self.notice =
                            Some("Login failed. Check email/passcode and try again.".to_string());
                    }
                }
            }

            UiIntent::Register { email, passcode } => {
                match self.session.register(&self.api, &email, &passcode).await {
                    Ok(()) => {
                        info!("register ok");
                        self.login_form.passcode.clear();
                        self.boot().await;
                    }
                    Err(err) => {
                        error!("register failed: {err}");
                        self.notice = Some(format!("Register failed: {err}"));
                    }
                }
            }

            UiIntent::Logout => {
                // Logout failures are swallowed; the boot below converges
                // the UI on the server's view either way.
                self.session.logout(&self.api).await;
                self.boot().await;
            }

            UiIntent::SelectBook(id) => {
                if let Err(err) = self.select_book(&id).await {
                    error!("select book {id}: {err}");
                }
            }

            UiIntent::CreateBook { title } => {
                if let Err(err) = self.create_book(&title).await {
                    error!("create book: {err}");
                }
            }

            UiIntent::SaveBook => {
                if let Err(err) = self.save_book().await {
                    error!("save book: {err}");
                }
            }

            UiIntent::DeleteBook(id) => {
                if let Err(err) = self.delete_book(&id).await {
                    error!("delete book {id}: {err}");
                }
            }

            UiIntent::SubmitCharm { existing_id, draft } => {
                let result = self
                    .charms
                    .create_or_update(&self.api, &mut self.books, existing_id.as_deref(), &draft)
                    .await;
                match result {
                    // The write may have auto-created and selected a book;
                    // mirror whatever is current back into the panel.
                    Ok(()) => self.sync_book_form(),
                    Err(err) => error!("submit charm: {err}"),
                }
            }

            UiIntent::DeleteCharm(id) => {
                if let Err(err) = self.charms.delete(&self.api, &id).await {
                    error!("delete charm {id}: {err}");
                } else {
                    self.move_charm_cursor(0);
                }
            }

            UiIntent::CopyCharm(id) => {
                let text = self
                    .charms
                    .charms
                    .iter()
                    .find(|c| c.id == id)
                    .map(|c| c.text_value.clone());
                match text {
                    Some(text) => match clipboard::copy_text(&text) {
                        Ok(()) => self.status = Some("Copied to clipboard".to_string()),
                        Err(err) => error!("copy charm {id}: {err}"),
                    },
                    None => error!("copy charm {id}: not in list"),
                }
            }
        }
        self.needs_redraw = true;
    }

    /// Top-level resynchronization, re-run after every auth state change.
    /// Never propagates errors: failures are logged and the UI keeps its
    /// last rendered state.
    pub async fn boot(&mut self) {
        if let Err(err) = self.try_boot().await {
            error!("boot failed: {err}");
        }
    }

    async fn try_boot(&mut self) -> Result<(), ApiError> {
        self.session.refresh(&self.api).await?;
        if self.session.is_authenticated() {
            self.screen = Screen::Library;
            self.books.load(&self.api).await?;
            match self.books.books.first().map(|b| b.id.clone()) {
                Some(first) => self.select_book(&first).await?,
                None => {
                    self.books.current = None;
                    self.charms.clear();
                    self.book_form.reset();
                }
            }
        } else {
            self.screen = Screen::Login;
            self.focus = Focus::Grid;
            self.dialog = None;
            self.books.clear();
            self.charms.clear();
            self.book_form.reset();
        }
        Ok(())
    }

    /// Select a book and reload the charms scoped to it.
    async fn select_book(&mut self, id: &str) -> Result<(), ApiError> {
        let id = self.books.select(&self.api, id).await?;
        self.charms.load(&self.api, &id).await?;
        self.selected_charm = 0;
        self.sync_book_form();
        Ok(())
    }

    async fn create_book(&mut self, title: &str) -> Result<(), ApiError> {
        let draft = BookDraft::titled(title);
        let id = self.books.create(&self.api, &draft).await?;
        self.charms.load(&self.api, &id).await?;
        self.selected_charm = 0;
        self.sync_book_form();
        Ok(())
    }

    /// Save the editor panel, then re-select (fresh timestamps) and
    /// reload the tabs; the store sequences the server calls.
    async fn save_book(&mut self) -> Result<(), ApiError> {
        if self.books.current.is_none() {
            return Ok(());
        }
        let draft = self.book_form.draft();
        self.books.save(&self.api, &draft).await?;
        if let Some(id) = self.books.selected_id().map(str::to_string) {
            self.charms.load(&self.api, &id).await?;
        }
        self.sync_book_form();
        self.status = Some("Book saved".to_string());
        Ok(())
    }

    /// Delete a book, then select the first remaining one or clear the
    /// library view.
    async fn delete_book(&mut self, id: &str) -> Result<(), ApiError> {
        self.books.delete(&self.api, id).await?;
        self.books.load(&self.api).await?;
        match self.books.books.first().map(|b| b.id.clone()) {
            Some(first) => self.select_book(&first).await?,
            None => {
                self.books.current = None;
                self.charms.clear();
                self.book_form.reset();
                self.selected_charm = 0;
            }
        }
        Ok(())
    }

    /// Mirror the current selection into the book editor panel.
    fn sync_book_form(&mut self) {
        if let Some(book) = &self.books.current {
            self.book_form.load_from(book);
        } else {
            self.book_form.reset();
        }
    }
}
