//! HTTP client for the Charmbooks API.
//!
//! One typed method per resource operation over the session/book/charm
//! hierarchy. All paths are joined onto a configurable base URL so the
//! server can be mounted under an arbitrary prefix; scheme-qualified URLs
//! pass through untouched. The session rides on a server-set cookie, so
//! the client keeps a cookie jar.

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

use crate::models::{Book, BookDraft, Charm, CharmDraft, Session};

/// Default server URL used when `--server` / `CHARMBOOKS_SERVER` is absent.
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8080/";

/// Error type for API client operations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport failure or response-decode failure from the HTTP layer.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    /// Server answered with a non-2xx status; `message` is the raw
    /// response body.
    #[error("server error ({status}): {message}")]
    Server { status: u16, message: String },
}

/// Client for the Charmbooks REST API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base: String,
    client: Client,
}

impl ApiClient {
    /// Create a client for the given base URL. The base is normalized to
    /// end with exactly one slash.
    pub fn new(base: &str) -> Result<Self, ApiError> {
        let client = Client::builder().cookie_store(true).build()?;
        Ok(Self {
            base: format!("{}/", base.trim_end_matches('/')),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base
    }

    /// Join a relative path onto the base URL. Absolute URLs bypass the
    /// base entirely.
    fn url(&self, path: &str) -> String {
        let lower = path.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            return path.to_string();
        }
        format!("{}{}", self.base, path.trim_start_matches('/'))
    }

    /// The shareable read-only link for a public book.
    pub fn public_book_url(&self, book_id: &str) -> String {
        self.url(&format!("api/public/books/{book_id}"))
    }

    // ------------------------------------------------------------------
    // Session
    // ------------------------------------------------------------------

    /// Fetch the current session. Answers 200 with an empty `user_id`
    /// when anonymous.
    pub async fn me(&self) -> Result<Session, ApiError> {
        self.get_json("api/me").await
    }

    pub async fn login(&self, email: &str, passcode: &str) -> Result<(), ApiError> {
        self.post_ack("api/login", &json!({ "email": email, "passcode": passcode }))
            .await
    }

    pub async fn register(&self, email: &str, passcode: &str) -> Result<(), ApiError> {
        self.post_ack("api/register", &json!({ "email": email, "passcode": passcode }))
            .await
    }

    pub async fn logout(&self) -> Result<(), ApiError> {
        self.post_ack("api/logout", &json!({})).await
    }

    // ------------------------------------------------------------------
    // Books
    // ------------------------------------------------------------------

    /// List the session user's books, server-ordered (latest edit first).
    pub async fn list_books(&self) -> Result<Vec<Book>, ApiError> {
        // The server marshals an empty list as `null`.
        let books: Option<Vec<Book>> = self.get_json("api/books").await?;
        Ok(books.unwrap_or_default())
    }

    pub async fn get_book(&self, id: &str) -> Result<Book, ApiError> {
        self.get_json(&format!("api/books/{id}")).await
    }

    pub async fn create_book(&self, draft: &BookDraft) -> Result<Book, ApiError> {
        self.post_json("api/books", draft).await
    }

    pub async fn save_book(&self, id: &str, draft: &BookDraft) -> Result<Book, ApiError> {
        self.put_json(&format!("api/books/{id}"), draft).await
    }

    pub async fn delete_book(&self, id: &str) -> Result<(), ApiError> {
        self.delete_ack(&format!("api/books/{id}")).await
    }

    // ------------------------------------------------------------------
    // Charms
    // ------------------------------------------------------------------

    /// List the charms of one book, server-ordered (latest edit first).
    pub async fn list_charms(&self, book_id: &str) -> Result<Vec<Charm>, ApiError> {
        let charms: Option<Vec<Charm>> = self
            .get_json(&format!("api/books/{book_id}/charms"))
            .await?;
        Ok(charms.unwrap_or_default())
    }

    pub async fn create_charm(
        &self,
        book_id: &str,
        draft: &CharmDraft,
    ) -> Result<Charm, ApiError> {
        self.post_json(&format!("api/books/{book_id}/charms"), draft)
            .await
    }

    pub async fn update_charm(&self, id: &str, draft: &CharmDraft) -> Result<Charm, ApiError> {
        self.put_json(&format!("api/charms/{id}"), draft).await
    }

    pub async fn delete_charm(&self, id: &str) -> Result<(), ApiError> {
        self.delete_ack(&format!("api/charms/{id}")).await
    }

    // ------------------------------------------------------------------
    // Request helpers
    // ------------------------------------------------------------------

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.client.get(self.url(path)).send().await?;
        Self::parse(response).await
    }

    async fn post_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self.client.post(self.url(path)).json(body).send().await?;
        Self::parse(response).await
    }

    async fn put_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self.client.put(self.url(path)).json(body).send().await?;
        Self::parse(response).await
    }

    /// POST where the caller only needs the acknowledgement.
    async fn post_ack<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        let _: serde_json::Value = self.post_json(path, body).await?;
        Ok(())
    }

    async fn delete_ack(&self, path: &str) -> Result<(), ApiError> {
        let response = self.client.delete(self.url(path)).send().await?;
        let _: serde_json::Value = Self::parse(response).await?;
        Ok(())
    }

    async fn parse<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(ApiError::Server { status, message });
        }
        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_normalized_to_one_trailing_slash() {
        let client = ApiClient::new("http://localhost:8080/charmbooks///").unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080/charmbooks/");

        let bare = ApiClient::new("http://localhost:8080").unwrap();
        assert_eq!(bare.base_url(), "http://localhost:8080/");
    }

    #[test]
    fn test_url_joins_relative_paths() {
        let client = ApiClient::new("http://localhost:8080/charmbooks").unwrap();
        assert_eq!(
            client.url("api/books"),
            "http://localhost:8080/charmbooks/api/books"
        );
        // Leading slashes on the path are stripped, never doubled.
        assert_eq!(
            client.url("//api/me"),
            "http://localhost:8080/charmbooks/api/me"
        );
    }

    #[test]
    fn test_url_passes_absolute_through() {
        let client = ApiClient::new("http://localhost:8080/charmbooks").unwrap();
        assert_eq!(
            client.url("https://example.com/x"),
            "https://example.com/x"
        );
        assert_eq!(
            client.url("HTTP://example.com/x"),
            "HTTP://example.com/x"
        );
    }

    #[test]
    fn test_public_book_url_respects_base() {
        let client = ApiClient::new("http://localhost:8080/charmbooks/").unwrap();
        assert_eq!(
            client.public_book_url("bk-1"),
            "http://localhost:8080/charmbooks/api/public/books/bk-1"
        );
    }

    #[test]
    fn test_server_error_display_carries_body() {
        let err = ApiError::Server {
            status: 403,
            message: "forbidden".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("403"));
        assert!(display.contains("forbidden"));
    }
}
