//! Common test utilities for integration tests.
//!
//! Provides a mock Charmbooks server (wiremock) plus sample record
//! builders shared across the test files.

use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use charmbooks::api::ApiClient;

/// An API client pointed at a mock server.
pub fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::new(&server.uri()).expect("client should build")
}

/// A book record as the server would marshal it.
pub fn book_json(id: &str, title: &str) -> Value {
    json!({
        "id": id,
        "owner_id": "user-1",
        "title": title,
        "note": "",
        "is_public": false,
        "created_at": "2025-06-01T12:00:00Z",
        "updated_at": "2025-06-02T12:00:00Z"
    })
}

/// A charm record as the server would marshal it.
pub fn charm_json(id: &str, book_id: &str, title: &str, shape: &str, color: &str) -> Value {
    json!({
        "id": id,
        "book_id": book_id,
        "shape": shape,
        "color": color,
        "title": title,
        "text_value": "secret",
        "created_at": "2025-06-01T12:00:00Z",
        "updated_at": "2025-06-01T12:00:00Z"
    })
}

/// Mount `GET api/me` answering with the given user id (empty string for
/// anonymous, per the server contract).
pub async fn mount_session(server: &MockServer, user_id: &str) {
    Mock::given(method("GET"))
        .and(path("/api/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "user_id": user_id })))
        .mount(server)
        .await;
}

/// Mount `GET api/books` with a fixed list.
pub async fn mount_books(server: &MockServer, books: &[Value]) {
    Mock::given(method("GET"))
        .and(path("/api/books"))
        .respond_with(ResponseTemplate::new(200).set_body_json(Value::Array(books.to_vec())))
        .mount(server)
        .await;
}

/// Mount `GET api/books` answering the given list only once; mount this
/// before the follow-up list so the earlier state wins first.
pub async fn mount_books_once(server: &MockServer, books: &[Value]) {
    Mock::given(method("GET"))
        .and(path("/api/books"))
        .respond_with(ResponseTemplate::new(200).set_body_json(Value::Array(books.to_vec())))
        .up_to_n_times(1)
        .mount(server)
        .await;
}

/// Mount `GET api/books/{id}` for one book.
pub async fn mount_book(server: &MockServer, book: &Value) {
    let id = book["id"].as_str().expect("book id");
    Mock::given(method("GET"))
        .and(path(format!("/api/books/{id}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(book.clone()))
        .mount(server)
        .await;
}

/// Mount `GET api/books/{bookId}/charms` with a fixed list.
pub async fn mount_charms(server: &MockServer, book_id: &str, charms: &[Value]) {
    Mock::given(method("GET"))
        .and(path(format!("/api/books/{book_id}/charms")))
        .respond_with(ResponseTemplate::new(200).set_body_json(Value::Array(charms.to_vec())))
        .mount(server)
        .await;
}
