//! End-to-end scenarios driven through the App's intent dispatch,
//! without a terminal.

mod common;

use common::{
    book_json, charm_json, client_for, mount_book, mount_books, mount_books_once, mount_charms,
    mount_session,
};

use charmbooks::app::{App, Screen, UiIntent};
use charmbooks::glyph::FALLBACK_ID;
use charmbooks::models::{CharmDraft, ColorTag, Shape};
use charmbooks::ui::view_model::charm_view_model;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn app_for(server: &MockServer) -> App {
    App::new(client_for(server))
}

/// Anonymous session: boot lands on the login screen with empty state.
#[tokio::test]
async fn test_boot_anonymous_shows_login() {
    let server = MockServer::start().await;
    mount_session(&server, "").await;

    let mut app = app_for(&server);
    app.boot().await;

    assert_eq!(app.screen, Screen::Login);
    assert!(app.books.books.is_empty());
    assert!(app.books.current.is_none());
    assert!(app.charms.charms.is_empty());
}

/// Authenticated boot selects the first book of the server order and
/// loads its charms.
#[tokio::test]
async fn test_boot_selects_first_book() {
    let server = MockServer::start().await;
    mount_session(&server, "user-1").await;
    mount_books(
        &server,
        &[book_json("bk-1", "Alpha"), book_json("bk-2", "Beta")],
    )
    .await;
    mount_book(&server, &book_json("bk-1", "Alpha")).await;
    mount_charms(
        &server,
        "bk-1",
        &[charm_json("ch-1", "bk-1", "one", "star", "red")],
    )
    .await;

    let mut app = app_for(&server);
    app.boot().await;

    assert_eq!(app.screen, Screen::Library);
    assert_eq!(app.books.selected_id(), Some("bk-1"));
    assert_eq!(app.charms.charms.len(), 1);
    // The editor panel mirrors the selection.
    assert_eq!(app.book_form.title.content(), "Alpha");
}

/// Creating a book puts it in the list and selects it.
#[tokio::test]
async fn test_create_book_selects_it() {
    let server = MockServer::start().await;
    let trip = book_json("bk-1", "Trip Notes");

    mount_session(&server, "user-1").await;
    mount_books_once(&server, &[]).await;
    Mock::given(method("POST"))
        .and(path("/api/books"))
        .and(body_json(json!({
            "title": "Trip Notes",
            "note": "",
            "is_public": false
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(trip.clone()))
        .expect(1)
        .mount(&server)
        .await;
    mount_books(&server, std::slice::from_ref(&trip)).await;
    mount_book(&server, &trip).await;
    mount_charms(&server, "bk-1", &[]).await;

    let mut app = app_for(&server);
    app.boot().await;
    assert!(app.books.books.is_empty());

    app.dispatch(UiIntent::CreateBook {
        title: "Trip Notes".to_string(),
    })
    .await;

    assert_eq!(app.books.books.len(), 1);
    assert_eq!(app.books.books[0].title, "Trip Notes");
    assert_eq!(app.books.selected_id(), Some("bk-1"));
    assert!(app.charms.charms.is_empty());
}

/// Creating a charm under the selected book grows the list by one with
/// the given shape and color.
#[tokio::test]
async fn test_create_charm_under_selected_book() {
    let server = MockServer::start().await;
    let book = book_json("bk-1", "Trip Notes");

    mount_session(&server, "user-1").await;
    mount_books(&server, std::slice::from_ref(&book)).await;
    mount_book(&server, &book).await;
    // Empty before the write, one charm after.
    Mock::given(method("GET"))
        .and(path("/api/books/bk-1/charms"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/books/bk-1/charms"))
        .and(body_json(json!({
            "title": "PIN",
            "text_value": "1234",
            "shape": "star",
            "color": "gold"
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(charm_json("ch-1", "bk-1", "PIN", "star", "gold")),
        )
        .expect(1)
        .mount(&server)
        .await;
    mount_charms(
        &server,
        "bk-1",
        &[charm_json("ch-1", "bk-1", "PIN", "star", "gold")],
    )
    .await;

    let mut app = app_for(&server);
    app.boot().await;
    assert!(app.charms.charms.is_empty());

    app.dispatch(UiIntent::SubmitCharm {
        existing_id: None,
        draft: CharmDraft {
            title: "PIN".to_string(),
            text_value: "1234".to_string(),
            shape: Shape::Star,
            color: ColorTag::Gold,
        },
    })
    .await;

    assert_eq!(app.charms.charms.len(), 1);
    assert_eq!(app.charms.charms[0].shape, Shape::Star);
    assert_eq!(app.charms.charms[0].color, ColorTag::Gold);
}

/// Updating a charm to an unknown shape is accepted client-side, and the
/// renderer falls back to the generic outline.
#[tokio::test]
async fn test_update_to_unknown_shape_renders_fallback() {
    let server = MockServer::start().await;
    let book = book_json("bk-1", "Trip Notes");
    let odd = charm_json("ch-1", "bk-1", "odd", "unknown-shape", "gold");

    mount_session(&server, "user-1").await;
    mount_books(&server, std::slice::from_ref(&book)).await;
    mount_book(&server, &book).await;
    Mock::given(method("GET"))
        .and(path("/api/books/bk-1/charms"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([charm_json("ch-1", "bk-1", "odd", "star", "gold")])),
        )
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/charms/ch-1"))
        .and(body_json(json!({
            "title": "odd",
            "text_value": "secret",
            "shape": "unknown-shape",
            "color": "gold"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(odd.clone()))
        .expect(1)
        .mount(&server)
        .await;
    mount_charms(&server, "bk-1", std::slice::from_ref(&odd)).await;

    let mut app = app_for(&server);
    app.boot().await;

    app.dispatch(UiIntent::SubmitCharm {
        existing_id: Some("ch-1".to_string()),
        draft: CharmDraft {
            title: "odd".to_string(),
            text_value: "secret".to_string(),
            shape: Shape::Other("unknown-shape".to_string()),
            color: ColorTag::Gold,
        },
    })
    .await;

    let charm = &app.charms.charms[0];
    assert_eq!(charm.shape, Shape::Other("unknown-shape".to_string()));
    assert_eq!(charm_view_model(charm).outline.id, FALLBACK_ID);
}

/// Auth failures raise a blocking notice and leave prior state alone.
#[tokio::test]
async fn test_login_failure_raises_notice() {
    let server = MockServer::start().await;
    mount_session(&server, "").await;
    Mock::given(method("POST"))
        .and(path("/api/login"))
        .respond_with(ResponseTemplate::new(401).set_body_string(r#"{"error":"invalid credentials"}"#))
        .mount(&server)
        .await;

    let mut app = app_for(&server);
    app.boot().await;

    app.dispatch(UiIntent::Login {
        email: "a@b.c".to_string(),
        passcode: "wrong".to_string(),
    })
    .await;

    assert!(app.notice.is_some());
    assert!(!app.session.is_authenticated());
    assert_eq!(app.screen, Screen::Login);
}

/// CRUD failures are logged only: no notice, state stays consistent.
#[tokio::test]
async fn test_save_failure_keeps_state_and_stays_silent() {
    let server = MockServer::start().await;
    let book = book_json("bk-1", "Alpha");

    mount_session(&server, "user-1").await;
    mount_books(&server, std::slice::from_ref(&book)).await;
    mount_book(&server, &book).await;
    mount_charms(&server, "bk-1", &[]).await;
    Mock::given(method("PUT"))
        .and(path("/api/books/bk-1"))
        .respond_with(ResponseTemplate::new(500).set_body_string(r#"{"error":"db"}"#))
        .mount(&server)
        .await;

    let mut app = app_for(&server);
    app.boot().await;

    app.book_form.title.set_content("Renamed");
    app.dispatch(UiIntent::SaveBook).await;

    assert!(app.notice.is_none());
    // The server never applied the write; the store still holds the
    // last-known record.
    assert_eq!(app.books.current.as_ref().map(|b| b.title.as_str()), Some("Alpha"));
}

/// Logout re-boots into the login screen and clears the library state.
#[tokio::test]
async fn test_logout_clears_library() {
    let server = MockServer::start().await;
    let book = book_json("bk-1", "Alpha");

    Mock::given(method("GET"))
        .and(path("/api/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "user_id": "user-1" })))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    mount_session(&server, "").await;
    mount_books(&server, std::slice::from_ref(&book)).await;
    mount_book(&server, &book).await;
    mount_charms(&server, "bk-1", &[]).await;
    Mock::given(method("POST"))
        .and(path("/api/logout"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ok": true })))
        .expect(1)
        .mount(&server)
        .await;

    let mut app = app_for(&server);
    app.boot().await;
    assert_eq!(app.screen, Screen::Library);

    app.dispatch(UiIntent::Logout).await;

    assert_eq!(app.screen, Screen::Login);
    assert!(app.books.books.is_empty());
    assert!(app.charms.charms.is_empty());
}
