mod common;

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use common::{sample_store, search_value, THEME};
use rolodex::storage::{ContactStore, JsonStorage, MemoryStorage};
use rolodex::{router, ServerState};
use tower::ServiceExt;

fn app(state: &ServerState) -> Router {
    router(state.clone())
}

async fn send(
    app: Router,
    method: Method,
    uri: &str,
) -> (StatusCode, axum::http::HeaderMap, String) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    let status = response.status();
    let headers = response.headers().clone();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, headers, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn index_renders_shell_with_contacts() {
    let state = ServerState::new(Box::new(sample_store()), THEME);
    let (status, headers, body) = send(app(&state), Method::GET, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(headers[header::CONTENT_TYPE].to_str().unwrap().starts_with("text/html"));
    assert!(body.starts_with("<!DOCTYPE html>"));
    assert!(body.contains(r#"data-theme="cupcake""#));
    assert!(body.contains(r#"<link rel="preconnect" href="https://fonts.gstatic.com" crossorigin="anonymous">"#));
    assert!(body.contains(r#"<img src="/brand-icon.svg" alt="Brand Icon" class="w-8 h-8">"#));
    assert!(body.contains("Ada Lovelace"));
    assert!(body.contains(r#"id="index-page""#));
}

#[tokio::test]
async fn query_is_reflected_in_search_input_and_filters_list() {
    let state = ServerState::new(Box::new(sample_store()), THEME);
    let (status, _, body) = send(app(&state), Method::GET, "/?q=hop").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(search_value(&body).as_deref(), Some("hop"));
    assert!(body.contains("Grace Hopper"));
    assert!(!body.contains("Ada Lovelace"));
    assert!(body.contains(r#"data-history="replace""#));
}

#[tokio::test]
async fn search_input_keeps_focus_across_reloads() {
    let state = ServerState::new(Box::new(sample_store()), THEME);

    let (_, _, body) = send(app(&state), Method::GET, "/?q=a").await;
    assert!(body.contains(r#"type="search" autofocus>"#));

    let (_, _, body) = send(app(&state), Method::GET, "/?q=").await;
    assert!(body.contains(r#"type="search" autofocus>"#));

    let (_, _, body) = send(app(&state), Method::GET, "/").await;
    assert!(body.contains(r#"type="search">"#));
}

#[tokio::test]
async fn post_creates_contact_and_redirects_to_edit_view() {
    let state = ServerState::new(Box::new(MemoryStorage::new()), THEME);
    let (status, headers, _) = send(app(&state), Method::POST, "/").await;

    assert_eq!(status, StatusCode::FOUND);
    let location = headers[header::LOCATION].to_str().unwrap().to_string();

    let contacts = state.lock_store().unwrap().list_contacts(None).unwrap();
    assert_eq!(contacts.len(), 1);
    assert_eq!(location, format!("/contacts/{}/edit", contacts[0].id));

    let (status, _, body) = send(app(&state), Method::GET, &location).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"id="contact-form""#));
    assert!(body.contains("<i>No Name</i>"));
    assert!(body.contains("bg-primary text-primary-content"));
}

#[tokio::test]
async fn post_on_contact_route_also_creates() {
    let state = ServerState::new(Box::new(sample_store()), THEME);
    let (status, headers, _) = send(app(&state), Method::POST, "/contacts/1").await;

    assert_eq!(status, StatusCode::FOUND);
    assert!(headers[header::LOCATION].to_str().unwrap().ends_with("/edit"));
    assert_eq!(state.lock_store().unwrap().list_contacts(None).unwrap().len(), 4);
}

#[tokio::test]
async fn contact_route_renders_detail_card() {
    let state = ServerState::new(Box::new(sample_store()), THEME);
    let (status, _, body) = send(app(&state), Method::GET, "/contacts/1").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"id="contact""#));
    assert!(body.contains(r#"href="/contacts/1/edit""#));
    assert!(body.contains(r#"aria-current="page""#));
}

#[tokio::test]
async fn unknown_contact_is_not_found() {
    let state = ServerState::new(Box::new(sample_store()), THEME);
    let (status, _, body) = send(app(&state), Method::GET, "/contacts/nope").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("404"));
    assert!(body.contains("contact nope"));
}

#[tokio::test]
async fn unknown_path_is_not_found() {
    let state = ServerState::new(Box::new(sample_store()), THEME);
    let (status, _, _) = send(app(&state), Method::GET, "/about").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn brand_icon_is_svg() {
    let state = ServerState::new(Box::new(sample_store()), THEME);
    let (status, headers, body) = send(app(&state), Method::GET, "/brand-icon.svg").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers[header::CONTENT_TYPE], "image/svg+xml");
    assert!(body.starts_with("<svg"));
}

#[tokio::test]
async fn json_store_keeps_contacts_across_restarts() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("contacts.json");

    let state = ServerState::new(Box::new(JsonStorage::new(path.clone()).unwrap()), THEME);
    let (status, headers, _) = send(app(&state), Method::POST, "/").await;
    assert_eq!(status, StatusCode::FOUND);
    let location = headers[header::LOCATION].to_str().unwrap().to_string();
    drop(state);

    let state = ServerState::new(Box::new(JsonStorage::new(path).unwrap()), THEME);
    let (status, _, _) = send(app(&state), Method::GET, &location).await;
    assert_eq!(status, StatusCode::OK);
}
