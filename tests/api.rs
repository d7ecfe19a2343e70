//! End-to-end tests driving the real router over `tower::ServiceExt::oneshot`
//! with an in-memory SQLite database. Session continuity across requests is
//! exercised by replaying the session-id cookie from the login response.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use tower::ServiceExt;

use hotel_api_server::auth::password;
use hotel_api_server::state::AppState;

/// Build the full application against a fresh in-memory database.
///
/// A single connection keeps the in-memory database alive and shared between
/// the session store and the application queries.
async fn app() -> (Router, SqlitePool) {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();

    sqlx::migrate!("./migrations").run(&pool).await.unwrap();

    let router = hotel_api_server::app(AppState { db: pool.clone() })
        .await
        .unwrap();

    (router, pool)
}

/// Fire one request and return (status, parsed JSON body, session cookie).
async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
    cookie: Option<&str>,
) -> (StatusCode, Value, Option<String>) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }

    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();

    let status = response.status();
    let session_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map(|v| v.to_string());

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: Value = serde_json::from_slice(&bytes).unwrap();

    (status, json, session_cookie)
}

async fn register(app: &Router, username: &str, pass: &str, name: Option<&str>) -> (StatusCode, Value) {
    let mut body = json!({ "username": username, "password": pass });
    if let Some(name) = name {
        body["name"] = json!(name);
    }
    let (status, json, _) = send(app, "POST", "/register", Some(body), None).await;
    (status, json)
}

/// Log in and return the session cookie, asserting success.
async fn login(app: &Router, username: &str, pass: &str) -> String {
    let body = json!({ "username": username, "password": pass });
    let (status, _, cookie) = send(app, "POST", "/login", Some(body), None).await;
    assert_eq!(status, StatusCode::OK);
    cookie.expect("login response should set a session cookie")
}

/// Insert a user row directly, bypassing /register.
async fn seed_user(pool: &SqlitePool, username: &str, pass: &str, role: &str) -> i64 {
    sqlx::query("INSERT INTO users (username, password, role) VALUES (?, ?, ?)")
        .bind(username)
        .bind(pass)
        .bind(role)
        .execute(pool)
        .await
        .unwrap()
        .last_insert_rowid()
}

#[tokio::test]
async fn health_reports_ok() {
    let (app, _pool) = app().await;

    let (status, body, _) = send(&app, "GET", "/health", None, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert!(body["time"].as_str().is_some());
}

#[tokio::test]
async fn index_welcomes_anonymous_and_greets_logged_in() {
    let (app, _pool) = app().await;

    let (status, body, _) = send(&app, "GET", "/", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["message"].as_str().unwrap().contains("Welcome"));

    let (status, _) = register(&app, "alice", "secret", None).await;
    assert_eq!(status, StatusCode::CREATED);
    let cookie = login(&app, "alice", "secret").await;

    let (status, body, _) = send(&app, "GET", "/", None, Some(&cookie)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Logged in as alice");
    assert_eq!(body["role"], "guest");
}

#[tokio::test]
async fn register_then_login_returns_matching_user() {
    let (app, _pool) = app().await;

    let (status, body) = register(&app, "bob", "hunter2", Some("Bob")).await;
    assert_eq!(status, StatusCode::CREATED);
    let user_id = body["user_id"].as_i64().unwrap();

    let (status, body, cookie) = send(
        &app,
        "POST",
        "/login",
        Some(json!({ "username": "bob", "password": "hunter2" })),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user_id"].as_i64().unwrap(), user_id);
    assert_eq!(body["role"], "guest");
    assert!(cookie.is_some());
}

#[tokio::test]
async fn register_requires_username_and_password() {
    let (app, _pool) = app().await;

    let (status, body, _) = send(&app, "POST", "/register", Some(json!({})), None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("required"));

    let (status, _, _) = send(
        &app,
        "POST",
        "/register",
        Some(json!({ "username": "carol" })),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Empty strings count as absent, matching the presence-check contract.
    let (status, _, _) = send(
        &app,
        "POST",
        "/register",
        Some(json!({ "username": "", "password": "" })),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn duplicate_username_returns_conflict() {
    let (app, _pool) = app().await;

    let (status, _) = register(&app, "dave", "first", None).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = register(&app, "dave", "second", None).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert!(body["error"].as_str().unwrap().contains("already exists"));
}

#[tokio::test]
async fn login_with_wrong_password_is_unauthorized() {
    let (app, _pool) = app().await;

    register(&app, "erin", "correct", None).await;

    let (status, body, cookie) = send(
        &app,
        "POST",
        "/login",
        Some(json!({ "username": "erin", "password": "wrong" })),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(body["error"].as_str().unwrap().contains("invalid credentials"));
    // No session is created on a failed login.
    assert!(cookie.is_none());
}

#[tokio::test]
async fn login_with_unknown_user_is_unauthorized() {
    let (app, _pool) = app().await;

    let (status, body, _) = send(
        &app,
        "POST",
        "/login",
        Some(json!({ "username": "nobody", "password": "whatever" })),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(body["error"].as_str().unwrap().contains("invalid credentials"));
}

#[tokio::test]
async fn admin_check_enforces_auth_then_role() {
    let (app, pool) = app().await;

    // No session at all: 401.
    let (status, _, _) = send(&app, "GET", "/admin/check", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    // Authenticated but wrong role: 403.
    register(&app, "frank", "guestpass", None).await;
    let guest_cookie = login(&app, "frank", "guestpass").await;
    let (status, body, _) = send(&app, "GET", "/admin/check", None, Some(&guest_cookie)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert!(body["error"].as_str().unwrap().contains("admin"));

    // Admin role: 200 with the caller's username.
    let hashed = password::hash("adminpass").unwrap();
    seed_user(&pool, "grace", &hashed, "admin").await;
    let admin_cookie = login(&app, "grace", "adminpass").await;
    let (status, body, _) = send(&app, "GET", "/admin/check", None, Some(&admin_cookie)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "hello admin");
    assert_eq!(body["username"], "grace");
}

#[tokio::test]
async fn logout_destroys_the_session() {
    let (app, _pool) = app().await;

    register(&app, "heidi", "pass", None).await;
    let cookie = login(&app, "heidi", "pass").await;

    // Session works before logout.
    let (status, _, _) = send(&app, "GET", "/guest/profile", None, Some(&cookie)).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body, _) = send(&app, "POST", "/logout", None, Some(&cookie)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "logged out");

    // The old cookie no longer resolves to a session.
    let (status, _, _) = send(&app, "GET", "/guest/profile", None, Some(&cookie)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn logout_without_session_is_unauthorized() {
    let (app, _pool) = app().await;

    let (status, _, _) = send(&app, "POST", "/logout", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn guest_profile_returns_the_guest_row() {
    let (app, _pool) = app().await;

    register(&app, "ivan", "pass", Some("Ivan Petrov")).await;
    let cookie = login(&app, "ivan", "pass").await;

    let (status, body, _) = send(&app, "GET", "/guest/profile", None, Some(&cookie)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["guest"]["name"], "Ivan Petrov");
}

#[tokio::test]
async fn guest_profile_is_null_when_row_is_missing() {
    let (app, pool) = app().await;

    // A guest-role user can exist without a guests row; the profile route
    // reports that as null rather than failing.
    let hashed = password::hash("pass").unwrap();
    seed_user(&pool, "judy", &hashed, "guest").await;
    let cookie = login(&app, "judy", "pass").await;

    let (status, body, _) = send(&app, "GET", "/guest/profile", None, Some(&cookie)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["guest"].is_null());
}

#[tokio::test]
async fn guest_profile_rejects_admins() {
    let (app, pool) = app().await;

    let hashed = password::hash("adminpass").unwrap();
    seed_user(&pool, "mallory", &hashed, "admin").await;
    let cookie = login(&app, "mallory", "adminpass").await;

    let (status, _, _) = send(&app, "GET", "/guest/profile", None, Some(&cookie)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn legacy_plaintext_password_still_logs_in() {
    let (app, pool) = app().await;

    // Stored value predates hashing; verification falls back to equality.
    seed_user(&pool, "oldtimer", "plaintext-password", "guest").await;

    let cookie = login(&app, "oldtimer", "plaintext-password").await;
    let (status, _, _) = send(&app, "GET", "/guest/profile", None, Some(&cookie)).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _, _) = send(
        &app,
        "POST",
        "/login",
        Some(json!({ "username": "oldtimer", "password": "plaintext-passwor" })),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn register_defaults_name_to_username() {
    let (app, _pool) = app().await;

    register(&app, "kevin", "pass", None).await;
    let cookie = login(&app, "kevin", "pass").await;

    let (status, body, _) = send(&app, "GET", "/guest/profile", None, Some(&cookie)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["guest"]["name"], "kevin");
}
