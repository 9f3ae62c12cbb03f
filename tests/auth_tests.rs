
use reqwest::StatusCode;
use serde_json::{json, Value};
use test_utils::*;

#[actix_rt::test]
async fn login_with_unknown_email_returns_401() {
    let app = TestApp::spawn().await;

    let response = app.client
        .post(app.url("/api/admin/login"))
        .json(&json!({"email": "intruder@example.com", "password": ADMIN_PASSWORD}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[actix_rt::test]
async fn login_with_wrong_password_returns_401() {
    let app = TestApp::spawn().await;

    let response = app.client
        .post(app.url("/api/admin/login"))
        .json(&json!({"email": ADMIN_EMAIL, "password": "wrong"}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Wrong credentials");
}

#[actix_rt::test]
async fn login_with_correct_credentials_returns_token() {
    let app = TestApp::spawn().await;

    let response = app.client
        .post(app.url("/api/admin/login"))
        .json(&json!({"email": ADMIN_EMAIL, "password": ADMIN_PASSWORD}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.unwrap();
    assert!(!body["token"].as_str().unwrap().is_empty());
    assert_eq!(body["admin"]["email"], ADMIN_EMAIL);
}

#[actix_rt::test]
async fn bootstrapped_credential_survives_a_second_login() {
    let app = TestApp::spawn().await;

    // First login provisions the record, second one finds it.
    let first = app.login().await;
    let second = app.login().await;

    assert!(!first.is_empty());
    assert!(!second.is_empty());
}

#[actix_rt::test]
async fn garbage_token_is_rejected_with_401() {
    let app = TestApp::spawn().await;

    let response = app.client
        .post(app.url("/api/projects"))
        .bearer_auth("not-a-real-token")
        .json(&json!({"title": "X", "description": "Y"}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Invalid token");
}

#[actix_rt::test]
async fn token_from_login_authorizes_a_subsequent_call() {
    let app = TestApp::spawn().await;
    let token = app.login().await;

    let response = app.client
        .post(app.url("/api/projects"))
        .bearer_auth(&token)
        .json(&json!({"title": "X", "description": "Y", "technologies": []}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
}

#[actix_rt::test]
async fn change_password_requires_a_token() {
    let app = TestApp::spawn().await;

    let response = app.client
        .put(app.url("/api/admin/password"))
        .json(&json!({"currentPassword": ADMIN_PASSWORD, "newPassword": "AnotherPass1!"}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[actix_rt::test]
async fn change_password_rotates_the_credential() {
    let app = TestApp::spawn().await;
    let token = app.login().await;

    let response = app.client
        .put(app.url("/api/admin/password"))
        .bearer_auth(&token)
        .json(&json!({"currentPassword": ADMIN_PASSWORD, "newPassword": "RotatedPass1!"}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // Old password no longer works
    let old = app.client
        .post(app.url("/api/admin/login"))
        .json(&json!({"email": ADMIN_EMAIL, "password": ADMIN_PASSWORD}))
        .send()
        .await
        .unwrap();
    assert_eq!(old.status(), StatusCode::UNAUTHORIZED);

    // New one does
    let new = app.client
        .post(app.url("/api/admin/login"))
        .json(&json!({"email": ADMIN_EMAIL, "password": "RotatedPass1!"}))
        .send()
        .await
        .unwrap();
    assert_eq!(new.status(), StatusCode::OK);
}
