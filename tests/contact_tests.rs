
use reqwest::StatusCode;
use serde_json::{json, Value};
use test_utils::*;

async fn submit_message(app: &TestApp) -> String {
    let response = app.client
        .post(app.url("/api/contact"))
        .json(&json!({
            "name": "Visitor",
            "email": "visitor@example.com",
            "message": "I like your work"
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let body: Value = response.json().await.unwrap();
    assert!(!body["message"].as_str().unwrap().is_empty());
    body["id"].as_str().unwrap().to_string()
}

async fn list_messages(app: &TestApp, token: &str) -> Vec<Value> {
    let response = app.client
        .get(app.url("/api/contact"))
        .bearer_auth(token)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    response.json().await.unwrap()
}

#[actix_rt::test]
async fn anonymous_submission_needs_no_token_and_defaults_to_unread() {
    let app = TestApp::spawn().await;

    let id = submit_message(&app).await;

    let token = app.login().await;
    let messages = list_messages(&app, &token).await;

    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0]["_id"], json!(id));
    assert_eq!(messages[0]["status"], "unread");
}

#[actix_rt::test]
async fn submission_with_missing_field_returns_400() {
    let app = TestApp::spawn().await;

    let response = app.client
        .post(app.url("/api/contact"))
        .json(&json!({"name": "Visitor", "email": "visitor@example.com"}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[actix_rt::test]
async fn reading_messages_requires_a_token() {
    let app = TestApp::spawn().await;

    let response = app.client
        .get(app.url("/api/contact"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[actix_rt::test]
async fn marking_a_message_read_is_idempotent() {
    let app = TestApp::spawn().await;
    let id = submit_message(&app).await;
    let token = app.login().await;

    for _ in 0..2 {
        let response = app.client
            .put(app.url(&format!("/api/contact/{}", id)))
            .bearer_auth(&token)
            .json(&json!({"status": "read"}))
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body: Value = response.json().await.unwrap();
        assert_eq!(body["status"], "read");
        assert_eq!(body["name"], "Visitor");
    }
}

#[actix_rt::test]
async fn deleting_a_message_requires_a_token_and_is_permanent() {
    let app = TestApp::spawn().await;
    let id = submit_message(&app).await;

    let unauthorized = app.client
        .delete(app.url(&format!("/api/contact/{}", id)))
        .send()
        .await
        .unwrap();
    assert_eq!(unauthorized.status(), StatusCode::UNAUTHORIZED);

    let token = app.login().await;

    let deleted = app.client
        .delete(app.url(&format!("/api/contact/{}", id)))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(deleted.status(), StatusCode::OK);

    assert!(list_messages(&app, &token).await.is_empty());
}
